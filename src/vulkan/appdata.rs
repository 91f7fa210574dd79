use vulkanalia::prelude::v1_0::*;

/// Raw Vulkan handles owned by the app. Everything starts out null.
#[derive(Clone, Debug, Default)]
pub struct AppData {
    pub messenger: vk::DebugUtilsMessengerEXT,
    pub physical_device: vk::PhysicalDevice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_start_null() {
        let data = AppData::default();
        assert!(data.messenger.is_null());
        assert!(data.physical_device.is_null());
    }
}
