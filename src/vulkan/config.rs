use vulkanalia::prelude::v1_0::*;
use vulkanalia::Version;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Vulkan Window";

pub const APPLICATION_NAME: &[u8] = b"Hello Vulkan Triangle\0";
pub const ENGINE_NAME: &[u8] = b"No Engine\0";

pub const VALIDATION_ENABLED: bool = cfg!(debug_assertions);
pub const VALIDATION_LAYER: vk::ExtensionName =
    vk::ExtensionName::from_bytes(b"VK_LAYER_KHRONOS_validation");
pub const PORTABILITY_MACOS_VERSION: Version = Version::new(1, 3, 216);
pub const VALIDATION_LAYERS: &[vk::ExtensionName] = &[VALIDATION_LAYER];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_nul_terminated() {
        assert_eq!(APPLICATION_NAME.last(), Some(&0));
        assert_eq!(ENGINE_NAME.last(), Some(&0));
    }

    #[test]
    fn validation_follows_build_profile() {
        assert_eq!(VALIDATION_ENABLED, cfg!(debug_assertions));
        assert_eq!(VALIDATION_LAYERS, &[VALIDATION_LAYER]);
        assert_eq!(VALIDATION_LAYER.to_string(), "VK_LAYER_KHRONOS_validation");
    }
}
