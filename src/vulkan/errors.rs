use thiserror::Error;
use vulkanalia::prelude::v1_0::*;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Validation layers requested, but not available (missing `{0}`).")]
    LayerUnavailable(String),
    #[error("Failed to set up debug messenger: {0}.")]
    MessengerCreation(vk::ErrorCode),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceSelectionError {
    #[error("Failed to find GPUs with Vulkan support.")]
    NoVulkanDevices,
    #[error("Failed to find a suitable GPU.")]
    NoSuitableDevice,
}
