use anyhow::{anyhow, Result};
use log::*;
use vulkanalia::prelude::v1_0::*;

use super::errors::DeviceSelectionError;

pub unsafe fn pick_physical_device(instance: &Instance) -> Result<vk::PhysicalDevice> {
    let physical_devices = instance.enumerate_physical_devices()?;
    debug!("Found {} physical device(s).", physical_devices.len());

    let physical_device = select_first_suitable(&physical_devices, |physical_device| {
        let suitable = is_device_suitable(instance, physical_device);
        if !suitable {
            let properties = instance.get_physical_device_properties(physical_device);
            warn!("Skipping physical device (`{}`).", properties.device_name);
        }
        suitable
    })
    .map_err(|e| anyhow!(e))?;

    let properties = instance.get_physical_device_properties(physical_device);
    info!(
        "Selected physical device (`{}`, {:?}).",
        properties.device_name, properties.device_type
    );

    Ok(physical_device)
}

/// First device accepted by `is_suitable`, in enumeration order.
pub fn select_first_suitable<T: Copy>(
    devices: &[T],
    mut is_suitable: impl FnMut(T) -> bool,
) -> Result<T, DeviceSelectionError> {
    if devices.is_empty() {
        return Err(DeviceSelectionError::NoVulkanDevices);
    }

    devices
        .iter()
        .copied()
        .find(|device| is_suitable(*device))
        .ok_or(DeviceSelectionError::NoSuitableDevice)
}

/// Every device qualifies until something needs queues or extensions.
pub unsafe fn is_device_suitable(
    _instance: &Instance,
    _physical_device: vk::PhysicalDevice,
) -> bool {
    true
}
