use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::*;
use std::borrow::Cow;
use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::{c_char, c_void};
use vulkanalia::prelude::v1_0::*;
use vulkanalia::vk::ExtDebugUtilsExtension;

use super::config::{VALIDATION_ENABLED, VALIDATION_LAYERS};
use super::errors::ValidationError;

/// Layers from `requested` that are absent from `available`, in request order.
pub fn missing_layers(
    requested: &[vk::ExtensionName],
    available: &HashSet<vk::ExtensionName>,
) -> Vec<vk::ExtensionName> {
    requested
        .iter()
        .filter(|layer| !available.contains(*layer))
        .copied()
        .collect()
}

pub unsafe fn check_validation_layer_support(entry: &Entry) -> Result<()> {
    let available_layers = entry
        .enumerate_instance_layer_properties()?
        .iter()
        .map(|l| l.layer_name)
        .collect::<HashSet<_>>();

    let missing = missing_layers(VALIDATION_LAYERS, &available_layers);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!(ValidationError::LayerUnavailable(
            missing.iter().join(", ")
        )))
    }
}

pub unsafe fn get_validation_layers(entry: &Entry) -> Result<Vec<*const c_char>> {
    if !VALIDATION_ENABLED {
        return Ok(Vec::new());
    }

    check_validation_layer_support(entry)?;
    debug!("Enabling layers: {}.", VALIDATION_LAYERS.iter().join(", "));

    Ok(VALIDATION_LAYERS.iter().map(|l| l.as_ptr()).collect())
}

/// Messenger settings shared by the standalone messenger and the one chained
/// onto instance creation.
pub fn debug_messenger_info() -> vk::DebugUtilsMessengerCreateInfoEXTBuilder<'static> {
    vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .user_callback(Some(debug_callback))
}

pub unsafe fn create_debug_messenger(
    instance: &Instance,
) -> Result<Option<vk::DebugUtilsMessengerEXT>> {
    if !VALIDATION_ENABLED {
        return Ok(None);
    }

    let info = debug_messenger_info();
    let messenger = instance
        .create_debug_utils_messenger_ext(&info, None)
        .map_err(|e| anyhow!(ValidationError::MessengerCreation(e)))?;

    debug!("Created debug messenger.");
    Ok(Some(messenger))
}

/// ## Note:
/// Make sure the messenger is destroyed before the instance.
pub unsafe fn destroy_debug_messenger(
    instance: &Instance,
    messenger: vk::DebugUtilsMessengerEXT,
) {
    if VALIDATION_ENABLED && !messenger.is_null() {
        instance.destroy_debug_utils_messenger_ext(messenger, None);
    }
}

pub fn message_level(severity: vk::DebugUtilsMessageSeverityFlagsEXT) -> Level {
    if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::ERROR {
        Level::Error
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::WARNING {
        Level::Warn
    } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::INFO {
        Level::Debug
    } else {
        Level::Trace
    }
}

/// Forwards validation messages to the logger. Always answers `VK_FALSE` so
/// the call that triggered the message goes ahead.
extern "system" fn debug_callback(
    severity: vk::DebugUtilsMessageSeverityFlagsEXT,
    type_: vk::DebugUtilsMessageTypeFlagsEXT,
    data: *const vk::DebugUtilsMessengerCallbackDataEXT,
    _: *mut c_void,
) -> vk::Bool32 {
    if data.is_null() {
        return vk::FALSE;
    }

    let data = unsafe { *data };
    let message = if data.message.is_null() {
        Cow::Borrowed("<no message>")
    } else {
        unsafe { CStr::from_ptr(data.message) }.to_string_lossy()
    };

    log!(message_level(severity), "({:?}) validation layer: {}", type_, message);

    vk::FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    const KHRONOS: vk::ExtensionName = vk::ExtensionName::from_bytes(b"VK_LAYER_KHRONOS_validation");
    const MONITOR: vk::ExtensionName = vk::ExtensionName::from_bytes(b"VK_LAYER_LUNARG_monitor");

    #[test]
    fn no_layers_missing_when_all_available() {
        let available = [KHRONOS, MONITOR].into_iter().collect::<HashSet<_>>();
        assert!(missing_layers(&[KHRONOS], &available).is_empty());
    }

    #[test]
    fn reports_each_missing_layer() {
        let available = [MONITOR].into_iter().collect::<HashSet<_>>();
        assert_eq!(missing_layers(&[KHRONOS, MONITOR], &available), vec![KHRONOS]);
        assert_eq!(missing_layers(&[KHRONOS], &HashSet::new()), vec![KHRONOS]);
    }

    #[test]
    fn nothing_requested_nothing_missing() {
        assert!(missing_layers(&[], &HashSet::new()).is_empty());
    }

    #[test]
    fn severity_maps_to_log_level() {
        use vk::DebugUtilsMessageSeverityFlagsEXT as Severity;

        assert_eq!(message_level(Severity::ERROR), Level::Error);
        assert_eq!(message_level(Severity::WARNING), Level::Warn);
        assert_eq!(message_level(Severity::INFO), Level::Debug);
        assert_eq!(message_level(Severity::VERBOSE), Level::Trace);
    }

    #[test]
    fn messenger_info_covers_requested_messages() {
        use vk::DebugUtilsMessageSeverityFlagsEXT as Severity;
        use vk::DebugUtilsMessageTypeFlagsEXT as Type;

        let info = debug_messenger_info();
        assert_eq!(
            info.message_severity,
            Severity::VERBOSE | Severity::WARNING | Severity::ERROR
        );
        assert!(!info.message_severity.contains(Severity::INFO));
        assert_eq!(
            info.message_type,
            Type::GENERAL | Type::VALIDATION | Type::PERFORMANCE
        );
        assert!(info.user_callback.is_some());
    }

    #[test]
    fn callback_never_aborts() {
        let message = b"test message\0";
        let data = vk::DebugUtilsMessengerCallbackDataEXT {
            message: message.as_ptr() as *const c_char,
            ..Default::default()
        };

        let result = debug_callback(
            vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
            vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
            &data,
            std::ptr::null_mut(),
        );
        assert_eq!(result, vk::FALSE);

        let result = debug_callback(
            vk::DebugUtilsMessageSeverityFlagsEXT::WARNING,
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL,
            std::ptr::null(),
            std::ptr::null_mut(),
        );
        assert_eq!(result, vk::FALSE);
    }
}
