use anyhow::Result;
use itertools::Itertools;
use log::*;
use std::collections::HashSet;
use std::os::raw::c_char;
use vulkanalia::prelude::v1_0::*;
use vulkanalia::window as vk_window;

use winit::window::Window;

use super::config::{
    APPLICATION_NAME, ENGINE_NAME, PORTABILITY_MACOS_VERSION, VALIDATION_ENABLED,
};
use super::validation_layers;

/// Instance extensions to enable: whatever the window system needs, plus
/// debug utils when validating and the portability pair on newer macOS loaders.
pub fn required_extensions(
    window_extensions: &[&vk::ExtensionName],
    validation: bool,
    portability: bool,
) -> Vec<vk::ExtensionName> {
    let mut extensions: Vec<vk::ExtensionName> =
        window_extensions.iter().map(|e| **e).collect();

    if validation {
        extensions.push(vk::EXT_DEBUG_UTILS_EXTENSION.name);
    }

    if portability {
        extensions.push(vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_EXTENSION.name);
        extensions.push(vk::KHR_PORTABILITY_ENUMERATION_EXTENSION.name);
    }

    extensions
}

pub fn missing_extensions(
    required: &[vk::ExtensionName],
    available: &HashSet<vk::ExtensionName>,
) -> Vec<vk::ExtensionName> {
    required
        .iter()
        .filter(|e| !available.contains(*e))
        .copied()
        .collect()
}

/// Create an instance of Vulkan with added checks and features:
/// - flags to enable portability extensions for MacOS
/// - application info for the triangle app
/// - validation layers, with a messenger chained onto instance creation
///
/// The standalone debug messenger is returned alongside the instance when
/// validation is enabled.
pub unsafe fn create_instance(
    window: &Window,
    entry: &Entry,
) -> Result<(Instance, Option<vk::DebugUtilsMessengerEXT>)> {
    // Fail before touching the instance if the layers are not installed.
    let layers = validation_layers::get_validation_layers(entry)?;

    let application_info = vk::ApplicationInfo::builder()
        .application_name(APPLICATION_NAME)
        .application_version(vk::make_version(1, 0, 0))
        .engine_name(ENGINE_NAME)
        .engine_version(vk::make_version(1, 0, 0))
        .api_version(vk::make_version(1, 0, 0));

    let portability =
        cfg!(target_os = "macos") && entry.version()? >= PORTABILITY_MACOS_VERSION;
    let flags = if portability {
        info!("Enabling extensions for macOS portability.");
        vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR
    } else {
        vk::InstanceCreateFlags::empty()
    };

    let extensions = required_extensions(
        vk_window::get_required_instance_extensions(window),
        VALIDATION_ENABLED,
        portability,
    );
    let extension_pointers: Vec<*const c_char> =
        extensions.iter().map(|e| e.as_ptr()).collect();

    let mut info = vk::InstanceCreateInfo::builder()
        .application_info(&application_info)
        .enabled_extension_names(&extension_pointers)
        .enabled_layer_names(&layers)
        .flags(flags);

    let mut debug_info = validation_layers::debug_messenger_info();
    if VALIDATION_ENABLED {
        info = info.push_next(&mut debug_info);
    }

    let instance = entry.create_instance(&info, None)?;
    info!("Created Vulkan instance.");

    let available: Result<Vec<vk::ExtensionName>, vk::ErrorCode> = entry
        .enumerate_instance_extension_properties(None)
        .map(|properties| properties.iter().map(|e| e.extension_name).collect());
    report_extension_support(&extensions, available);

    let messenger = match validation_layers::create_debug_messenger(&instance) {
        Ok(messenger) => messenger,
        Err(error) => {
            destroy_instance(&instance);
            return Err(error);
        }
    };

    Ok((instance, messenger))
}

#[derive(Debug, PartialEq, Eq)]
pub enum ExtensionSupport {
    Complete,
    Missing(Vec<vk::ExtensionName>),
    /// The loader could not list its extensions.
    Unknown,
}

/// Logs every instance extension the loader offers and whether the ones we
/// enabled are all among them. A failed enumeration is only worth a warning.
pub fn report_extension_support(
    required: &[vk::ExtensionName],
    available: Result<Vec<vk::ExtensionName>, vk::ErrorCode>,
) -> ExtensionSupport {
    let available = match available {
        Ok(available) => available,
        Err(error) => {
            warn!("Could not enumerate instance extensions: {}.", error);
            return ExtensionSupport::Unknown;
        }
    };

    debug!("Available extensions:");
    for extension in &available {
        debug!("\t{}", extension);
    }

    let missing = missing_extensions(required, &available.iter().copied().collect());
    if missing.is_empty() {
        info!("All required instance extensions are supported.");
        ExtensionSupport::Complete
    } else {
        warn!(
            "Required instance extensions: {}; unsupported: {}.",
            required.iter().join(", "),
            missing.iter().join(", ")
        );
        ExtensionSupport::Missing(missing)
    }
}

pub unsafe fn destroy_instance(instance: &Instance) {
    instance.destroy_instance(None);
}
