use anyhow::{anyhow, Result};
use log::*;
use vulkanalia::loader::{LibloadingLoader, LIBRARY};
use vulkanalia::prelude::v1_0::*;
use winit::window::Window;

use super::appdata::AppData;
use super::{instance, physical_device, validation_layers};

/// Our Vulkan app.
#[derive(Clone, Debug)]
pub struct App {
    pub entry: Entry,
    pub instance: Instance,
    pub data: AppData,
    destroyed: bool,
}

impl App {
    /// Creates our Vulkan app.
    pub unsafe fn create(window: &Window) -> Result<Self> {
        let loader = LibloadingLoader::new(LIBRARY)?;
        let entry = Entry::new(loader).map_err(|b| anyhow!("{}", b))?;
        let mut data = AppData::default();

        let (instance, optional_messenger) = instance::create_instance(window, &entry)?;
        if let Some(messenger) = optional_messenger {
            data.messenger = messenger;
        }

        let mut app = Self { entry, instance, data, destroyed: false };

        match physical_device::pick_physical_device(&app.instance) {
            Ok(physical_device) => app.data.physical_device = physical_device,
            Err(error) => {
                app.destroy();
                return Err(error);
            }
        }

        Ok(app)
    }

    /// Destroys our Vulkan app, in reverse order of creation.
    /// Calling it again is a no-op.
    pub unsafe fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        // The physical device goes away with the instance.
        self.data.physical_device = vk::PhysicalDevice::null();

        validation_layers::destroy_debug_messenger(&self.instance, self.data.messenger);
        self.data.messenger = vk::DebugUtilsMessengerEXT::null();

        instance::destroy_instance(&self.instance);
        self.destroyed = true;

        info!("Destroyed Vulkan app.");
    }
}
