/**
 *
 * Vulkan initialization and teardown
 *
 */

mod app;
mod appdata;
pub mod config;
mod errors;
mod instance;
mod physical_device;
mod validation_layers;

pub use self::app::App;
