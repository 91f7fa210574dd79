#![allow(
    dead_code,
    clippy::unnecessary_wraps
    )]

mod vulkan;

use crate::vulkan::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::vulkan::App;

use anyhow::Result;
use log::*;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    pretty_env_logger::init();

    // Window

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    // App

    let mut app = unsafe { App::create(&window)? };
    let mut window = Some(window);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                // Tear down in reverse order: Vulkan objects, then the window.
                unsafe {
                    app.destroy();
                }
                window.take();
                *control_flow = ControlFlow::Exit;
            }
            Event::LoopDestroyed => {
                // Also reached when the platform ends the loop without a close request.
                unsafe {
                    app.destroy();
                }
                info!("Goodbye.");
            }
            _ => {}
        }
    });
}
