//! Empty window cleared to the background color every frame.

use std::process::ExitCode;

use opengl_kit::glkit::Result;
use opengl_kit::glkit::render::{RenderLoop, Scene};
use opengl_kit_device_glow::GlutinWindow;

fn run() -> Result<u64> {
    let config = opengl_kit_demo::exercise_config("Hello Window");
    let (mut window, mut device) = GlutinWindow::new(&config.window)?;

    let mut scene = Scene::new();
    RenderLoop::new(&config).run(&mut device, &mut window, &mut scene, |_, _, _| {})
}

fn main() -> ExitCode {
    opengl_kit_demo::exit_code(run())
}
