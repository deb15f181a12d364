//! Two triangles, each with its own vertex array and its own program,
//! drawn in wireframe mode.

use std::process::ExitCode;

use opengl_kit::glkit::Result;
use opengl_kit::glkit::render::{DrawCommand, RenderLoop, Scene};
use opengl_kit::glkit::resource::{GpuResourceSet, VertexLayout};
use opengl_kit::glkit::shader::{ShaderProgram, SourceLoader};
use opengl_kit_device_glow::GlutinWindow;

const LEFT_TRIANGLE: [f32; 9] = [
    -0.9, -0.5, 0.0,
    0.0, -0.5, 0.0,
    -0.45, 0.5, 0.0,
];

const RIGHT_TRIANGLE: [f32; 9] = [
    0.0, -0.5, 0.0,
    0.9, -0.5, 0.0,
    0.45, 0.5, 0.0,
];

fn run() -> Result<u64> {
    let config = opengl_kit_demo::exercise_config("Hello Triangle").with_wireframe(true);
    let (mut window, mut device) = GlutinWindow::new(&config.window)?;
    let loader = SourceLoader::from_config(&config);
    let policy = config.diagnostic_policy;

    let mut scene = Scene::new();
    let orange = scene.add_program(ShaderProgram::from_files(&mut device, &loader, "hello_triangle.vs", "orange.fs", policy)?);
    let yellow = scene.add_program(ShaderProgram::from_files(&mut device, &loader, "hello_triangle.vs", "yellow.fs", policy)?);

    let left = scene.add_resource_set(GpuResourceSet::configure_f32(
        &mut device,
        &LEFT_TRIANGLE,
        VertexLayout::interleaved_f32(&[3]),
        None,
    )?);
    let right = scene.add_resource_set(GpuResourceSet::configure_f32(
        &mut device,
        &RIGHT_TRIANGLE,
        VertexLayout::interleaved_f32(&[3]),
        None,
    )?);

    scene.add_draw(DrawCommand::new(orange, left))?;
    scene.add_draw(DrawCommand::new(yellow, right))?;

    RenderLoop::new(&config).run(&mut device, &mut window, &mut scene, |_, _, _| {})
}

fn main() -> ExitCode {
    opengl_kit_demo::exit_code(run())
}
