//! Interleaved position + color triangle, drawn upside down, with a
//! horizontal offset and a green tint animated from the elapsed time.

use std::process::ExitCode;

use opengl_kit::glkit::Result;
use opengl_kit::glkit::render::{DrawCommand, RenderLoop, Scene};
use opengl_kit::glkit::resource::{GpuResourceSet, VertexLayout};
use opengl_kit::glkit::shader::{ShaderProgram, SourceLoader};
use opengl_kit_device_glow::GlutinWindow;

#[rustfmt::skip]
const VERTICES: [f32; 18] = [
    // positions      // colors
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,  0.0, 0.0, 1.0,
];

fn run() -> Result<u64> {
    let config = opengl_kit_demo::exercise_config("Shaders");
    let (mut window, mut device) = GlutinWindow::new(&config.window)?;
    let loader = SourceLoader::from_config(&config);

    let mut scene = Scene::new();
    let program = scene.add_program(ShaderProgram::from_files(
        &mut device,
        &loader,
        "shader.vs",
        "shader.fs",
        config.diagnostic_policy,
    )?);
    let triangle = scene.add_resource_set(GpuResourceSet::configure_f32(
        &mut device,
        &VERTICES,
        VertexLayout::interleaved_f32(&[3, 3]),
        None,
    )?);
    scene.add_draw(DrawCommand::new(program, triangle))?;

    RenderLoop::new(&config).run(&mut device, &mut window, &mut scene, |device, scene, frame| {
        let Some(shader) = scene.program_mut(program) else { return };
        let t = frame.elapsed_secs();
        shader.use_program(device);
        shader.set_float(device, "xOffset", t.sin() * 0.5);
        shader.set_float(device, "greenValue", t.sin() / 2.0 + 0.5);
    })
}

fn main() -> ExitCode {
    opengl_kit_demo::exit_code(run())
}
