//! Indexed quad sampling two textures from units 0 and 1.

use std::process::ExitCode;

use opengl_kit::glkit::Result;
use opengl_kit::glkit::render::{DrawCommand, RenderLoop, Scene};
use opengl_kit::glkit::resource::{GpuResourceSet, TextureLoader, VertexLayout};
use opengl_kit::glkit::shader::{ShaderProgram, SourceLoader};
use opengl_kit_demo::{load_optional_texture, with_optional_texture};
use opengl_kit_device_glow::GlutinWindow;

#[rustfmt::skip]
const VERTICES: [f32; 32] = [
    // positions      // colors       // texture coords
     0.5,  0.5, 0.0,  1.0, 0.0, 0.0,  1.0, 1.0, // top right
     0.5, -0.5, 0.0,  0.0, 1.0, 0.0,  1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 0.0, 1.0,  0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,  1.0, 1.0, 0.0,  0.0, 1.0, // top left
];

const INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

fn run() -> Result<u64> {
    let config = opengl_kit_demo::exercise_config("Textures");
    let (mut window, mut device) = GlutinWindow::new(&config.window)?;
    let loader = SourceLoader::from_config(&config);

    let mut scene = Scene::new();
    let program = scene.add_program(ShaderProgram::from_files(
        &mut device,
        &loader,
        "texture.vs",
        "texture.fs",
        config.diagnostic_policy,
    )?);
    let quad = scene.add_resource_set(GpuResourceSet::configure_f32(
        &mut device,
        &VERTICES,
        VertexLayout::interleaved_f32(&[3, 3, 2]),
        Some(&INDICES),
    )?);

    let textures = TextureLoader::from_config(&config);
    let container = load_optional_texture(&mut device, &mut scene, &textures, "container.jpg", false)?;
    let face = load_optional_texture(&mut device, &mut scene, &textures, "awesomeface.png", true)?;

    scene.assign_sampler_units(&mut device, program, &[("texture1", 0), ("texture2", 1)])?;
    if let Some(shader) = scene.program_mut(program) {
        shader.set_float(&mut device, "mixValue", 0.2);
    }

    let command = with_optional_texture(DrawCommand::new(program, quad), 0, container);
    scene.add_draw(with_optional_texture(command, 1, face))?;

    RenderLoop::new(&config).run(&mut device, &mut window, &mut scene, |_, _, _| {})
}

fn main() -> ExitCode {
    opengl_kit_demo::exit_code(run())
}
