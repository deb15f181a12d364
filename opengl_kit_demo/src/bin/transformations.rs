//! Textured quad moved to the bottom-right corner and rotated over time.

use std::process::ExitCode;

use glam::{Mat4, Vec3};
use opengl_kit::glkit::Result;
use opengl_kit::glkit::render::{DrawCommand, RenderLoop, Scene};
use opengl_kit::glkit::resource::{GpuResourceSet, TextureLoader, VertexLayout};
use opengl_kit::glkit::shader::{ShaderProgram, SourceLoader};
use opengl_kit_demo::{load_optional_texture, with_optional_texture};
use opengl_kit_device_glow::GlutinWindow;

#[rustfmt::skip]
const VERTICES: [f32; 20] = [
    // positions      // texture coords
     0.5,  0.5, 0.0,  1.0, 1.0,
     0.5, -0.5, 0.0,  1.0, 0.0,
    -0.5, -0.5, 0.0,  0.0, 0.0,
    -0.5,  0.5, 0.0,  0.0, 1.0,
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

fn transform_at(seconds: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.5, -0.5, 0.0)) * Mat4::from_rotation_z(seconds)
}

fn run() -> Result<u64> {
    let config = opengl_kit_demo::exercise_config("Transformations");
    let (mut window, mut device) = GlutinWindow::new(&config.window)?;
    let loader = SourceLoader::from_config(&config);

    let mut scene = Scene::new();
    let program = scene.add_program(ShaderProgram::from_files(
        &mut device,
        &loader,
        "transform.vs",
        "transform.fs",
        config.diagnostic_policy,
    )?);
    let quad = scene.add_resource_set(GpuResourceSet::configure_f32(
        &mut device,
        &VERTICES,
        VertexLayout::interleaved_f32(&[3, 2]),
        Some(&INDICES),
    )?);

    let textures = TextureLoader::from_config(&config);
    let container = load_optional_texture(&mut device, &mut scene, &textures, "container.jpg", false)?;
    let face = load_optional_texture(&mut device, &mut scene, &textures, "awesomeface.png", true)?;
    scene.assign_sampler_units(&mut device, program, &[("texture1", 0), ("texture2", 1)])?;

    let command = with_optional_texture(DrawCommand::new(program, quad), 0, container);
    scene.add_draw(with_optional_texture(command, 1, face))?;

    RenderLoop::new(&config).run(&mut device, &mut window, &mut scene, |device, scene, frame| {
        let Some(shader) = scene.program_mut(program) else { return };
        shader.use_program(device);
        shader.set_mat4(device, "transform", &transform_at(frame.elapsed_secs()));
    })
}

fn main() -> ExitCode {
    opengl_kit_demo::exit_code(run())
}
