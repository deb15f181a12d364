//! Shared setup for the exercise binaries

use std::path::PathBuf;
use std::process::ExitCode;

use opengl_kit::glkit::{Config, Error, Result};
use opengl_kit::glkit::render::{DrawCommand, Scene, TextureId};
use opengl_kit::glkit::resource::TextureLoader;
use opengl_kit::glkit::GraphicsDevice;
use opengl_kit::{kit_error, kit_info, kit_warn};

/// Directory holding the GLSL sources of the exercises
pub fn shader_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders")
}

/// Path of an image under the demo assets directory
pub fn asset_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
}

/// Default configuration with the exercise title and the demo shader root
pub fn exercise_config(title: &str) -> Config {
    Config::default()
        .with_title(format!("LearnOpenGL - {}", title))
        .with_shader_root(shader_root())
}

/// Load an asset texture into the scene
///
/// A missing or undecodable image is logged and yields `None`, so the
/// exercise keeps running with the texture unit left empty.
pub fn load_optional_texture(
    device: &mut dyn GraphicsDevice,
    scene: &mut Scene,
    loader: &TextureLoader,
    name: &str,
    wants_alpha: bool,
) -> Result<Option<TextureId>> {
    match loader.load_path(device, asset_path(name), wants_alpha) {
        Ok(texture) => Ok(Some(scene.add_texture(texture))),
        Err(Error::TextureDecodeFailure(msg)) => {
            kit_warn!("demo", "Texture '{}' unavailable, drawing without it ({})", name, msg);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Attach an optional texture to a draw command
pub fn with_optional_texture(command: DrawCommand, unit: u32, texture: Option<TextureId>) -> DrawCommand {
    match texture {
        Some(texture) => command.with_texture(unit, texture),
        None => command,
    }
}

/// Map the outcome of an exercise to the process exit status
pub fn exit_code(result: Result<u64>) -> ExitCode {
    match result {
        Ok(frames) => {
            kit_info!("demo", "Exercise finished after {} frames", frames);
            ExitCode::SUCCESS
        }
        Err(Error::ContextInitFailure(msg)) => {
            kit_error!("demo", "Failed to create the OpenGL window: {}", msg);
            ExitCode::from(2)
        }
        Err(err) => {
            kit_error!("demo", "Exercise aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
