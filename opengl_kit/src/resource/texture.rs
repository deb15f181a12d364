/// 2D textures
///
/// `TextureLoader` decodes an image with the `image` crate, flips it so the
/// first row is the bottom of the picture (texture coordinate origin), and
/// uploads it with a full mipmap chain.

use std::fs;
use std::path::Path;
use crate::config::Config;
use crate::device::{
    GraphicsDevice, TextureHandle, ChannelLayout, WrapMode, FilterMode, TextureParameter,
};
use crate::error::{Error, Result};
use crate::shader::{Diagnostic, DiagnosticKind};

/// Number of levels in a full mipmap chain: floor(log2(max(w, h))) + 1
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Uploaded 2D texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    handle: TextureHandle,
    width: u32,
    height: u32,
    channel_layout: ChannelLayout,
    wrap_mode: WrapMode,
    filter_mode: FilterMode,
    mip_levels: u32,
}

impl Texture {
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_layout(&self) -> ChannelLayout {
        self.channel_layout
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn mip_levels(&self) -> u32 {
        self.mip_levels
    }

    /// Bind to a texture unit (leaves that unit active)
    pub fn bind(&self, device: &mut dyn GraphicsDevice, unit: u32) {
        device.active_texture(unit);
        device.bind_texture(Some(self.handle));
    }

    /// Delete the device texture
    pub fn release(self, device: &mut dyn GraphicsDevice) {
        device.delete_texture(self.handle);
        crate::kit_debug!("glkit::Texture", "Released texture {}", self.handle.0);
    }
}

/// Decodes images and uploads them as mipmapped 2D textures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLoader {
    /// Flip rows so the image bottom is uploaded first
    pub flip_vertically: bool,
    pub wrap_mode: WrapMode,
    pub filter_mode: FilterMode,
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self {
            flip_vertically: true,
            wrap_mode: WrapMode::Repeat,
            filter_mode: FilterMode::Linear,
        }
    }
}

impl TextureLoader {
    /// Loader honoring `Config::flip_textures`
    pub fn from_config(config: &Config) -> Self {
        Self {
            flip_vertically: config.flip_textures,
            ..Self::default()
        }
    }

    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// Decode encoded image bytes (PNG, JPEG, BMP, GIF) and upload them
    ///
    /// `wants_alpha` selects RGBA8 storage, otherwise RGB8. The texture
    /// previously bound on the active unit is bound again afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Error::TextureDecodeFailure` if the bytes cannot be decoded;
    /// the texture object generated for it is deleted first.
    pub fn load(&self, device: &mut dyn GraphicsDevice, image_bytes: &[u8], wants_alpha: bool) -> Result<Texture> {
        let handle = device.create_texture()?;
        let previous = device.bound_texture(device.active_texture_unit());
        device.bind_texture(Some(handle));
        device.tex_parameter(TextureParameter::WrapS(self.wrap_mode));
        device.tex_parameter(TextureParameter::WrapT(self.wrap_mode));
        device.tex_parameter(TextureParameter::MinFilter(self.filter_mode));
        device.tex_parameter(TextureParameter::MagFilter(self.filter_mode));

        let decoded = match image::load_from_memory(image_bytes) {
            Ok(decoded) => decoded,
            Err(err) => {
                device.bind_texture(previous);
                device.delete_texture(handle);
                return Err(decode_failure(err.to_string()));
            }
        };
        let decoded = if self.flip_vertically { decoded.flipv() } else { decoded };

        let (width, height, channel_layout, pixels) = if wants_alpha {
            let rgba = decoded.to_rgba8();
            (rgba.width(), rgba.height(), ChannelLayout::Rgba, rgba.into_raw())
        } else {
            let rgb = decoded.to_rgb8();
            (rgb.width(), rgb.height(), ChannelLayout::Rgb, rgb.into_raw())
        };

        device.tex_image_2d(width, height, channel_layout, &pixels);
        device.generate_mipmap();
        drop(pixels);
        device.bind_texture(previous);

        crate::kit_debug!(
            "glkit::TextureLoader",
            "Uploaded texture {} ({}x{}, {:?})",
            handle.0,
            width,
            height,
            channel_layout
        );

        Ok(Texture {
            handle,
            width,
            height,
            channel_layout,
            wrap_mode: self.wrap_mode,
            filter_mode: self.filter_mode,
            mip_levels: mip_level_count(width, height),
        })
    }

    /// Read an image file and upload it
    ///
    /// # Errors
    ///
    /// A missing or unreadable file is reported as
    /// `Error::TextureDecodeFailure`, like undecodable data.
    pub fn load_path(
        &self,
        device: &mut dyn GraphicsDevice,
        path: impl AsRef<Path>,
        wants_alpha: bool,
    ) -> Result<Texture> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| decode_failure(format!("{}: {}", path.display(), e)))?;
        self.load(device, &bytes, wants_alpha).map_err(|err| match err {
            Error::TextureDecodeFailure(msg) => Error::TextureDecodeFailure(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }
}

fn decode_failure(message: String) -> Error {
    Diagnostic::new(DiagnosticKind::Texture, message.as_str()).report("glkit::TextureLoader");
    Error::TextureDecodeFailure(message)
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
