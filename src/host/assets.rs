use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// An image file that could not be read, decoded or scaled.
#[derive(Debug)]
pub struct AssetError {
    pub path: PathBuf,
    pub reason: String,
}

impl Display for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "error loading image {}: {}", self.path.display(), self.reason)
    }
}

impl std::error::Error for AssetError {}

/// Orientation applied after scaling; rotations are clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    None,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipVertical,
}

impl Transform {
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        match self {
            Transform::None => image.clone(),
            Transform::Rotate90 => imageops::rotate90(image),
            Transform::Rotate180 => imageops::rotate180(image),
            Transform::Rotate270 => imageops::rotate270(image),
            Transform::FlipVertical => imageops::flip_vertical(image),
        }
    }
}

/// Decodes `path` and scales it to exactly `size` pixels.
pub fn load_scaled_image(path: &Path, size: [u32; 2]) -> Result<RgbaImage, AssetError> {
    let decoded = image::open(path).map_err(|e| AssetError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if size[0] == 0 || size[1] == 0 {
        return Err(AssetError {
            path: path.to_path_buf(),
            reason: format!("invalid target size {}x{}", size[0], size[1]),
        });
    }
    Ok(imageops::resize(&decoded.to_rgba8(), size[0], size[1], FilterType::Triangle))
}

/// Either an uploaded image or the flat color to draw in its place.
#[derive(Clone)]
pub enum Sprite {
    Image(TextureHandle),
    Flat(Color32),
}

impl Sprite {
    pub fn is_image(&self) -> bool {
        matches!(self, Sprite::Image(_))
    }
}

/// Resolves per-game image files below the asset directory and uploads them to the host.
pub struct AssetLoader<'a> {
    ctx: &'a Context,
    base_dir: PathBuf,
}

impl<'a> AssetLoader<'a> {
    pub fn new(ctx: &'a Context, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            base_dir: base_dir.into(),
        }
    }

    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Loads an optional image; a failure is logged and replaced by a flat color.
    pub fn sprite(&self, relative: &str, size: [u32; 2], fallback: Color32) -> Sprite {
        self.sprite_transformed(relative, size, Transform::None, fallback)
    }

    pub fn sprite_transformed(
        &self,
        relative: &str,
        size: [u32; 2],
        transform: Transform,
        fallback: Color32,
    ) -> Sprite {
        match self.require_transformed(relative, size, transform) {
            Ok(texture) => Sprite::Image(texture),
            Err(e) => {
                log::warn!("{e}; drawing flat color instead");
                Sprite::Flat(fallback)
            }
        }
    }

    /// Loads an image the game cannot run without.
    pub fn require(&self, relative: &str, size: [u32; 2]) -> Result<TextureHandle, AssetError> {
        self.require_transformed(relative, size, Transform::None)
    }

    pub fn require_transformed(
        &self,
        relative: &str,
        size: [u32; 2],
        transform: Transform,
    ) -> Result<TextureHandle, AssetError> {
        let path = self.path_of(relative);
        let image = transform.apply(&load_scaled_image(&path, size)?);
        log::debug!("loaded {} as {}x{}", path.display(), image.width(), image.height());
        Ok(self.upload(relative, image))
    }

    fn upload(&self, name: &str, image: RgbaImage) -> TextureHandle {
        let size = [image.width() as usize, image.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        self.ctx.load_texture(name, color_image, TextureOptions::LINEAR)
    }
}
