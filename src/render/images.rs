//! Raster assets
//!
//! Decorative and illustrative images live in the configured asset
//! directory. A missing or unreadable asset is not an error: the store
//! reports it as absent and layout carries on without it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::Result;

/// Decoded image, flattened to opaque 8-bit RGB.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    /// Flatten any alpha channel onto a white background.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for px in rgba.pixels() {
            let [r, g, b, a] = px.0;
            let a = u16::from(a);
            for c in [r, g, b] {
                let blended = (u16::from(c) * a + 255 * (255 - a)) / 255;
                rgb.push(blended as u8);
            }
        }
        Self { width, height, rgb }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::from_dynamic(image::open(path)?))
    }

    /// Height for a given display width, preserving aspect ratio.
    pub fn height_for(&self, width: f32) -> f32 {
        if self.width == 0 {
            return 0.0;
        }
        width * self.height as f32 / self.width as f32
    }
}

/// Images referenced by one document, each decoded once.
#[derive(Debug, Default)]
pub struct ImageStore {
    asset_dir: PathBuf,
    images: Vec<RasterImage>,
    by_path: HashMap<PathBuf, Option<usize>>,
}

impl ImageStore {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            ..Default::default()
        }
    }

    /// Index of a named asset, or `None` when it is absent or undecodable.
    pub fn asset(&mut self, name: &str) -> Option<usize> {
        let path = self.asset_dir.join(name);
        if let Some(cached) = self.by_path.get(&path) {
            return *cached;
        }
        let loaded = if !path.exists() {
            tracing::debug!("asset {:?} not found, skipping", path);
            None
        } else {
            match RasterImage::open(&path) {
                Ok(img) => Some(self.push(img)),
                Err(e) => {
                    tracing::warn!("asset {:?} unreadable, skipping: {}", path, e);
                    None
                }
            }
        };
        self.by_path.insert(path, loaded);
        loaded
    }

    /// Load a generated file. Unlike assets, failure here is an error.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let img = RasterImage::open(path)?;
        Ok(self.push(img))
    }

    fn push(&mut self, img: RasterImage) -> usize {
        self.images.push(img);
        self.images.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&RasterImage> {
        self.images.get(index)
    }

    pub fn into_images(self) -> Vec<RasterImage> {
        self.images
    }
}
