use std::{path::Path, rc::Rc};

use crate::{Error, SizeInPx};

pub struct Atlas {
    pub dimensions: SizeInPx,
    rgba: Vec<[u8; 4]>,
}

impl Atlas {
    /// Loads an image, every pixel matching `color_key` (0xRRGGBB) becomes transparent.
    pub fn load_image<P: AsRef<Path>>(path: P, color_key: u32) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::LoadingFailed(path.into()));
        }
        let image = image::open(path)?.to_rgba8();
        let dimensions = SizeInPx::new(image.width(), image.height());

        let mut rgba: Vec<[u8; 4]> = bytemuck::cast_slice(image.as_raw()).to_vec();
        apply_color_key(&mut rgba, color_key);

        log::info!(
            "Loaded atlas {} ({}x{})",
            path.display(),
            dimensions.width,
            dimensions.height
        );

        Self::from_rgba(rgba, dimensions)
    }

    pub fn from_rgba<S: Into<SizeInPx>>(rgba: Vec<[u8; 4]>, dimensions: S) -> Result<Self, Error> {
        let dimensions = dimensions.into();
        if rgba.len() != dimensions.area() {
            return Err(Error::InvalidArgument(
                "atlas pixel count doesn't match its dimensions",
            ));
        }
        Ok(Self { dimensions, rgba })
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.rgba[(y * self.dimensions.width + x) as usize]
    }
}

fn apply_color_key(rgba: &mut [[u8; 4]], color_key: u32) {
    let [_, r, g, b] = color_key.to_be_bytes();
    for pixel in rgba.iter_mut() {
        if pixel[0] == r && pixel[1] == g && pixel[2] == b {
            pixel[3] = 0;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// The atlas sliced into tiles of the same size, indexed row by row.
#[derive(Clone)]
pub struct Spriteset {
    atlas: Rc<Atlas>,
    pub tile_dimensions: SizeInPx,
    columns: u32,
    rows: u32,
}

impl Spriteset {
    pub fn new<S: Into<SizeInPx>>(atlas: Rc<Atlas>, tile_dimensions: S) -> Result<Self, Error> {
        let tile_dimensions = tile_dimensions.into();
        if tile_dimensions.width == 0 || tile_dimensions.height == 0 {
            return Err(Error::InvalidArgument("tiles must not be empty"));
        }

        let columns = atlas.dimensions.width / tile_dimensions.width;
        let rows = atlas.dimensions.height / tile_dimensions.height;

        Ok(Self {
            atlas,
            tile_dimensions,
            columns,
            rows,
        })
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    pub fn tile_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Negative or out of range indices have no tile.
    pub fn tile_rect(&self, index: i32) -> Option<TileRect> {
        let index = u32::try_from(index).ok()?;
        if index as usize >= self.tile_count() {
            return None;
        }

        Some(TileRect {
            left: (index % self.columns) * self.tile_dimensions.width,
            top: (index / self.columns) * self.tile_dimensions.height,
            width: self.tile_dimensions.width,
            height: self.tile_dimensions.height,
        })
    }
}

pub struct Spritesets {
    pub s8x8: Spriteset,
    pub s8x16: Spriteset,
    pub s16x16: Spriteset,
    pub s32x32: Spriteset,
}

impl Spritesets {
    pub fn new(atlas: Rc<Atlas>) -> Result<Self, Error> {
        Ok(Self {
            s8x8: Spriteset::new(atlas.clone(), (8, 8))?,
            s8x16: Spriteset::new(atlas.clone(), (8, 16))?,
            s16x16: Spriteset::new(atlas.clone(), (16, 16))?,
            s32x32: Spriteset::new(atlas, (32, 32))?,
        })
    }
}
