use cgmath::Point2;

use crate::{renderer::Frame, sprite::Spriteset, try_filled, Error, SENTINEL};

pub struct Tilemap {
    spriteset: Spriteset,
    width_in_tiles: u32,
    height_in_tiles: u32,
    pub position: Point2<i32>,
    tiles: Vec<i32>,
}

impl Tilemap {
    pub fn new(spriteset: Spriteset, width_in_tiles: u32, height_in_tiles: u32) -> Result<Self, Error> {
        if width_in_tiles == 0 || height_in_tiles == 0 {
            return Err(Error::InvalidArgument("tilemap must not be empty"));
        }
        let tiles = try_filled(SENTINEL, width_in_tiles as usize * height_in_tiles as usize)?;

        Ok(Self {
            spriteset,
            width_in_tiles,
            height_in_tiles,
            position: Point2::new(0, 0),
            tiles,
        })
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Point2::new(x, y);
        self
    }

    /// Loads `data`, `width` tiles per row, into the top-left corner of the map.
    /// Cells outside of `data` are left untouched.
    pub fn load(&mut self, data: &[i32], width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument("tile data must not be empty"));
        }
        if width > self.width_in_tiles || height > self.height_in_tiles {
            return Err(Error::InvalidArgument("tile data is larger than the tilemap"));
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::InvalidArgument("tile data doesn't match its dimensions"));
        }

        for (row, line) in data.chunks(width as usize).enumerate() {
            let start = row * self.width_in_tiles as usize;
            self.tiles[start..start + line.len()].copy_from_slice(line);
        }
        Ok(())
    }

    pub fn tiles(&self) -> &[i32] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [i32] {
        &mut self.tiles
    }

    pub fn dimensions_in_tiles(&self) -> (u32, u32) {
        (self.width_in_tiles, self.height_in_tiles)
    }

    pub fn draw(&self, frame: &mut Frame) {
        let tile_width = self.spriteset.tile_dimensions.width as i32;
        let tile_height = self.spriteset.tile_dimensions.height as i32;

        for (row, line) in self.tiles.chunks(self.width_in_tiles as usize).enumerate() {
            for (column, &tile) in line.iter().enumerate() {
                if tile == SENTINEL {
                    continue;
                }
                let position = Point2::new(
                    self.position.x + column as i32 * tile_width,
                    self.position.y + row as i32 * tile_height,
                );
                frame.draw_tile(&self.spriteset, tile, position);
            }
        }
    }
}
