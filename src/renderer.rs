use cgmath::Point2;

use crate::{sprite::Spriteset, try_filled, Error, SizeInPx};

pub type Color = [u8; 4];

pub const BLACK: Color = [0, 0, 0, 255];

pub struct Frame {
    size: SizeInPx,
    pixels: Vec<Color>,
}

impl Frame {
    pub fn new<S: Into<SizeInPx>>(size: S) -> Result<Self, Error> {
        let size = size.into();
        let pixels = try_filled(BLACK, size.area())?;
        Ok(Self { size, pixels })
    }

    pub fn size(&self) -> SizeInPx {
        self.size
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[(y * self.size.width + x) as usize])
    }

    /// Copies a tile at `position`, clipped to the frame. Transparent texels are skipped.
    pub fn draw_tile(&mut self, spriteset: &Spriteset, tile: i32, position: Point2<i32>) {
        let rect = match spriteset.tile_rect(tile) {
            Some(rect) => rect,
            None => return,
        };
        let atlas = spriteset.atlas();
        let width = self.size.width as i32;
        let height = self.size.height as i32;

        for dy in 0..rect.height {
            let y = position.y + dy as i32;
            if y < 0 || y >= height {
                continue;
            }
            for dx in 0..rect.width {
                let x = position.x + dx as i32;
                if x < 0 || x >= width {
                    continue;
                }
                let texel = atlas.pixel(rect.left + dx, rect.top + dy);
                if texel[3] == 0 {
                    continue;
                }
                self.pixels[(y * width + x) as usize] = texel;
            }
        }
    }

    pub fn copy_to(&self, target: &mut [u8]) -> Result<(), Error> {
        let source: &[u8] = bytemuck::cast_slice(&self.pixels);
        if target.len() != source.len() {
            return Err(Error::InvalidArgument(
                "target buffer doesn't match the frame size",
            ));
        }
        target.copy_from_slice(source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::tests::checker_atlas;

    fn spriteset() -> Spriteset {
        Spriteset::new(checker_atlas(), (8, 8)).unwrap()
    }

    #[test]
    fn draw_tile_copies_texels_at_position() {
        let mut frame = Frame::new((16, 16)).unwrap();

        frame.draw_tile(&spriteset(), 3, Point2::new(4, 2));

        assert_eq!(frame.pixel(4, 2), Some([3, 0, 0, 255]));
        assert_eq!(frame.pixel(11, 9), Some([3, 0, 0, 255]));
        assert_eq!(frame.pixel(3, 2), Some(BLACK));
        assert_eq!(frame.pixel(12, 2), Some(BLACK));
    }

    #[test]
    fn draw_tile_clips_outside_the_frame() {
        let mut frame = Frame::new((16, 16)).unwrap();

        frame.draw_tile(&spriteset(), 1, Point2::new(-4, 12));

        assert_eq!(frame.pixel(0, 12), Some([1, 0, 0, 255]));
        assert_eq!(frame.pixel(3, 15), Some([1, 0, 0, 255]));
        assert_eq!(frame.pixel(4, 12), Some(BLACK));
    }

    #[test]
    fn draw_sentinel_tile_draws_nothing() {
        let mut frame = Frame::new((8, 8)).unwrap();

        frame.draw_tile(&spriteset(), crate::SENTINEL, Point2::new(0, 0));

        assert!((0..8).all(|x| frame.pixel(x, x) == Some(BLACK)));
    }

    #[test]
    fn copy_to_checks_target_length() {
        let frame = Frame::new((2, 2)).unwrap();
        let mut target = vec![0u8; 16];
        let mut short = vec![0u8; 15];

        assert!(frame.copy_to(&mut target).is_ok());
        assert_eq!(&target[..4], &BLACK);
        assert!(frame.copy_to(&mut short).is_err());
    }
}
