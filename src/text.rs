use cgmath::Point2;

use crate::{renderer::Frame, sprite::Spriteset};

/// First character with a glyph in the atlas, everything below is blank.
const FIRST_GLYPH: char = '!';

pub struct Text {
    spriteset: Spriteset,
    pub position: Point2<i32>,
    max_width: usize,
    max_lines: usize,
    first_tile: i32,
    text: String,
}

impl Text {
    pub fn new(
        spriteset: Spriteset,
        position: Point2<i32>,
        max_width: usize,
        max_lines: usize,
        first_tile: i32,
    ) -> Self {
        Self {
            spriteset,
            position,
            max_width,
            max_lines,
            first_tile,
            text: String::new(),
        }
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn tile_for(&self, character: char) -> Option<i32> {
        if character < FIRST_GLYPH {
            return None;
        }
        Some(self.first_tile + (character as i32 - FIRST_GLYPH as i32))
    }

    /// Lays the text out, wrapping at `max_width` characters and dropping what
    /// doesn't fit in `max_lines`. Yields (column, line, tile).
    pub fn layout(&self) -> Vec<(usize, usize, i32)> {
        let mut glyphs = vec![];
        let (mut column, mut line) = (0, 0);

        for character in self.text.chars() {
            if character == '\n' || column >= self.max_width {
                column = 0;
                line += 1;
            }
            if line >= self.max_lines {
                break;
            }
            if character == '\n' {
                continue;
            }
            if let Some(tile) = self.tile_for(character) {
                glyphs.push((column, line, tile));
            }
            column += 1;
        }
        glyphs
    }

    pub fn draw(&self, frame: &mut Frame) {
        let tile_width = self.spriteset.tile_dimensions.width as i32;
        let tile_height = self.spriteset.tile_dimensions.height as i32;

        for (column, line, tile) in self.layout() {
            let position = Point2::new(
                self.position.x + column as i32 * tile_width,
                self.position.y + line as i32 * tile_height,
            );
            frame.draw_tile(&self.spriteset, tile, position);
        }
    }
}
