use super::Progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Above,
    Below,
}

/// A layer whose vertical position follows the reveal progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollLayer {
    pub entry: Entry,
    pub rest_y: i32,
    pub start_offset: i32,
}

impl ScrollLayer {
    pub fn new(entry: Entry, rest_y: i32, start_offset: i32) -> Self {
        Self {
            entry,
            rest_y,
            start_offset,
        }
    }

    pub fn from_above(rest_y: i32, height: i32) -> Self {
        Self::new(Entry::Above, rest_y, height + rest_y)
    }

    pub fn from_below(rest_y: i32, screen_height: i32) -> Self {
        Self::new(Entry::Below, rest_y, screen_height - rest_y)
    }

    pub fn start_y(&self) -> i32 {
        match self.entry {
            Entry::Above => self.rest_y - self.start_offset,
            Entry::Below => self.rest_y + self.start_offset,
        }
    }

    pub fn position(&self, progress: Progress) -> i32 {
        let travelled = progress.scale(self.start_offset);
        match self.entry {
            Entry::Above => self.start_y() + travelled,
            Entry::Below => self.start_y() - travelled,
        }
    }
}
