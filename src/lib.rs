use std::path::PathBuf;

use thiserror::Error;

pub mod anim;
pub mod assets;
pub mod config;
pub mod engine;
pub mod game;
pub mod renderer;
pub mod sprite;
pub mod states;
pub mod text;
pub mod tilemap;

pub use config::Config;
pub use game::{Game, GameContext, Update};

/// Tile index meaning "draw nothing here".
pub const SENTINEL: i32 = -1;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Couldn't allocate memory")]
    AllocationFailed,

    #[error(transparent)]
    InvalidTileData(#[from] TileDataError),

    #[error("Couldn't load {0}")]
    LoadingFailed(PathBuf),

    #[error("Couldn't decode image")]
    Image(#[from] image::ImageError),

    #[error("Couldn't create the window")]
    WindowCreationFailed(#[from] winit::error::OsError),

    #[error("Rendering failed")]
    RenderingFailed(#[from] pixels::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileDataError {
    #[error("Invalid tile data on line {line}: {value:?}")]
    InvalidEntry { line: usize, value: String },

    #[error("Tile table doesn't match its dimensions: {found} entries, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

/// Reserves exactly `len` slots, reporting exhaustion instead of aborting.
pub(crate) fn try_filled<T: Clone>(value: T, len: usize) -> Result<Vec<T>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::AllocationFailed)?;
    data.resize(len, value);
    Ok(data)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeInPx {
    pub width: u32,
    pub height: u32,
}

impl SizeInPx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<(u32, u32)> for SizeInPx {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
