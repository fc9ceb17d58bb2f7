use std::path::PathBuf;

use crate::{Error, SizeInPx};

pub const VIRTUAL_SIZE: SizeInPx = SizeInPx {
    width: 320,
    height: 240,
};
pub const WINDOW_SIZE: SizeInPx = SizeInPx {
    width: 640,
    height: 480,
};
pub const FPS: u32 = 60;
/// Updates run per event loop iteration at most, after a stall the rest is dropped.
pub const MAX_UPDATES_PER_FRAME: u32 = 8;
pub const TEXTURE: &str = "atlas.bmp";
pub const COLOR_KEY: u32 = 0xff00ff;

#[derive(Clone, Debug)]
pub struct Config {
    pub title: String,
    pub virtual_size: SizeInPx,
    pub window_size: SizeInPx,
    pub update_rate: u32,
    pub draw_rate: u32,
    pub max_updates_per_frame: u32,
    /// Folder searched for (relative to the working directory) to find the atlas.
    pub assets_folder: PathBuf,
    pub texture: String,
    pub color_key: u32,
    pub show_fps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "BugSquasher2".to_string(),
            virtual_size: VIRTUAL_SIZE,
            window_size: WINDOW_SIZE,
            update_rate: FPS,
            draw_rate: FPS,
            max_updates_per_frame: MAX_UPDATES_PER_FRAME,
            assets_folder: PathBuf::from("assets"),
            texture: TEXTURE.to_string(),
            color_key: COLOR_KEY,
            show_fps: cfg!(debug_assertions),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.virtual_size.width == 0 || self.virtual_size.height == 0 {
            return Err(Error::InvalidArgument("virtual size must not be empty"));
        }
        if self.window_size.width == 0 || self.window_size.height == 0 {
            return Err(Error::InvalidArgument("window size must not be empty"));
        }
        if self.update_rate == 0 || self.draw_rate == 0 {
            return Err(Error::InvalidArgument("frame rates must be positive"));
        }
        if self.max_updates_per_frame == 0 {
            return Err(Error::InvalidArgument(
                "at least one update per frame is required",
            ));
        }
        Ok(())
    }

    pub fn find_texture(&self) -> Result<PathBuf, Error> {
        let folder = find_folder::Search::ParentsThenKids(3, 3)
            .for_folder(&self.assets_folder.to_string_lossy())
            .map_err(|_| Error::LoadingFailed(self.assets_folder.clone()))?;

        let texture = folder.join(&self.texture);
        if texture.is_file() {
            Ok(texture)
        } else {
            Err(Error::LoadingFailed(texture))
        }
    }
}
