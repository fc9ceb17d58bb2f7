use once_cell::sync::Lazy;

use crate::{anim::TileTable, Error, TileDataError};

pub const TITLE_SIZE: (u32, u32) = (32, 16);
pub const BACKGROUND_SIZE: (u32, u32) = (40, 8);
pub const FLOOR_SIZE: (u32, u32) = (20, 4);

static TITLE_CSV: &str = include_str!("../assets/title.csv");
static BACKGROUND_CSV: &str = include_str!("../assets/background.csv");
static FLOOR_CSV: &str = include_str!("../assets/floor.csv");

static TITLE: Lazy<Result<TileTable, TileDataError>> =
    Lazy::new(|| parse_table(TITLE_CSV, TITLE_SIZE));
static BACKGROUND: Lazy<Result<TileTable, TileDataError>> =
    Lazy::new(|| parse_table(BACKGROUND_CSV, BACKGROUND_SIZE));
static FLOOR: Lazy<Result<TileTable, TileDataError>> =
    Lazy::new(|| parse_table(FLOOR_CSV, FLOOR_SIZE));

pub fn title() -> Result<TileTable, Error> {
    cloned(&TITLE)
}

pub fn background() -> Result<TileTable, Error> {
    cloned(&BACKGROUND)
}

pub fn floor() -> Result<TileTable, Error> {
    cloned(&FLOOR)
}

fn cloned(table: &Result<TileTable, TileDataError>) -> Result<TileTable, Error> {
    Ok(table.clone()?)
}

/// Parses comma separated tile indices, blank entries (like trailing commas) are ignored.
pub fn parse_csv(csv: &str) -> Result<Vec<i32>, TileDataError> {
    let mut tiles = vec![];
    for (line_index, line) in csv.lines().enumerate() {
        for value in line.split(',').map(str::trim).filter(|value| !value.is_empty()) {
            let tile = value.parse().map_err(|_| TileDataError::InvalidEntry {
                line: line_index + 1,
                value: value.to_string(),
            })?;
            tiles.push(tile);
        }
    }
    Ok(tiles)
}

fn parse_table(csv: &str, (width, height): (u32, u32)) -> Result<TileTable, TileDataError> {
    let tiles = parse_csv(csv)?;
    let expected = width as usize * height as usize;
    if tiles.len() != expected {
        log::error!(
            "Tile table has {} entries, expected {}x{}",
            tiles.len(),
            width,
            height
        );
        return Err(TileDataError::SizeMismatch {
            expected,
            found: tiles.len(),
        });
    }
    Ok(TileTable::new(tiles))
}
