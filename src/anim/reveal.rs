use crate::{Error, SENTINEL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileTable {
    tiles: Vec<i32>,
}

impl TileTable {
    pub fn new(tiles: Vec<i32>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[i32] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != SENTINEL).count()
    }
}

impl From<Vec<i32>> for TileTable {
    fn from(tiles: Vec<i32>) -> Self {
        Self::new(tiles)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Scales `amount` by `completed / total`, truncating toward zero.
    ///
    /// A table without any tile has no progress to speak of, so this is 0.
    pub fn scale(&self, amount: i32) -> i32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = amount as i64 * self.completed as i64 / self.total as i64;
        scaled as i32
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// Copies a [`TileTable`] into a live grid one tile per tick.
#[derive(Debug)]
pub struct RevealDriver {
    table: TileTable,
    cursor: usize,
    completed: usize,
    total: usize,
}

impl RevealDriver {
    pub fn new(table: TileTable) -> Self {
        let total = table.tile_count();
        Self {
            table,
            cursor: 0,
            completed: 0,
            total,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed,
            total: self.total,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.table.len()
    }

    /// Reveals the next tile into `grid`, skipping empty entries.
    ///
    /// The skip never moves past the last entry: a trailing sentinel still
    /// costs a tick and is written as is, without counting as progress.
    /// Returns whether a tile was revealed.
    pub fn step(&mut self, grid: &mut [i32]) -> Result<bool, Error> {
        let tiles = self.table.tiles();
        if grid.len() != tiles.len() {
            return Err(Error::InvalidArgument(
                "live grid and tile table lengths differ",
            ));
        }

        if self.cursor >= tiles.len() {
            return Ok(false);
        }

        while self.cursor + 1 < tiles.len() && tiles[self.cursor] == SENTINEL {
            self.cursor += 1;
        }

        let tile = tiles[self.cursor];
        grid[self.cursor] = tile;
        self.cursor += 1;

        let revealed = tile != SENTINEL;
        if revealed {
            self.completed += 1;
        }
        Ok(revealed)
    }

    pub fn advance(&mut self, ticks: u32, grid: &mut [i32]) -> Result<(), Error> {
        for _ in 0..ticks {
            if self.is_finished() {
                break;
            }
            self.step(grid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const S: i32 = SENTINEL;

    fn driver(tiles: &[i32]) -> (RevealDriver, Vec<i32>) {
        let grid = vec![SENTINEL; tiles.len()];
        (RevealDriver::new(TileTable::new(tiles.to_vec())), grid)
    }

    #[test]
    fn reveal_new_counts_only_real_tiles() {
        let (driver, _) = driver(&[S, 3, S, 4, 5]);

        assert_eq!(driver.cursor(), 0);
        assert_eq!(
            driver.progress(),
            Progress {
                completed: 0,
                total: 3
            }
        );
    }

    #[test]
    fn reveal_step_skips_leading_sentinels() {
        let (mut driver, mut grid) = driver(&[S, S, 5, S, 9]);

        assert!(driver.step(&mut grid).unwrap());
        assert_eq!(grid, vec![S, S, 5, S, S]);
        assert_eq!(driver.cursor(), 3);
        assert_eq!(driver.progress().completed, 1);
    }

    #[test]
    fn reveal_sentinel_table_ends_identical_to_source() {
        let tiles = [S, S, 5, S, 9];
        let (mut driver, mut grid) = driver(&tiles);

        driver.advance(10, &mut grid).unwrap();

        assert_eq!(grid, tiles.to_vec());
        assert_eq!(
            driver.progress(),
            Progress {
                completed: 2,
                total: 2
            }
        );
        assert!(driver.is_finished());
    }

    #[test]
    fn reveal_trailing_sentinel_consumes_a_tick() {
        let (mut driver, mut grid) = driver(&[7, S]);

        assert!(driver.step(&mut grid).unwrap());
        assert!(!driver.is_finished());

        assert!(!driver.step(&mut grid).unwrap());
        assert!(driver.is_finished());
        assert_eq!(grid, vec![7, S]);
        assert_eq!(driver.progress().completed, 1);
        assert!(driver.progress().is_complete());
    }

    #[test]
    fn reveal_finished_step_is_a_no_op() {
        let (mut driver, mut grid) = driver(&[1, 2]);
        driver.advance(2, &mut grid).unwrap();

        assert!(!driver.step(&mut grid).unwrap());
        assert_eq!(driver.cursor(), 2);
        assert_eq!(driver.progress().completed, 2);
        assert_eq!(grid, vec![1, 2]);
    }

    #[test]
    fn reveal_step_rejects_mismatched_grid() {
        let (mut driver, _) = driver(&[1, 2, 3]);
        let mut grid = vec![S; 2];

        assert!(matches!(
            driver.step(&mut grid),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(driver.cursor(), 0);
    }

    #[test]
    fn reveal_all_sentinels_does_not_divide_by_zero() {
        let (mut driver, mut grid) = driver(&[S, S, S]);

        driver.advance(5, &mut grid).unwrap();

        let progress = driver.progress();
        assert_eq!(progress.total, 0);
        assert_eq!(progress.scale(184), 0);
        assert_eq!(progress.fraction(), 0.0);
        assert!(driver.is_finished());
    }

    #[test]
    fn reveal_empty_table_is_finished_from_the_start() {
        let (mut driver, mut grid) = driver(&[]);

        assert!(driver.is_finished());
        assert!(!driver.step(&mut grid).unwrap());
    }

    #[test]
    fn progress_scale_truncates_toward_zero() {
        let progress = Progress {
            completed: 1,
            total: 3,
        };

        assert_eq!(progress.scale(184), 61);
        assert_eq!(progress.scale(-64), -21);
    }

    fn tile() -> impl Strategy<Value = i32> {
        prop_oneof![Just(SENTINEL), 0i32..256]
    }

    proptest! {
        #[test]
        fn reveal_is_monotone_and_idempotent_when_finished(
            tiles in proptest::collection::vec(tile(), 0..64),
            ticks in proptest::collection::vec(0u32..8, 0..40),
        ) {
            let (mut driver, mut grid) = driver(&tiles);
            let total = driver.progress().total;

            for count in ticks {
                let before = (driver.cursor(), driver.progress().completed, grid.clone());
                driver.advance(count, &mut grid).unwrap();

                prop_assert!(driver.cursor() >= before.0);
                prop_assert!(driver.progress().completed >= before.1);
                prop_assert!(driver.progress().completed <= total);
                prop_assert!(driver.cursor() <= tiles.len());
                for (index, &tile) in before.2.iter().enumerate() {
                    if tile != SENTINEL {
                        prop_assert_eq!(grid[index], tile);
                    }
                }
            }

            driver.advance(tiles.len() as u32 + 1, &mut grid).unwrap();
            prop_assert_eq!(&grid, &tiles);
            prop_assert_eq!(driver.progress().completed, total);

            let finished = (driver.cursor(), driver.progress());
            driver.advance(3, &mut grid).unwrap();
            prop_assert_eq!((driver.cursor(), driver.progress()), finished);
        }

        #[test]
        fn reveal_only_writes_source_values_in_order(
            tiles in proptest::collection::vec(tile(), 1..64),
        ) {
            let (mut driver, mut grid) = driver(&tiles);

            while !driver.is_finished() {
                let cursor = driver.cursor();
                driver.step(&mut grid).unwrap();
                prop_assert!(grid[driver.cursor()..].iter().all(|&tile| tile == SENTINEL));
                prop_assert_eq!(&grid[..cursor], &tiles[..cursor]);
            }
        }
    }
}
