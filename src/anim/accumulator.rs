pub const TICK_MS: u32 = 16;

#[derive(Debug, Default, Clone)]
pub struct FrameAccumulator {
    accumulated_ms: u32,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `elapsed_ms` and returns how many whole ticks are due.
    ///
    /// A tick is only consumed while strictly more than [`TICK_MS`] is pending,
    /// so an accumulator sitting at exactly 16 ms waits for the next frame.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);

        let mut ticks = 0;
        while self.accumulated_ms > TICK_MS {
            self.accumulated_ms -= TICK_MS;
            ticks += 1;
        }
        ticks
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }
}
