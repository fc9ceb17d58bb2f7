const HALF_PERIOD_MS: i32 = 500;
const PERIOD_MS: i32 = 2 * HALF_PERIOD_MS;

/// Shows something for half a second, hides it for the next half.
#[derive(Debug, Default, Clone)]
pub struct BlinkTimer {
    elapsed_ms: i32,
}

impl BlinkTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        let elapsed_ms = i32::try_from(elapsed_ms).unwrap_or(i32::MAX);
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= HALF_PERIOD_MS {
            self.elapsed_ms -= PERIOD_MS;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.elapsed_ms >= 0
    }

    pub fn elapsed_ms(&self) -> i32 {
        self.elapsed_ms
    }
}
