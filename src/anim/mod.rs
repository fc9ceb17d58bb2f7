//! Per-frame animation arithmetic for the main menu.
//!
//! Nothing in here touches the renderer: the accumulator turns elapsed
//! milliseconds into fixed ticks, the reveal driver copies tiles into a live
//! grid, and the scroll layers and blink timer derive what is drawn from that.

pub mod accumulator;
pub mod blink;
pub mod reveal;
pub mod scroll;

pub use accumulator::{FrameAccumulator, TICK_MS};
pub use blink::BlinkTimer;
pub use reveal::{Progress, RevealDriver, TileTable};
pub use scroll::{Entry, ScrollLayer};
