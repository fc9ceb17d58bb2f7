use cgmath::Point2;

use crate::{
    anim::{BlinkTimer, FrameAccumulator, Progress, RevealDriver, ScrollLayer},
    assets,
    game::GameContext,
    renderer::Frame,
    text::Text,
    tilemap::Tilemap,
    Error,
};

const TITLE_POSITION: (i32, i32) = (32, 0);
const BACKGROUND_REST_Y: i32 = 56;
const BACKGROUND_HEIGHT: i32 = 128;
const FLOOR_REST_Y: i32 = 176;
const FLOOR_SIZE_IN_TILES: (u32, u32) = (20, 8);
const TEXT_POSITION: (i32, i32) = (96, 168);
// TODO: show "--CLICK TO PLAY--" on desktop once the input binding tells them apart.
const PROMPT: &str = "--TOUCH TO PLAY--";

pub struct MainMenu {
    title: Tilemap,
    background: Tilemap,
    floor: Tilemap,
    prompt: Text,
    reveal: RevealDriver,
    accumulator: FrameAccumulator,
    blink: BlinkTimer,
    background_layer: ScrollLayer,
    floor_layer: ScrollLayer,
    revealed: bool,
}

impl MainMenu {
    pub fn enter(ctx: &GameContext) -> Result<Self, Error> {
        let spritesets = &ctx.spritesets;

        let (width, height) = assets::TITLE_SIZE;
        let title = Tilemap::new(spritesets.s8x8.clone(), width, height)?
            .with_position(TITLE_POSITION.0, TITLE_POSITION.1);
        let reveal = RevealDriver::new(assets::title()?);

        let (width, height) = assets::BACKGROUND_SIZE;
        let background_layer = ScrollLayer::from_above(BACKGROUND_REST_Y, BACKGROUND_HEIGHT);
        let mut background = Tilemap::new(spritesets.s8x16.clone(), width, height)?
            .with_position(0, background_layer.start_y());
        background.load(assets::background()?.tiles(), width, height)?;

        let floor_layer = ScrollLayer::from_below(FLOOR_REST_Y, ctx.camera.height as i32);
        let mut floor = Tilemap::new(
            spritesets.s16x16.clone(),
            FLOOR_SIZE_IN_TILES.0,
            FLOOR_SIZE_IN_TILES.1,
        )?
        .with_position(0, floor_layer.start_y());
        let (width, height) = assets::FLOOR_SIZE;
        floor.load(assets::floor()?.tiles(), width, height)?;

        let mut prompt = Text::new(
            spritesets.s8x8.clone(),
            Point2::new(TEXT_POSITION.0, TEXT_POSITION.1),
            PROMPT.len(),
            1,
            0,
        );
        prompt.set_text(PROMPT);

        log::debug!(
            "Entered main menu, title has {} tiles to reveal",
            reveal.progress().total
        );

        Ok(Self {
            title,
            background,
            floor,
            prompt,
            reveal,
            accumulator: FrameAccumulator::new(),
            blink: BlinkTimer::new(),
            background_layer,
            floor_layer,
            revealed: false,
        })
    }

    pub fn update(&mut self, ctx: &GameContext, elapsed_ms: u32) -> Result<(), Error> {
        let ticks = self.accumulator.advance(elapsed_ms);
        self.reveal.advance(ticks, self.title.tiles_mut())?;

        if !self.revealed && self.reveal.is_finished() {
            self.revealed = true;
            log::debug!("Title revealed");
        }

        let progress = self.reveal.progress();
        self.background.position.y = self.background_layer.position(progress);

        self.floor_layer = ScrollLayer::from_below(FLOOR_REST_Y, ctx.camera.height as i32);
        self.floor.position.y = self.floor_layer.position(progress);

        self.blink.tick(elapsed_ms);
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.background.draw(frame);
        self.floor.draw(frame);
        self.title.draw(frame);

        if self.blink.is_visible() {
            self.prompt.draw(frame);
        }
    }

    pub fn progress(&self) -> Progress {
        self.reveal.progress()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn title_tiles(&self) -> &[i32] {
        self.title.tiles()
    }

    pub fn background_y(&self) -> i32 {
        self.background.position.y
    }

    pub fn floor_y(&self) -> i32 {
        self.floor.position.y
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.blink.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::tests::context, renderer::BLACK, SENTINEL};

    #[test]
    fn entering_starts_with_layers_off_screen() {
        let ctx = context();
        let menu = MainMenu::enter(&ctx).unwrap();

        assert_eq!(menu.background_y(), -128);
        assert_eq!(menu.floor_y(), 240);
        assert!(menu.title_tiles().iter().all(|&tile| tile == SENTINEL));
        assert!(menu.is_prompt_visible());
    }

    #[test]
    fn update_below_one_tick_reveals_nothing() {
        let ctx = context();
        let mut menu = MainMenu::enter(&ctx).unwrap();

        menu.update(&ctx, 16).unwrap();

        assert_eq!(menu.progress().completed, 0);
        assert_eq!(menu.background_y(), -128);
    }

    #[test]
    fn update_reveals_one_tile_per_tick() {
        let ctx = context();
        let mut menu = MainMenu::enter(&ctx).unwrap();

        menu.update(&ctx, 17).unwrap();
        menu.update(&ctx, 16).unwrap();

        assert_eq!(menu.progress().completed, 2);
        assert_eq!(
            menu.title_tiles()
                .iter()
                .filter(|&&tile| tile != SENTINEL)
                .count(),
            2
        );
    }

    #[test]
    fn update_after_stall_finishes_and_rests_layers() {
        let ctx = context();
        let mut menu = MainMenu::enter(&ctx).unwrap();

        menu.update(&ctx, 60_000).unwrap();

        assert!(menu.is_revealed());
        assert!(menu.progress().is_complete());
        assert_eq!(menu.title_tiles(), assets::title().unwrap().tiles());
        assert_eq!(menu.background_y(), 56);
        assert_eq!(menu.floor_y(), 176);
    }

    #[test]
    fn prompt_blinks_every_half_second() {
        let ctx = context();
        let mut menu = MainMenu::enter(&ctx).unwrap();

        menu.update(&ctx, 500).unwrap();
        assert!(!menu.is_prompt_visible());

        menu.update(&ctx, 500).unwrap();
        assert!(menu.is_prompt_visible());
    }

    #[test]
    fn draw_fills_the_floor_once_revealed() {
        let ctx = context();
        let mut menu = MainMenu::enter(&ctx).unwrap();
        let mut frame = Frame::new(ctx.camera).unwrap();

        menu.update(&ctx, 60_000).unwrap();
        menu.draw(&mut frame);

        assert_ne!(frame.pixel(0, 239), Some(BLACK));
        assert_eq!(frame.pixel(0, 0), Some(BLACK));
    }
}
