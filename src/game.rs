use std::rc::Rc;

use crate::{
    config::Config,
    renderer::{Frame, BLACK},
    sprite::{Atlas, Spritesets},
    states::{GameState, MainMenu},
    Error, SizeInPx,
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Update {
    Continue,
    Exit,
}

/// What every state gets to see: configuration and loaded assets.
pub struct GameContext {
    pub config: Config,
    pub spritesets: Spritesets,
    pub camera: SizeInPx,
}

impl GameContext {
    pub fn new(config: Config, atlas: Atlas) -> Result<Self, Error> {
        config.validate()?;
        let spritesets = Spritesets::new(Rc::new(atlas))?;
        let camera = config.virtual_size;

        Ok(Self {
            config,
            spritesets,
            camera,
        })
    }

    pub fn load(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let texture = config.find_texture()?;
        let atlas = Atlas::load_image(texture, config.color_key)?;
        Self::new(config, atlas)
    }
}

enum ActiveState {
    MainMenu(MainMenu),
}

pub struct Game {
    pub ctx: GameContext,
    state: GameState,
    active: Option<ActiveState>,
    running: bool,
}

impl Game {
    pub fn new(ctx: GameContext) -> Self {
        Self {
            ctx,
            state: GameState::MainMenu,
            active: None,
            running: true,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one fixed update of the current state, entering it first if needed.
    pub fn update(&mut self, elapsed_ms: u32) -> Result<Update, Error> {
        if !self.running {
            return Ok(Update::Exit);
        }

        if self.active.is_none() {
            self.active = Some(self.enter()?);
        }

        match &mut self.active {
            Some(ActiveState::MainMenu(menu)) => menu.update(&self.ctx, elapsed_ms)?,
            None => return Err(Error::InvalidArgument("no active state to update")),
        }
        Ok(Update::Continue)
    }

    pub fn draw(&self, frame: &mut Frame) -> Result<(), Error> {
        frame.clear(BLACK);
        match &self.active {
            Some(ActiveState::MainMenu(menu)) => menu.draw(frame),
            None => return Err(Error::InvalidArgument("no active state to draw")),
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            log::debug!("Left {:?}", self.state);
        }
        self.running = false;
    }

    pub fn main_menu(&self) -> Option<&MainMenu> {
        match &self.active {
            Some(ActiveState::MainMenu(menu)) => Some(menu),
            None => None,
        }
    }

    fn enter(&self) -> Result<ActiveState, Error> {
        log::debug!("Entering {:?}", self.state);
        match self.state {
            GameState::MainMenu => Ok(ActiveState::MainMenu(MainMenu::enter(&self.ctx)?)),
        }
    }
}
