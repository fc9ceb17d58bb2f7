pub mod main_menu;

pub use main_menu::MainMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
}
