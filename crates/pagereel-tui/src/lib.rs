pub mod app;
pub mod deck;
pub mod drag;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::{App, Mode};
pub use deck::{Card, DeckSource, DemoDeck, Insets};
pub use theme::Theme;
