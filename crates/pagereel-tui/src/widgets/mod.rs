mod deck;
mod help;
mod status_bar;

pub use deck::DeckWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
