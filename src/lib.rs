//! Button Rain: a single-page browser game. Randomly colored buttons rain
//! onto the screen; click them all to win (if you asked for a win condition).

pub mod components;
pub mod game;
pub mod settings;
pub mod util;

pub use components::App;
