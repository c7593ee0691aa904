pub mod app;
pub mod color_button;
pub mod game_view;
pub mod home_view;
pub mod settings_modal;
pub mod stats_panel;
pub mod win_overlay;

pub use app::App;
