//! Terminal UI: the board, turn indicator and play-again prompt, driven by
//! keyboard input.

mod app;
pub mod board_widget;
pub mod game_view;

pub use app::App;
