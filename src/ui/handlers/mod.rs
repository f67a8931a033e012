//! Handler modules for keyboard input, the live game and review navigation.

mod game_handler;
mod input_handler;
mod review_handler;

pub use game_handler::GameHandler;
pub(in crate::ui) use input_handler::input_status;
pub use input_handler::InputHandler;
pub use review_handler::ReviewHandler;
