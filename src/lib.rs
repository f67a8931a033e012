pub mod args;
pub mod board;
pub mod dice;
pub mod history;
pub mod logging;
pub mod rules;
pub mod ui;
