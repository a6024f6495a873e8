pub mod error;
pub mod game;
pub mod helpers;
pub mod model;
pub mod ui;

pub use error::{HangmanError, Result};
