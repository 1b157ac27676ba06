//! Screens of the terminal front end.

mod game;
mod name_entry;

pub use game::{GameScreen, start_session};
pub use name_entry::NameEntryScreen;
