pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod glossary;
pub mod grammar;
pub mod io;
pub mod merge;
pub mod mission;
pub mod paths;
pub mod render;
pub mod slug;
pub mod source;
pub mod step;
pub mod store;

pub use error::{DeckError, Result};
