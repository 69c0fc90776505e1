//! Cinebot - terminal movie assistant that answers questions from a CSV
//! dataset and learns new facts from chat.

pub mod assistant;
pub mod config;
pub mod error;
pub mod learn;
pub mod resolve;
pub mod router;
pub mod store;
pub mod text;

pub use assistant::Assistant;
pub use config::Config;
pub use error::{CinebotError, Result};
pub use store::{Attribute, MovieRecord, MovieStore};
