pub mod anki;
pub mod cli;
pub mod core;
pub mod mining;
pub mod persistence;
pub mod settings;

pub use crate::core::ReigoError;
