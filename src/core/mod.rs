pub mod errors;
pub mod models;
pub mod reading;

pub use errors::ReigoError;
pub use models::{ Character, Example, NoteId };
pub use reading::ReadingPattern;
