pub mod api;
pub mod types;

pub use api::{
    AnkiConnect,
    StoreClient,
};
pub use types::{
    Field,
    Note,
};
