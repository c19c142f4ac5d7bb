pub mod client;
pub mod config;
pub mod error;
pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "rest")]
mod rest;
#[cfg(feature = "rest")]
pub use rest::RestStore;

pub use client::RecordStore;
pub use config::StoreConfig;
pub use error::StoreError;
pub use models::{NewUser, RecordId, UserRecord};
