pub mod config;
pub mod error;
pub mod query;
pub mod sample;
pub mod snapshot;
pub mod stats;
pub mod store;
