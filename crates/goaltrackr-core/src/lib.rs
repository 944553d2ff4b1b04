pub mod error;
pub mod hash;
pub mod id;
pub mod model;
pub mod serialize;
pub mod snapshot;
