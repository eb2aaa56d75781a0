//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod store;

pub use repository::PostRepository;
pub use store::KeyValueStore;
