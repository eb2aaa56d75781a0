//! # BlogSpace Infrastructure
//!
//! Concrete implementations of the ports defined in `blogspace-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory and file storage only
//! - `http` - REST post repository via reqwest
//! - `redis` - Redis-backed key-value store

pub mod repository;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory and file
pub use repository::InMemoryPostRepository;
pub use store::{FileStore, InMemoryStore};

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpPostRepository};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use store::{RedisConfig, RedisStore};
