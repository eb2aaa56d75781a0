//! Key-value stores - in-memory, JSON file, and Redis.

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use file::FileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};
