//! Post repository implementations that need no network.

mod memory;

pub use memory::InMemoryPostRepository;
