//! # BlogSpace Shared
//!
//! Wire types shared between the REST backend and its clients.

pub mod dto;
pub mod response;

pub use dto::{MessageResponse, PostPayload, SearchParams};
pub use response::ErrorResponse;
