//! Domain entities - the core business objects.

mod post;
pub mod text;

pub use post::{Post, PostDraft, PostId};
