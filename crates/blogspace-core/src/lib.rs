//! # BlogSpace Core
//!
//! The domain layer of BlogSpace.
//! This crate holds the post model, the ports the client depends on, and the
//! `PostViewModel` that derives what the presentation layer shows. It performs
//! no I/O of its own.

pub mod domain;
pub mod error;
pub mod ports;
pub mod view;

pub use domain::{Post, PostDraft, PostId};
pub use error::{DomainError, RepoError, StoreError, ViewError};
pub use view::PostViewModel;
