//! Domain models
//!
//! A single entity backs the whole site. Form input is accepted as-is;
//! empty strings are valid titles and descriptions.

pub mod post;

pub use post::{Post, PostForm};
