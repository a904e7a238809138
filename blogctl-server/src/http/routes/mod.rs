//! Route handlers grouped by resource

pub mod health;
pub mod home;
pub mod posts;
