//! Configuration for opening a [`LockedFile`](crate::LockedFile)

pub mod consts;
mod model;

pub use model::OpenConfig;
