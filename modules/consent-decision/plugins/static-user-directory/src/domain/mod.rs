//! Domain logic for the static user directory.

pub mod client;
pub mod service;
