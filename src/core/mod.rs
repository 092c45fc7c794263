//! Path, socket and identity resolution.

pub mod activation;
pub mod identity;
pub mod layout;
pub mod locator;
pub mod platform;
