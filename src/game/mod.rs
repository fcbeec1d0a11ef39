//! Single-player mode.

mod session;

pub use session::Session;
