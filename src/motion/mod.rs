//! Scroll and entrance animation.

pub mod choreography;
pub mod engine;
pub mod smooth_scroll;

pub use choreography::Choreography;
