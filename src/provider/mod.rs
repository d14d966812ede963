//! Video provider module
//!
//! Defines the VideoProvider trait and the YouTube implementation.

mod traits;
pub mod youtube;

pub use traits::*;
pub use youtube::YouTubeSearch;
