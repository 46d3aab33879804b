pub mod config;
pub mod error;
pub mod geometry;
pub mod paging;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::PageGeometry;
pub use paging::{target_content_offset, Offset, Velocity};
