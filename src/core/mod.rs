//! Page content, navigation and animation model
//!
//! Nothing in here touches the DOM, so all of it is unit tested natively.

#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod format;
pub mod motion;
pub mod navigation;
pub mod scroll_lock;
pub mod seo;

pub use error::{ConfigError, ContentError};
