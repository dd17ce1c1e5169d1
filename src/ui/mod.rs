//! Leptos components and the browser glue behind them.
//!
//! Everything that touches the DOM lives here; the decisions it acts on
//! (what to animate, when the menu locks scrolling, where a link points)
//! come from [`crate::core`].

pub mod common;
pub mod dom;
pub mod icon;
pub mod motion;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use motion::{MotionContext, provide_motion_context, use_motion_context};
