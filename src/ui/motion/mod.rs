//! Browser side of the animation model: the reduced-motion context, the
//! Web Animations driver and the hooks components call.

pub mod context;
pub mod hooks;
#[cfg(feature = "hydrate")]
pub mod web;

pub use context::{MotionContext, provide_motion_context, use_motion_context};
pub use hooks::{Targets, use_entrance, use_hover, use_idle_loop, use_reveal, use_visibility};
