//! Animation model, independent of the browser
//!
//! Everything here is plain data and small state machines. The Web
//! Animations driver in `ui::motion` turns these into running animations.

pub mod easing;
pub mod gate;
pub mod hover;
pub mod idle;
pub mod pose;
pub mod reveal;
pub mod timeline;

pub use easing::Easing;
pub use gate::{Motion, ReducedMotionGate};
pub use hover::{HoverConfig, HoverPhase, HoverStep};
pub use idle::LoopConfig;
pub use pose::{AnimationOptions, Keyframe, Pose};
pub use reveal::{Crossing, PlayDirection, RevealConfig, RevealPhase, TriggerBand};
pub use timeline::{EntranceStep, Position, Timeline, Tween};
