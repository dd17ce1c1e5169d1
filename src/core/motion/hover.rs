//! Hover micro-interactions
//!
//! Each hoverable layer has a rest pose and a lifted pose. Pointer events
//! only ever produce a new *target*; the driver animates from wherever the
//! layer currently is, so a leave during an enter redirects instead of
//! queueing.

use super::easing::Easing;
use super::pose::{AnimationOptions, Fill, Keyframe, Pose};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverConfig {
    pub lifted: Pose,
    pub enter_ms: f64,
    pub leave_ms: f64,
    pub enter_easing: Easing,
    pub leave_easing: Easing,
}

impl HoverConfig {
    pub const fn new(lifted: Pose, duration_ms: f64) -> Self {
        Self {
            lifted,
            enter_ms: duration_ms,
            leave_ms: duration_ms,
            enter_easing: Easing::Power2Out,
            leave_easing: Easing::Power2Out,
        }
    }

    pub const fn enter_easing(self, enter_easing: Easing) -> Self {
        Self {
            enter_easing,
            ..self
        }
    }
}

pub const PRODUCT_CARD: HoverConfig = HoverConfig::new(Pose::REST.y(-8.0).scale(1.02), 400.0);
pub const TESTIMONIAL_CARD: HoverConfig = HoverConfig::new(Pose::REST.y(-8.0).scale(1.02), 300.0);
pub const FEATURE_ICON: HoverConfig =
    HoverConfig::new(Pose::REST.scale(1.15).rotate(5.0), 400.0).enter_easing(Easing::BACK_OUT);
pub const FEATURE_TITLE: HoverConfig = HoverConfig::new(Pose::REST.y(-3.0), 300.0);
pub const FEATURE_DESCRIPTION: HoverConfig = HoverConfig::new(Pose::REST.y(-2.0), 300.0);

/// Where an animation should head next and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStep {
    pub target: Pose,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl HoverStep {
    /// Keyframes that redirect a layer toward `target`.
    ///
    /// `current` is the layer's transform sampled while its previous animation
    /// still applies; the new animation starts exactly there. Without a sample
    /// the layer starts from rest.
    pub fn keyframes(&self, current: Option<String>) -> [Keyframe; 2] {
        let from = current
            .map(Keyframe::from_transform)
            .unwrap_or_else(|| Keyframe::transform_only(&Pose::REST));
        [from, Keyframe::transform_only(&self.target)]
    }

    /// Holds the target pose once finished
    pub fn options(&self) -> AnimationOptions {
        AnimationOptions::once(self.duration_ms, self.easing).fill(Fill::Forwards)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Rest,
    Lifted,
}

impl HoverPhase {
    /// Apply a pointer enter (`true`) or leave (`false`). Repeats in the same
    /// direction yield nothing.
    pub fn on_pointer(&mut self, entered: bool, config: &HoverConfig) -> Option<HoverStep> {
        match (*self, entered) {
            (HoverPhase::Rest, true) => {
                *self = HoverPhase::Lifted;
                Some(HoverStep {
                    target: config.lifted,
                    duration_ms: config.enter_ms,
                    easing: config.enter_easing,
                })
            }
            (HoverPhase::Lifted, false) => {
                *self = HoverPhase::Rest;
                Some(HoverStep {
                    target: Pose::REST,
                    duration_ms: config.leave_ms,
                    easing: config.leave_easing,
                })
            }
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_lifted(self) -> bool {
        self == HoverPhase::Lifted
    }
}
