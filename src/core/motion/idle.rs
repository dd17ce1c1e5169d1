//! Continuous idle motion for the hero, run only while it is on screen.

use super::easing::Easing;
use super::pose::{AnimationOptions, Direction, Keyframe, Pose};

/// Fraction of the hero that must be visible for idle loops to run
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// An endlessly repeating transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub easing: Easing,
    pub direction: Direction,
    /// Phase offset between consecutive targets
    pub stagger_ms: f64,
}

impl LoopConfig {
    /// Transform-only so loops never fight a reveal over opacity
    pub fn keyframes(&self) -> [Keyframe; 2] {
        [
            Keyframe::transform_only(&self.from),
            Keyframe::transform_only(&self.to),
        ]
    }

    pub fn options(&self, index: usize) -> AnimationOptions {
        AnimationOptions::once(self.duration_ms, self.easing)
            .delay(index as f64 * self.stagger_ms)
            .forever(self.direction)
    }
}

/// Gentle bob of the hero animation card
pub const HERO_FLOAT: LoopConfig = LoopConfig {
    from: Pose::REST,
    to: Pose::REST.y(-15.0),
    duration_ms: 3000.0,
    easing: Easing::Power2InOut,
    direction: Direction::Alternate,
    stagger_ms: 0.0,
};

/// Slow full turn of the background particles
pub const PARTICLE_SPIN: LoopConfig = LoopConfig {
    from: Pose::REST,
    to: Pose::REST.rotate(360.0),
    duration_ms: 30_000.0,
    easing: Easing::Linear,
    direction: Direction::Normal,
    stagger_ms: 1000.0,
};

/// Whether idle loops should be running.
pub fn should_idle(visible: bool, reduced_motion: bool) -> bool {
    visible && !reduced_motion
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_yoyo() {
        let opts = HERO_FLOAT.options(0);
        assert!(opts.iterations.is_infinite());
        assert_eq!(opts.direction, Direction::Alternate);
        assert_eq!(opts.easing, Easing::Power2InOut.css());
    }

    #[test]
    fn test_spin_staggered_phase() {
        assert_eq!(PARTICLE_SPIN.options(0).delay, 0.0);
        assert_eq!(PARTICLE_SPIN.options(3).delay, 3000.0);
        assert_eq!(PARTICLE_SPIN.options(3).easing, "linear");
    }

    #[test]
    fn test_loops_leave_opacity_alone() {
        for config in [HERO_FLOAT, PARTICLE_SPIN] {
            assert!(config.keyframes().iter().all(|k| k.opacity.is_none()));
        }
    }

    #[test]
    fn test_should_idle() {
        assert!(should_idle(true, false));
        assert!(!should_idle(false, false));
        assert!(!should_idle(true, true));
    }
}
