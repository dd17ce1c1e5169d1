//! Entrance timelines
//!
//! Steps are placed relative to the timeline's running end, the way the
//! hero and header entrances were authored: "after the previous step",
//! "overlapping the end by N ms" or "at an absolute time".

use super::easing::Easing;
use super::pose::{AnimationOptions, Fill, Keyframe, Pose};

/// Placement of a step on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Start when everything added so far has finished
    Sequential,
    /// Start this many ms before the current end (never before 0)
    Overlap(f64),
    /// Start at an absolute time
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: f64,
    pub stagger_ms: f64,
    pub easing: Easing,
}

impl Tween {
    /// Tween from `from` into the rest pose
    pub const fn enter(from: Pose, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to: Pose::REST,
            duration_ms,
            stagger_ms: 0.0,
            easing,
        }
    }

    pub const fn to(self, to: Pose) -> Self {
        Self { to, ..self }
    }

    pub const fn stagger(self, stagger_ms: f64) -> Self {
        Self { stagger_ms, ..self }
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [Keyframe::full(&self.from), Keyframe::full(&self.to)]
    }

    fn span(&self, count: usize) -> f64 {
        self.duration_ms + self.stagger_ms * count.saturating_sub(1) as f64
    }
}

/// A tween scheduled on one or more targets.
#[derive(Debug, Clone)]
pub struct Step<T> {
    pub targets: Vec<T>,
    pub tween: Tween,
    pub start_ms: f64,
}

impl<T> Step<T> {
    /// Absolute start time of the `index`th target
    pub fn delay_for(&self, index: usize) -> f64 {
        self.start_ms + index as f64 * self.tween.stagger_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.tween.span(self.targets.len())
    }

    pub fn options_for(&self, index: usize) -> AnimationOptions {
        AnimationOptions::once(self.tween.duration_ms, self.tween.easing)
            .delay(self.delay_for(index))
            .fill(Fill::Both)
    }
}

#[derive(Debug, Clone)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
    end_ms: f64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            end_ms: 0.0,
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `tween` on `targets`. An empty target list adds nothing and
    /// leaves the end time untouched.
    pub fn add(&mut self, targets: Vec<T>, tween: Tween, position: Position) -> &mut Self {
        if targets.is_empty() {
            return self;
        }
        let start_ms = match position {
            Position::Sequential => self.end_ms,
            Position::Overlap(ms) => (self.end_ms - ms).max(0.0),
            Position::At(ms) => ms.max(0.0),
        };
        let step = Step {
            targets,
            tween,
            start_ms,
        };
        self.end_ms = self.end_ms.max(step.end_ms());
        self.steps.push(step);
        self
    }

    /// Build from a declarative step list, resolving each selector to targets
    pub fn from_steps(steps: &[EntranceStep], mut resolve: impl FnMut(&'static str) -> Vec<T>) -> Self {
        let mut timeline = Self::new();
        for step in steps {
            timeline.add(resolve(step.selector), step.tween, step.position);
        }
        timeline
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every target with its absolute start time, in declared order
    pub fn start_times(&self) -> Vec<(&T, f64)> {
        self.steps
            .iter()
            .flat_map(|step| {
                step.targets
                    .iter()
                    .enumerate()
                    .map(move |(i, target)| (target, step.delay_for(i)))
            })
            .collect()
    }
}

/// A timeline step whose targets are found by CSS selector under a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceStep {
    pub selector: &'static str,
    pub tween: Tween,
    pub position: Position,
}

pub const HERO_ENTRANCE: &[EntranceStep] = &[
    EntranceStep {
        selector: "[data-title-line]",
        tween: Tween::enter(Pose::HIDDEN.y(80.0), 1200.0, Easing::Power4Out).stagger(150.0),
        position: Position::Sequential,
    },
    EntranceStep {
        selector: "[data-hero-subtitle]",
        tween: Tween::enter(Pose::HIDDEN.y(40.0), 800.0, Easing::Power3Out),
        position: Position::Overlap(400.0),
    },
    EntranceStep {
        selector: "[data-hero-buttons] > *",
        tween: Tween::enter(Pose::HIDDEN.y(30.0), 600.0, Easing::Power3Out).stagger(100.0),
        position: Position::Overlap(400.0),
    },
    EntranceStep {
        selector: "[data-hero-badges] > *",
        tween: Tween::enter(Pose::HIDDEN.x(-20.0), 600.0, Easing::Power3Out).stagger(100.0),
        position: Position::Overlap(400.0),
    },
    EntranceStep {
        selector: "[data-hero-animation]",
        tween: Tween::enter(Pose::HIDDEN.scale(0.9).rotate_y(-10.0), 1500.0, Easing::ELASTIC_OUT),
        position: Position::Overlap(800.0),
    },
    EntranceStep {
        selector: "[data-particle]",
        tween: Tween::enter(Pose::HIDDEN.scale(0.0), 1500.0, Easing::Power2Out)
            .to(Pose::REST.opacity(0.4))
            .stagger(150.0),
        position: Position::At(800.0),
    },
];

pub const HEADER_ENTRANCE: &[EntranceStep] = &[
    EntranceStep {
        selector: "[data-header-logo]",
        tween: Tween::enter(Pose::HIDDEN.x(-50.0), 800.0, Easing::Power3Out),
        position: Position::Sequential,
    },
    EntranceStep {
        selector: "[data-header-nav] > *",
        tween: Tween::enter(Pose::HIDDEN.y(-20.0), 600.0, Easing::Power3Out).stagger(100.0),
        position: Position::Overlap(400.0),
    },
    EntranceStep {
        selector: "[data-header-cta]",
        tween: Tween::enter(Pose::HIDDEN.x(50.0), 800.0, Easing::Power3Out),
        position: Position::Overlap(600.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_counts(selector: &'static str) -> Vec<String> {
        let n = match selector {
            "[data-title-line]" => 3,
            "[data-hero-buttons] > *" => 2,
            "[data-hero-badges] > *" => 3,
            "[data-particle]" => 4,
            _ => 1,
        };
        (0..n).map(|i| format!("{selector}#{i}")).collect()
    }

    fn first_start(timeline: &Timeline<String>, selector: &str) -> f64 {
        timeline
            .steps()
            .iter()
            .find(|s| s.targets[0].starts_with(selector))
            .map(|s| s.start_ms)
            .unwrap()
    }

    #[test]
    fn test_sequential_and_overlap() {
        let tween = Tween::enter(Pose::HIDDEN, 500.0, Easing::Linear);
        let mut tl = Timeline::new();
        tl.add(vec!["a"], tween, Position::Sequential)
            .add(vec!["b"], tween, Position::Sequential)
            .add(vec!["c"], tween, Position::Overlap(200.0));
        let starts: Vec<f64> = tl.start_times().into_iter().map(|(_, t)| t).collect();
        assert_eq!(starts, [0.0, 500.0, 800.0]);
        assert_eq!(tl.end_ms(), 1300.0);
    }

    #[test]
    fn test_overlap_never_negative() {
        let tween = Tween::enter(Pose::HIDDEN, 300.0, Easing::Linear);
        let mut tl = Timeline::new();
        tl.add(vec![1], tween, Position::Overlap(1000.0));
        assert_eq!(tl.steps()[0].start_ms, 0.0);
    }

    #[test]
    fn test_stagger_offsets() {
        let tween = Tween::enter(Pose::HIDDEN, 600.0, Easing::Linear).stagger(100.0);
        let mut tl = Timeline::new();
        tl.add(vec!['x', 'y', 'z'], tween, Position::At(200.0));
        let starts: Vec<f64> = tl.start_times().into_iter().map(|(_, t)| t).collect();
        assert_eq!(starts, [200.0, 300.0, 400.0]);
        assert_eq!(tl.end_ms(), 1000.0);
        assert_eq!(tl.steps()[0].options_for(2).delay, 400.0);
    }

    #[test]
    fn test_empty_targets_skipped() {
        let tween = Tween::enter(Pose::HIDDEN, 600.0, Easing::Linear);
        let mut tl: Timeline<u8> = Timeline::new();
        tl.add(vec![], tween, Position::Sequential);
        assert!(tl.is_empty());
        assert_eq!(tl.end_ms(), 0.0);
    }

    #[test]
    fn test_hero_entrance_schedule() {
        let tl = Timeline::from_steps(HERO_ENTRANCE, hero_counts);
        assert_eq!(first_start(&tl, "[data-title-line]"), 0.0);
        assert_eq!(first_start(&tl, "[data-hero-subtitle]"), 1100.0);
        assert_eq!(first_start(&tl, "[data-hero-buttons]"), 1500.0);
        assert_eq!(first_start(&tl, "[data-hero-badges]"), 1800.0);
        assert_eq!(first_start(&tl, "[data-hero-animation]"), 1800.0);
        assert_eq!(first_start(&tl, "[data-particle]"), 800.0);
        assert_eq!(tl.end_ms(), 3300.0);
    }

    #[test]
    fn test_hero_declared_order_is_monotonic() {
        let tl = Timeline::from_steps(&HERO_ENTRANCE[..4], hero_counts);
        let starts: Vec<f64> = tl.start_times().into_iter().map(|(_, t)| t).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]), "{starts:?}");
    }

    #[test]
    fn test_particles_fade_to_partial_opacity() {
        let [_, to] = HERO_ENTRANCE[5].tween.keyframes();
        assert_eq!(to.opacity, Some(0.4));
    }

    #[test]
    fn test_header_entrance_schedule() {
        let tl = Timeline::from_steps(HEADER_ENTRANCE, |selector| match selector {
            "[data-header-nav] > *" => vec![selector; 4],
            _ => vec![selector],
        });
        let starts: Vec<f64> = tl.start_times().into_iter().map(|(_, t)| t).collect();
        assert_eq!(starts, [0.0, 400.0, 500.0, 600.0, 700.0, 700.0]);
        assert_eq!(tl.end_ms(), 1500.0);
    }
}
