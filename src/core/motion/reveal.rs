//! Scroll-triggered reveals
//!
//! A reveal plays forward once when its trigger crosses into the viewport
//! band and plays in reverse when the trigger leaves the band back below the
//! start line. The trigger line is expressed as an IntersectionObserver root
//! margin so the browser does the geometry.

use super::easing::Easing;
use super::pose::{AnimationOptions, Fill, Keyframe, Pose};

/// The viewport band in which a trigger counts as "entered".
///
/// `start_percent` is the position of the start line measured from the top of
/// the viewport, so `top 80%` means the element's top edge has risen above
/// 80% of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub start_percent: f64,
}

impl TriggerBand {
    pub const fn top(start_percent: f64) -> Self {
        Self { start_percent }
    }

    /// `rootMargin` that shrinks the viewport's bottom edge up to the start line
    pub fn root_margin(&self) -> String {
        let shrink = 100.0 - self.start_percent.clamp(0.0, 100.0);
        if shrink == 0.0 {
            "0px".to_string()
        } else {
            format!("0px 0px -{shrink}% 0px")
        }
    }

    /// Start line in pixels for a viewport of `viewport_height`
    pub fn line_y(&self, viewport_height: f64) -> f64 {
        viewport_height * self.start_percent.clamp(0.0, 100.0) / 100.0
    }
}

/// How the trigger relates to the band after an intersection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entered,
    /// Entirely below the start line (scrolled back up past it)
    ExitedBelow,
    /// Entirely above the viewport (scrolled down past it)
    ExitedAbove,
}

impl Crossing {
    pub fn classify(is_intersecting: bool, element_top: f64, line_y: f64) -> Self {
        if is_intersecting {
            Crossing::Entered
        } else if element_top >= line_y {
            Crossing::ExitedBelow
        } else {
            Crossing::ExitedAbove
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Which end of the reveal the targets are at (or heading to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Shown,
}

impl RevealPhase {
    /// Advance on an observed crossing, returning the playback to start.
    ///
    /// Jumping straight past the band (e.g. an anchor jump) still reveals,
    /// otherwise the skipped content would stay hidden when scrolled back to.
    pub fn on_crossing(&mut self, crossing: Crossing) -> Option<PlayDirection> {
        match (*self, crossing) {
            (RevealPhase::Hidden, Crossing::Entered | Crossing::ExitedAbove) => {
                *self = RevealPhase::Shown;
                Some(PlayDirection::Forward)
            }
            (RevealPhase::Shown, Crossing::ExitedBelow) => {
                *self = RevealPhase::Hidden;
                Some(PlayDirection::Reverse)
            }
            _ => None,
        }
    }
}

/// One reveal: a starting pose tweened to [`Pose::REST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub from: Pose,
    pub duration_ms: f64,
    /// Delay between consecutive targets
    pub stagger_ms: f64,
    pub easing: Easing,
    pub band: TriggerBand,
}

impl RevealConfig {
    pub const fn new(from: Pose) -> Self {
        Self {
            from,
            duration_ms: 800.0,
            stagger_ms: 0.0,
            easing: Easing::Power3Out,
            band: TriggerBand::top(80.0),
        }
    }

    pub const fn duration(self, duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub const fn stagger(self, stagger_ms: f64) -> Self {
        Self { stagger_ms, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    pub const fn start(self, start_percent: f64) -> Self {
        Self {
            band: TriggerBand::top(start_percent),
            ..self
        }
    }

    pub fn keyframes(&self) -> [Keyframe; 2] {
        [Keyframe::full(&self.from), Keyframe::full(&Pose::REST)]
    }

    /// Options for the target at `index`; `fill: both` holds the hidden pose
    /// during the stagger delay and the rest pose afterwards.
    pub fn options(&self, index: usize) -> AnimationOptions {
        AnimationOptions::once(self.duration_ms, self.easing)
            .delay(index as f64 * self.stagger_ms)
            .fill(Fill::Both)
    }

    /// Time until the last of `count` targets settles
    #[cfg(test)]
    pub fn total_ms(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.duration_ms + self.stagger_ms * (count - 1) as f64
    }
}

pub mod presets {
    use super::*;

    pub const FEATURE_TITLE: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(80.0))
        .duration(1000.0)
        .stagger(150.0)
        .easing(Easing::Power4Out);
    pub const FEATURE_SUBTITLE: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(40.0)).start(85.0);
    pub const FEATURE_CARDS: RevealConfig =
        RevealConfig::new(Pose::HIDDEN.y(60.0).scale(0.9)).stagger(100.0);

    pub const PRODUCT_TITLE: RevealConfig = FEATURE_TITLE;
    pub const PRODUCT_SUBTITLE: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(40.0));
    pub const PRODUCT_CARDS: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(60.0).scale(0.95))
        .stagger(150.0)
        .start(75.0);
    pub const PRODUCT_CTA: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(30.0)).start(85.0);

    pub const TESTIMONIAL_TITLE: RevealConfig = FEATURE_TITLE.stagger(120.0);
    pub const TESTIMONIAL_SUBTITLE: RevealConfig = PRODUCT_SUBTITLE;
    pub const TESTIMONIAL_CARDS: RevealConfig = PRODUCT_CARDS.stagger(120.0);
    pub const TESTIMONIAL_CTA: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(40.0));

    pub const FOOTER_CONTENT: RevealConfig = RevealConfig::new(Pose::HIDDEN.y(30.0)).start(90.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin() {
        assert_eq!(TriggerBand::top(80.0).root_margin(), "0px 0px -20% 0px");
        assert_eq!(TriggerBand::top(75.0).root_margin(), "0px 0px -25% 0px");
        assert_eq!(TriggerBand::top(90.0).root_margin(), "0px 0px -10% 0px");
        assert_eq!(TriggerBand::top(100.0).root_margin(), "0px");
        assert_eq!(TriggerBand::top(140.0).root_margin(), "0px");
    }

    #[test]
    fn test_line_y() {
        assert_eq!(TriggerBand::top(80.0).line_y(1000.0), 800.0);
    }

    #[test]
    fn test_classify() {
        let line = 800.0;
        assert_eq!(Crossing::classify(true, 500.0, line), Crossing::Entered);
        assert_eq!(Crossing::classify(false, 900.0, line), Crossing::ExitedBelow);
        assert_eq!(Crossing::classify(false, -400.0, line), Crossing::ExitedAbove);
    }

    #[test]
    fn test_entry_plays_forward_once() {
        let mut phase = RevealPhase::default();
        assert_eq!(phase.on_crossing(Crossing::Entered), Some(PlayDirection::Forward));
        assert_eq!(phase, RevealPhase::Shown);
        assert_eq!(phase.on_crossing(Crossing::Entered), None);
    }

    #[test]
    fn test_exit_above_keeps_revealed() {
        let mut phase = RevealPhase::Shown;
        assert_eq!(phase.on_crossing(Crossing::ExitedAbove), None);
        assert_eq!(phase, RevealPhase::Shown);
    }

    #[test]
    fn test_exit_below_reverses() {
        let mut phase = RevealPhase::Shown;
        assert_eq!(phase.on_crossing(Crossing::ExitedBelow), Some(PlayDirection::Reverse));
        assert_eq!(phase, RevealPhase::Hidden);
        assert_eq!(phase.on_crossing(Crossing::ExitedBelow), None);
    }

    #[test]
    fn test_initial_report_below_line_is_ignored() {
        let mut phase = RevealPhase::Hidden;
        assert_eq!(phase.on_crossing(Crossing::ExitedBelow), None);
        assert_eq!(phase, RevealPhase::Hidden);
    }

    #[test]
    fn test_jump_past_band_reveals() {
        let mut phase = RevealPhase::Hidden;
        assert_eq!(phase.on_crossing(Crossing::ExitedAbove), Some(PlayDirection::Forward));
    }

    #[test]
    fn test_directions_alternate() {
        let mut phase = RevealPhase::Hidden;
        let events = [
            Crossing::Entered,
            Crossing::ExitedAbove,
            Crossing::Entered,
            Crossing::ExitedBelow,
            Crossing::ExitedBelow,
            Crossing::Entered,
        ];
        let plays: Vec<_> = events.into_iter().filter_map(|c| phase.on_crossing(c)).collect();
        assert_eq!(
            plays,
            [PlayDirection::Forward, PlayDirection::Reverse, PlayDirection::Forward]
        );
    }

    #[test]
    fn test_stagger_delays() {
        let config = presets::FEATURE_CARDS;
        assert_eq!(config.options(0).delay, 0.0);
        assert_eq!(config.options(3).delay, 300.0);
        assert_eq!(config.total_ms(6), 800.0 + 500.0);
        assert_eq!(config.total_ms(0), 0.0);
    }

    #[test]
    fn test_reveals_end_at_rest() {
        for config in [
            presets::FEATURE_TITLE,
            presets::FEATURE_CARDS,
            presets::PRODUCT_CARDS,
            presets::TESTIMONIAL_CTA,
            presets::FOOTER_CONTENT,
        ] {
            let [from, to] = config.keyframes();
            assert_eq!(from.opacity, Some(0.0));
            assert_eq!(to, Keyframe::full(&Pose::REST));
        }
    }

    #[test]
    fn test_preset_values() {
        assert_eq!(presets::FEATURE_TITLE.from.y, 80.0);
        assert_eq!(presets::FEATURE_TITLE.easing, Easing::Power4Out);
        assert_eq!(presets::TESTIMONIAL_TITLE.stagger_ms, 120.0);
        assert_eq!(presets::PRODUCT_CARDS.band, TriggerBand::top(75.0));
        assert_eq!(presets::PRODUCT_CARDS.from.scale, 0.95);
        assert_eq!(presets::FOOTER_CONTENT.band.root_margin(), "0px 0px -10% 0px");
    }
}
