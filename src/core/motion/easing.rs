//! Easing curves
//!
//! Named after the curves the page was designed with. Polynomial curves map
//! to `cubic-bezier()`; curves that overshoot more than a bezier can express
//! are sampled into a CSS `linear()` function.

use std::f64::consts::PI;

/// Number of segments used when sampling a curve into `linear()`
const LINEAR_SAMPLES: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out
    Power2Out,
    /// Quartic ease-out
    Power3Out,
    /// Quintic ease-out
    Power4Out,
    /// Cubic ease-in-out
    Power2InOut,
    /// Ease-out that overshoots by `overshoot` before settling
    BackOut { overshoot: f64 },
    /// Damped spring settling onto the end value
    ElasticOut { amplitude: f64, period: f64 },
}

impl Easing {
    pub const BACK_OUT: Easing = Easing::BackOut { overshoot: 1.7 };
    pub const ELASTIC_OUT: Easing = Easing::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Progress at normalized time `t` in `[0, 1]`
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Easing::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let a = amplitude.max(1.0);
                let p = period / amplitude.min(1.0);
                let shift = p / (2.0 * PI) * (1.0 / a).asin();
                a * 2f64.powf(-10.0 * t) * ((t - shift) * (2.0 * PI / p)).sin() + 1.0
            }
        }
    }

    /// CSS `<easing-function>` for Web Animations keyframe options
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Easing::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Easing::Power4Out => "cubic-bezier(0.22, 1, 0.36, 1)".to_string(),
            Easing::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Easing::BackOut { .. } | Easing::ElasticOut { .. } => self.sampled_linear(),
        }
    }

    fn sampled_linear(&self) -> String {
        let points: Vec<String> = (0..=LINEAR_SAMPLES)
            .map(|i| {
                let value = self.sample(i as f64 / LINEAR_SAMPLES as f64);
                format_point(value)
            })
            .collect();
        format!("linear({})", points.join(", "))
    }
}

fn format_point(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::Power4Out,
        Easing::Power2InOut,
        Easing::BACK_OUT,
        Easing::ELASTIC_OUT,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.sample(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.sample(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_sample_clamps_time() {
        assert_eq!(Easing::Power2Out.sample(-1.0), 0.0);
        assert_eq!(Easing::Power2Out.sample(2.0), 1.0);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for easing in [Easing::Power2Out, Easing::Power3Out, Easing::Power4Out] {
            assert!(easing.sample(0.3) > 0.3, "{easing:?}");
        }
        assert!(Easing::Power4Out.sample(0.3) > Easing::Power2Out.sample(0.3));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let e = Easing::Power2InOut;
        assert!((e.sample(0.5) - 0.5).abs() < 1e-9);
        assert!((e.sample(0.2) + e.sample(0.8) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::ELASTIC_OUT.sample(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.2, "peak {peak}");
    }

    #[test]
    fn test_back_out_overshoots_then_settles() {
        let mid = Easing::BACK_OUT.sample(0.6);
        assert!(mid > 1.0, "{mid}");
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::Power3Out.css(), "cubic-bezier(0.25, 1, 0.5, 1)");

        let elastic = Easing::ELASTIC_OUT.css();
        assert!(elastic.starts_with("linear(0, "), "{elastic}");
        assert!(elastic.ends_with(", 1)"), "{elastic}");
        assert_eq!(elastic.matches(", ").count(), LINEAR_SAMPLES);
    }

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(0.0), "0");
        assert_eq!(format_point(1.0), "1");
        assert_eq!(format_point(0.123456), "0.1235");
    }
}
