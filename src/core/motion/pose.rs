//! Visual pose of an animated element and the keyframe/option records handed
//! to the Web Animations API.

use serde::Serialize;

use super::easing::Easing;

/// Translation (px), uniform scale, rotation (deg) and opacity of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    /// Rotation around the vertical axis, rendered with perspective
    pub rotate_y: f64,
    pub opacity: f64,
}

impl Pose {
    /// Untransformed and fully opaque; every reveal ends here
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_y: 0.0,
        opacity: 1.0,
    };

    /// Rest position with zero opacity
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub const fn x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub const fn rotate_y(self, rotate_y: f64) -> Self {
        Self { rotate_y, ..self }
    }

    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// CSS transform; the function list is identical for every pose so any
    /// two poses interpolate component-wise.
    pub fn transform_css(&self) -> String {
        format!(
            "perspective(800px) translate({}px, {}px) rotate({}deg) rotateY({}deg) scale({})",
            self.x, self.y, self.rotate, self.rotate_y, self.scale
        )
    }

    pub fn is_rest_transform(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.rotate == 0.0 && self.rotate_y == 0.0
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// One keyframe object for `Element.animate()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub transform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Keyframe {
    /// Transform and opacity
    pub fn full(pose: &Pose) -> Self {
        Self {
            transform: pose.transform_css(),
            opacity: Some(pose.opacity),
        }
    }

    /// Transform only, leaving opacity to other animations
    pub fn transform_only(pose: &Pose) -> Self {
        Self {
            transform: pose.transform_css(),
            opacity: None,
        }
    }

    /// Start from an already-resolved CSS transform (e.g. a computed style)
    pub fn from_transform(transform: impl Into<String>) -> Self {
        Self {
            transform: transform.into(),
            opacity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    Forwards,
    Backwards,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Normal,
    Alternate,
}

/// `KeyframeAnimationOptions` for `Element.animate()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationOptions {
    pub duration: f64,
    pub delay: f64,
    pub easing: String,
    pub fill: Fill,
    /// `f64::INFINITY` repeats forever
    pub iterations: f64,
    pub direction: Direction,
}

impl AnimationOptions {
    pub fn once(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration: duration_ms,
            delay: 0.0,
            easing: easing.css(),
            fill: Fill::Both,
            iterations: 1.0,
            direction: Direction::Normal,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay = delay_ms;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn forever(mut self, direction: Direction) -> Self {
        self.iterations = f64::INFINITY;
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_transform() {
        assert!(Pose::REST.is_rest_transform());
        assert!(Pose::HIDDEN.is_rest_transform());
        assert!(!Pose::REST.y(-8.0).is_rest_transform());
        assert_eq!(
            Pose::REST.transform_css(),
            "perspective(800px) translate(0px, 0px) rotate(0deg) rotateY(0deg) scale(1)"
        );
    }

    #[test]
    fn test_builders_compose() {
        let pose = Pose::HIDDEN.y(60.0).scale(0.9);
        assert_eq!(pose.y, 60.0);
        assert_eq!(pose.scale, 0.9);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(
            pose.transform_css(),
            "perspective(800px) translate(0px, 60px) rotate(0deg) rotateY(0deg) scale(0.9)"
        );
    }

    #[test]
    fn test_keyframe_serialization() {
        let full = serde_json::to_value(Keyframe::full(&Pose::HIDDEN.y(40.0))).unwrap();
        assert_eq!(full["opacity"], 0.0);
        assert!(full["transform"].as_str().unwrap().contains("translate(0px, 40px)"));

        let transform_only = serde_json::to_value(Keyframe::transform_only(&Pose::REST)).unwrap();
        assert!(transform_only.get("opacity").is_none());
    }

    #[test]
    fn test_options_serialization() {
        let opts = AnimationOptions::once(800.0, Easing::Power3Out)
            .delay(150.0)
            .fill(Fill::Forwards);
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(json["duration"], 800.0);
        assert_eq!(json["delay"], 150.0);
        assert_eq!(json["fill"], "forwards");
        assert_eq!(json["direction"], "normal");
        assert_eq!(json["easing"], "cubic-bezier(0.25, 1, 0.5, 1)");
    }

    #[test]
    fn test_forever() {
        let opts = AnimationOptions::once(3000.0, Easing::Power2InOut).forever(Direction::Alternate);
        assert!(opts.iterations.is_infinite());
        assert_eq!(opts.direction, Direction::Alternate);
    }
}
