//! The animation capability shared by every section, and the gate that
//! enforces the reduced-motion preference in front of it.

use super::hover::HoverConfig;
use super::idle::LoopConfig;
use super::reveal::RevealConfig;
use super::timeline::Timeline;

/// Something that can attach animations to page elements.
///
/// Every method hands back a binding that owns whatever it acquired
/// (observers, listeners, running animations). Dropping the binding releases
/// all of it and returns the targets to their natural styles. `None` means
/// nothing was attached and the targets keep their final, static styling.
pub trait Motion {
    type Target;
    type Binding;

    /// Reveal `targets` when `trigger` crosses into `config`'s band.
    fn on_reveal(
        &self,
        trigger: &Self::Target,
        targets: Vec<Self::Target>,
        config: &RevealConfig,
    ) -> Option<Self::Binding>;

    /// Lift `layers` while the pointer is over `card`. `on_change` observes
    /// each accepted enter/leave.
    fn on_hover_transform<F>(
        &self,
        card: &Self::Target,
        layers: Vec<(Self::Target, HoverConfig)>,
        on_change: F,
    ) -> Option<Self::Binding>
    where
        F: Fn(bool) + 'static;

    /// Play an entrance timeline once.
    fn play_timeline(&self, timeline: Timeline<Self::Target>) -> Option<Self::Binding>;

    /// Run an endless loop on `targets`.
    fn on_loop(&self, targets: Vec<Self::Target>, config: &LoopConfig) -> Option<Self::Binding>;
}

/// Forwards to the inner driver only when motion is allowed.
///
/// With `reduced` set the inner driver is never called, so no animation,
/// listener or observer is ever created.
#[derive(Debug, Clone)]
pub struct ReducedMotionGate<M> {
    inner: M,
    reduced: bool,
}

impl<M: Motion> ReducedMotionGate<M> {
    pub fn new(inner: M, reduced: bool) -> Self {
        Self { inner, reduced }
    }

    #[cfg(test)]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }
}

impl<M: Motion> Motion for ReducedMotionGate<M> {
    type Target = M::Target;
    type Binding = M::Binding;

    fn on_reveal(
        &self,
        trigger: &Self::Target,
        targets: Vec<Self::Target>,
        config: &RevealConfig,
    ) -> Option<Self::Binding> {
        if self.reduced {
            return None;
        }
        self.inner.on_reveal(trigger, targets, config)
    }

    fn on_hover_transform<F>(
        &self,
        card: &Self::Target,
        layers: Vec<(Self::Target, HoverConfig)>,
        on_change: F,
    ) -> Option<Self::Binding>
    where
        F: Fn(bool) + 'static,
    {
        if self.reduced {
            return None;
        }
        self.inner.on_hover_transform(card, layers, on_change)
    }

    fn play_timeline(&self, timeline: Timeline<Self::Target>) -> Option<Self::Binding> {
        if self.reduced {
            return None;
        }
        self.inner.play_timeline(timeline)
    }

    fn on_loop(&self, targets: Vec<Self::Target>, config: &LoopConfig) -> Option<Self::Binding> {
        if self.reduced {
            return None;
        }
        self.inner.on_loop(targets, config)
    }
}
