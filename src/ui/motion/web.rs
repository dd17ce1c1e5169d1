//! Web Animations driver
//!
//! Implements [`Motion`] on top of `Element.animate()` and
//! `IntersectionObserver`. Everything a call acquires is owned by the
//! returned [`MotionBinding`]; dropping it disconnects observers, removes
//! listeners and cancels animations so the targets fall back to their
//! stylesheet values.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::logging::warn;
use leptos::web_sys::{self, Animation, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::core::motion::{
    AnimationOptions, Crossing, HoverConfig, HoverPhase, Keyframe, LoopConfig, Motion, PlayDirection,
    RevealConfig, RevealPhase, Timeline,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Start an animation, or `None` if the browser refused it.
///
/// `Element.animate()` is looked up at runtime; web-sys only exposes it
/// behind `web_sys_unstable_apis`.
fn animate(el: &Element, keyframes: &[Keyframe], options: &AnimationOptions) -> Option<Animation> {
    let frames = serde_wasm_bindgen::to_value(keyframes).ok()?;
    let options = serde_wasm_bindgen::to_value(options).ok()?;
    let Some(animate) = js_sys::Reflect::get(el, &"animate".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        warn!("Element.animate is not supported");
        return None;
    };
    match animate.call2(el, &frames, &options) {
        Ok(animation) => animation.dyn_into::<Animation>().ok(),
        Err(err) => {
            warn!("Element.animate failed: {:?}", err);
            None
        }
    }
}

fn computed_transform(el: &Element) -> Option<String> {
    let style = web_sys::window()?.get_computed_style(el).ok()??;
    let value = style.get_property_value("transform").ok()?;
    (!value.is_empty() && value != "none").then_some(value)
}

fn clear_inline_transform(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property("transform");
    }
}

/// One hover layer and the animation currently moving it.
struct HoverLayer {
    element: Element,
    config: HoverConfig,
    phase: Cell<HoverPhase>,
    in_flight: RefCell<Option<Animation>>,
}

impl HoverLayer {
    /// Redirect the layer toward its next target, starting from wherever the
    /// in-flight animation has got to.
    fn on_pointer(&self, entered: bool) -> bool {
        let mut phase = self.phase.get();
        let Some(step) = phase.on_pointer(entered, &self.config) else {
            return false;
        };
        self.phase.set(phase);

        // sample before cancelling, while the in-flight pose still applies
        let current = computed_transform(&self.element);
        if let Some(previous) = self.in_flight.borrow_mut().take() {
            previous.cancel();
        }
        *self.in_flight.borrow_mut() = animate(&self.element, &step.keyframes(current), &step.options());
        true
    }

    fn release(&self) {
        if let Some(animation) = self.in_flight.borrow_mut().take() {
            animation.cancel();
        }
        clear_inline_transform(&self.element);
    }
}

/// Everything one motion call acquired.
#[derive(Default)]
pub struct MotionBinding {
    animations: Vec<Animation>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    listeners: Vec<(Element, &'static str, Closure<dyn FnMut(Event)>)>,
    hover_layers: Vec<Rc<HoverLayer>>,
}

impl MotionBinding {
    fn with_animations(animations: Vec<Animation>) -> Self {
        let mut binding = Self::default();
        binding.animations = animations;
        binding
    }

    fn listen(&mut self, target: &Element, event: &'static str, handler: Closure<dyn FnMut(Event)>) {
        let _ = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        self.listeners.push((target.clone(), event, handler));
    }
}

impl Drop for MotionBinding {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        for (target, event, handler) in self.listeners.drain(..) {
            let _ = target.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
        for animation in self.animations.drain(..) {
            animation.cancel();
        }
        for layer in self.hover_layers.drain(..) {
            layer.release();
        }
    }
}

/// Observe `target` with the given root margin and threshold, calling
/// `on_entry` for every reported entry.
fn observe(
    target: &Element,
    root_margin: &str,
    threshold: f64,
    mut on_entry: impl FnMut(&IntersectionObserverEntry) + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry);
            }
        }
    });

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&threshold.into());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(target);
            Some((observer, callback))
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

/// Browser implementation of [`Motion`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMotion;

impl WebMotion {
    /// Report whether `target` is at least `threshold` visible, on every change.
    pub fn observe_visibility(
        &self,
        target: &Element,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Option<MotionBinding> {
        let observer = observe(target, "0px", threshold, move |entry| {
            on_change(entry.is_intersecting());
        })?;
        let mut binding = MotionBinding::default();
        binding.observer = Some(observer);
        Some(binding)
    }
}

impl Motion for WebMotion {
    type Target = Element;
    type Binding = MotionBinding;

    fn on_reveal(&self, trigger: &Element, targets: Vec<Element>, config: &RevealConfig) -> Option<MotionBinding> {
        if targets.is_empty() {
            return None;
        }

        // created paused at their first frame; `fill: both` holds the hidden pose
        let keyframes = config.keyframes();
        let animations: Vec<Animation> = targets
            .iter()
            .enumerate()
            .filter_map(|(i, el)| animate(el, &keyframes, &config.options(i)))
            .collect();
        for animation in &animations {
            let _ = animation.pause();
        }

        let band = config.band;
        let phase = Cell::new(RevealPhase::Hidden);
        let driven = animations.clone();
        let observer = observe(trigger, &band.root_margin(), 0.0, move |entry| {
            let line_y = entry.root_bounds().map(|r| r.bottom()).unwrap_or_else(|| {
                let height = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or_default();
                band.line_y(height)
            });
            let crossing = Crossing::classify(entry.is_intersecting(), entry.bounding_client_rect().top(), line_y);

            let mut next = phase.get();
            let direction = next.on_crossing(crossing);
            phase.set(next);

            let rate = match direction {
                Some(PlayDirection::Forward) => 1.0,
                Some(PlayDirection::Reverse) => -1.0,
                None => return,
            };
            for animation in &driven {
                animation.set_playback_rate(rate);
                let _ = animation.play();
            }
        });

        if observer.is_none() {
            // without an observer nothing would ever reveal the content
            for animation in &animations {
                animation.cancel();
            }
            return None;
        }

        let mut binding = MotionBinding::with_animations(animations);
        binding.observer = observer;
        Some(binding)
    }

    fn on_hover_transform<F>(
        &self,
        card: &Element,
        layers: Vec<(Element, HoverConfig)>,
        on_change: F,
    ) -> Option<MotionBinding>
    where
        F: Fn(bool) + 'static,
    {
        let layers: Vec<Rc<HoverLayer>> = layers
            .into_iter()
            .map(|(element, config)| {
                Rc::new(HoverLayer {
                    element,
                    config,
                    phase: Cell::new(HoverPhase::Rest),
                    in_flight: RefCell::new(None),
                })
            })
            .collect();

        let on_change = Rc::new(on_change);
        let mut binding = MotionBinding::default();

        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let layers = layers.clone();
            let on_change = on_change.clone();
            let handler = Closure::wrap(Box::new(move |_: Event| {
                let mut accepted = false;
                for layer in &layers {
                    accepted |= layer.on_pointer(entered);
                }
                if accepted {
                    on_change(entered);
                }
            }) as Box<dyn FnMut(Event)>);
            binding.listen(card, event, handler);
        }

        binding.hover_layers = layers;
        Some(binding)
    }

    fn play_timeline(&self, timeline: Timeline<Element>) -> Option<MotionBinding> {
        let animations: Vec<Animation> = timeline
            .steps()
            .iter()
            .flat_map(|step| {
                let keyframes = step.tween.keyframes();
                step.targets
                    .iter()
                    .enumerate()
                    .filter_map(move |(i, el)| animate(el, &keyframes, &step.options_for(i)))
            })
            .collect();

        (!animations.is_empty()).then(|| MotionBinding::with_animations(animations))
    }

    fn on_loop(&self, targets: Vec<Element>, config: &LoopConfig) -> Option<MotionBinding> {
        let keyframes = config.keyframes();
        let animations: Vec<Animation> = targets
            .iter()
            .enumerate()
            .filter_map(|(i, el)| animate(el, &keyframes, &config.options(i)))
            .collect();

        (!animations.is_empty()).then(|| MotionBinding::with_animations(animations))
    }
}
