//! Component hooks over the motion driver
//!
//! Each hook registers an effect that reads the reduced-motion flag and the
//! node it animates. Whatever a run acquires is released by that run's
//! `on_cleanup`, so a preference flip or an unmount always tears the
//! previous binding down before anything new starts.

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::motion::{EntranceStep, HoverConfig, LoopConfig, RevealConfig};

#[cfg(feature = "hydrate")]
use crate::core::motion::{Motion, ReducedMotionGate, Timeline};
#[cfg(feature = "hydrate")]
use crate::ui::motion::web::{MotionBinding, WebMotion};
#[cfg(feature = "hydrate")]
use leptos::web_sys::Element;

use super::context::use_motion_context;

/// Which elements a hook animates, relative to the node it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Targets {
    /// The node itself
    Root,
    /// Every descendant matching the selector, in document order
    Selector(&'static str),
}

#[cfg(feature = "hydrate")]
pub(crate) fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
impl Targets {
    fn resolve(self, root: &Element) -> Vec<Element> {
        match self {
            Targets::Root => vec![root.clone()],
            Targets::Selector(selector) => select_all(root, selector),
        }
    }
}

/// Keep `binding` alive until the current effect run is cleaned up.
#[cfg(feature = "hydrate")]
fn hold(binding: Option<MotionBinding>) {
    let Some(binding) = binding else {
        return;
    };
    let slot = StoredValue::new_local(Some(binding));
    on_cleanup(move || {
        // dropping the binding releases observers, listeners and animations
        let _ = slot.try_update_value(Option::take);
    });
}

#[cfg(feature = "hydrate")]
fn gate(reduced: bool) -> ReducedMotionGate<WebMotion> {
    ReducedMotionGate::new(WebMotion, reduced)
}

#[cfg(feature = "hydrate")]
fn element_of<E>(node: &NodeRef<E>) -> Option<Element>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    node.get().map(|el| el.unchecked_into::<Element>())
}

/// Reveal `targets` under `trigger` when it scrolls into `config`'s band.
pub fn use_reveal<E>(trigger: NodeRef<E>, targets: Targets, config: RevealConfig)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let motion = use_motion_context();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let reduced = motion.is_reduced();
            let Some(root) = element_of(&trigger) else {
                return;
            };
            hold(gate(reduced).on_reveal(&root, targets.resolve(&root), &config));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (motion, trigger, targets, config);
}

/// Lift the given layers while the pointer is over `card`. Returns the hover
/// state for styling that does not animate (glows, colour changes).
pub fn use_hover<E>(card: NodeRef<E>, layers: Vec<(Targets, HoverConfig)>) -> RwSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let motion = use_motion_context();
    let hovered = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let reduced = motion.is_reduced();
            let Some(root) = element_of(&card) else {
                return;
            };
            let resolved: Vec<(Element, HoverConfig)> = layers
                .iter()
                .flat_map(|(targets, config)| {
                    targets
                        .resolve(&root)
                        .into_iter()
                        .map(move |el| (el, *config))
                })
                .collect();
            hovered.set(false);
            hold(gate(reduced).on_hover_transform(&root, resolved, move |entered| {
                hovered.set(entered);
            }));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (motion, card, layers);

    hovered
}

/// Play an entrance timeline over descendants of `root` once it mounts.
pub fn use_entrance<E>(root: NodeRef<E>, steps: &'static [EntranceStep])
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let motion = use_motion_context();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let reduced = motion.is_reduced();
            let Some(root) = element_of(&root) else {
                return;
            };
            let timeline = Timeline::from_steps(steps, |selector| select_all(&root, selector));
            hold(gate(reduced).play_timeline(timeline));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (motion, root, steps);
}

/// Track whether `target` is at least `threshold` visible. Starts out `true`
/// so server-rendered content is treated as on screen.
pub fn use_visibility<E>(target: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let Some(el) = element_of(&target) else {
                return;
            };
            hold(WebMotion.observe_visibility(&el, threshold, move |is_visible| {
                set_visible.set(is_visible);
            }));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, threshold, set_visible);

    visible
}

/// Run `config` on `targets` under `root` for as long as `active` holds and
/// motion is allowed.
pub fn use_idle_loop<E>(root: NodeRef<E>, targets: Targets, config: LoopConfig, active: Signal<bool>)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let motion = use_motion_context();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let reduced = motion.is_reduced();
            if !active.get() {
                return;
            }
            let Some(root) = element_of(&root) else {
                return;
            };
            hold(gate(reduced).on_loop(targets.resolve(&root), &config));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (motion, root, targets, config, active);
}
