//! Reduced-motion preference context
//!
//! Provides:
//! - MotionContext holding the live `prefers-reduced-motion` flag
//! - Synchronous detection at mount so the first effect run is already gated
//! - A `change` listener on the media query, removed when the owner is disposed

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

#[cfg(feature = "hydrate")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Shared motion preference
#[derive(Clone, Copy)]
pub struct MotionContext {
    /// The user asked the platform for reduced motion
    pub reduced: RwSignal<bool>,
}

impl MotionContext {
    pub fn is_reduced(&self) -> bool {
        self.reduced.get()
    }

    pub fn is_reduced_untracked(&self) -> bool {
        self.reduced.get_untracked()
    }
}

#[cfg(feature = "hydrate")]
fn reduced_motion_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Read the platform preference; the server always renders the full-motion
/// markup, which is also the final state every animation settles on.
fn detect_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(query) = reduced_motion_query() {
            return query.matches();
        }
    }
    false
}

/// Provide the motion context to the application
pub fn provide_motion_context() -> MotionContext {
    let reduced = RwSignal::new(detect_reduced_motion());
    let ctx = MotionContext { reduced };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(query) = reduced_motion_query() else {
                return;
            };
            // the value may have changed between render and hydration
            reduced.set(query.matches());

            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| {
                    reduced.set(e.matches());
                },
            );
            let _ = query.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

            let listener = StoredValue::new_local(Some((query, handler)));
            on_cleanup(move || {
                if let Some((query, handler)) = listener.try_update_value(Option::take).flatten() {
                    let _ = query
                        .remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
                }
            });
        });
    }

    provide_context(ctx);

    ctx
}

/// Use the motion context from anywhere in the component tree
pub fn use_motion_context() -> MotionContext {
    use_context::<MotionContext>().expect("MotionContext should be provided")
}
