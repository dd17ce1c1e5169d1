//! Browser actions used by the sections: in-page scrolling, outbound
//! contact links and the CTA stubs.
//!
//! All of these are best effort. A missing anchor or a blocked popup is
//! logged and otherwise ignored.

use leptos::logging::log;
#[cfg(feature = "hydrate")]
use leptos::logging::warn;

use crate::core::contact::CtaAction;
use crate::core::navigation::Anchor;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

/// Scroll the section for `anchor` to the top of the viewport.
///
/// Smooth unless `smooth` is false (reduced motion). Returns false if the
/// section is not in the document.
pub fn scroll_to_anchor(anchor: Anchor, smooth: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor.id()))
        else {
            warn!("no section with id `{}`", anchor.id());
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Instant
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (anchor, smooth);
        false
    }
}

/// Open a WhatsApp chat in a new browsing context.
pub fn open_whatsapp(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
            .flatten();
        if opened.is_none() {
            warn!("could not open {url}");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

/// Hand a `mailto:` URL to the platform mail client.
pub fn open_mailto(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                warn!("could not open {url}");
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

/// Checkout, demo and sign-up have no backend yet; the button only reports
/// what was asked for.
pub fn dispatch_cta(action: CtaAction) {
    log!("{}", action.log_line());
}

/// Current vertical scroll offset in px
#[cfg(feature = "hydrate")]
pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Call a zero-argument method on a custom element (e.g. `play` on
/// `<lottie-player>`), ignoring elements that have not upgraded yet.
#[cfg(feature = "hydrate")]
pub fn call_method(el: &web_sys::Element, name: &str) {
    use wasm_bindgen::JsCast;

    let method = js_sys::Reflect::get(el, &name.into())
        .ok()
        .and_then(|m| m.dyn_into::<js_sys::Function>().ok());
    if let Some(method) = method {
        let _ = method.call0(el);
    }
}

/// `document.body` as a scroll-lock target.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct BodyStyle(web_sys::HtmlElement);

#[cfg(feature = "hydrate")]
impl BodyStyle {
    pub fn get() -> Option<Self> {
        web_sys::window()?.document()?.body().map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl crate::core::scroll_lock::ScrollLockTarget for BodyStyle {
    fn overflow(&self) -> String {
        self.0.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.0.style();
        let _ = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
    }
}
