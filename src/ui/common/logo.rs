use leptos::prelude::*;

pub const LOGO_SRC: &str = "/img/LOGO FINAL MARQUESA EXPRESS.png";

/// Brand mark with a soft glow that shows while an enclosing `group` is hovered.
#[component]
pub fn Logo(
    #[prop(default = "h-12 sm:h-14 w-auto")] class: &'static str,
    /// Above the fold the logo should not be lazy loaded
    #[prop(default = false)]
    eager: bool,
) -> impl IntoView {
    view! {
        <div class="relative">
            <img
                src=LOGO_SRC
                alt="Marquesa Express"
                class=format!("{class} transition-transform duration-500 group-hover:scale-110 group-focus:scale-110")
                loading=if eager { "eager" } else { "lazy" }
            />
            <div
                class="absolute inset-0 bg-gradient-to-r from-amber-400/20 to-red-400/20 rounded-full blur-xl opacity-0 group-hover:opacity-100 transition-opacity duration-500"
                aria-hidden="true"
            ></div>
        </div>
    }
}
