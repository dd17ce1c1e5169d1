use leptos::prelude::*;

use crate::core::motion::RevealConfig;
use crate::ui::motion::{Targets, use_reveal};

/// One line of a section title. Highlighted lines get the brand gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleLine {
    pub text: &'static str,
    pub highlight: bool,
}

impl TitleLine {
    pub const fn plain(text: &'static str) -> Self {
        Self {
            text,
            highlight: false,
        }
    }

    pub const fn gradient(text: &'static str) -> Self {
        Self {
            text,
            highlight: true,
        }
    }

    fn class(&self) -> &'static str {
        if self.highlight {
            "block bg-gradient-to-r from-amber-400 to-red-400 bg-clip-text text-transparent"
        } else {
            "block text-gray-800"
        }
    }
}

/// Centered `h2` + subtitle used by every content section.
///
/// Title lines and the subtitle reveal independently, each on its own
/// trigger band.
#[component]
pub fn SectionHeading(
    /// `id` of the `h2`, referenced by the section's `aria-labelledby`
    heading_id: &'static str,
    lines: &'static [TitleLine],
    subtitle: &'static str,
    title_reveal: RevealConfig,
    subtitle_reveal: RevealConfig,
) -> impl IntoView {
    let title_ref = NodeRef::<leptos::html::Div>::new();
    let subtitle_ref = NodeRef::<leptos::html::P>::new();

    use_reveal(title_ref, Targets::Selector("[data-title-line]"), title_reveal);
    use_reveal(subtitle_ref, Targets::Root, subtitle_reveal);

    view! {
        <header class="text-center mb-12 sm:mb-16 lg:mb-20">
            <div node_ref=title_ref class="space-y-2 sm:space-y-4">
                <h2 id=heading_id class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight">
                    {lines
                        .iter()
                        .map(|line| view! { <span data-title-line="" class=line.class()>{line.text}</span> })
                        .collect_view()}
                </h2>
            </div>
            <p node_ref=subtitle_ref class="text-lg sm:text-xl text-gray-600 max-w-3xl mx-auto mt-6 sm:mt-8 px-4">
                {subtitle}
            </p>
        </header>
    }
}
