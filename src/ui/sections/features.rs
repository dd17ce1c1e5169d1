use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature};
use crate::core::motion::hover;
use crate::core::motion::reveal::presets;
use crate::ui::common::{SectionHeading, TitleLine};
use crate::ui::icon::GlyphIcon;
use crate::ui::motion::{Targets, use_hover, use_reveal};

pub const SECTION_ID: &str = "caracteristicas";

const TITLE: &[TitleLine] = &[
    TitleLine::plain("¿Por qué elegir"),
    TitleLine::gradient("Marquesa Express"),
    TitleLine::plain("?"),
];

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Article>::new();
    // the card only listens; icon, title and description carry the motion
    use_hover(
        card_ref,
        vec![
            (Targets::Selector("[data-feature-icon]"), hover::FEATURE_ICON),
            (Targets::Selector("[data-feature-title]"), hover::FEATURE_TITLE),
            (Targets::Selector("[data-feature-description]"), hover::FEATURE_DESCRIPTION),
        ],
    );

    let title_id = format!("feature-title-{}", feature.id);
    let gradient = feature.gradient.classes();

    view! {
        <article
            node_ref=card_ref
            data-feature-card=""
            aria-labelledby=title_id.clone()
            class="group relative p-6 sm:p-8 rounded-3xl overflow-hidden bg-white/80 backdrop-blur-sm
                   border border-amber-200/50 hover:border-amber-300/70 transition-colors duration-500
                   focus-within:ring-2 focus-within:ring-amber-400 focus-within:ring-offset-2 focus-within:ring-offset-white"
        >
            <div
                class=format!("absolute inset-0 bg-gradient-to-br {gradient} opacity-0 group-hover:opacity-10 transition-opacity duration-500")
                aria-hidden="true"
            ></div>

            <div class="relative z-10 space-y-6">
                <div
                    data-feature-icon=""
                    aria-hidden="true"
                    class=format!("w-16 h-16 sm:w-20 sm:h-20 rounded-2xl flex items-center justify-center bg-gradient-to-br {gradient} text-white shadow-lg group-hover:shadow-2xl transition-shadow duration-500")
                >
                    <GlyphIcon glyph=feature.glyph class="w-8 h-8" />
                </div>

                <h3
                    id=title_id.clone()
                    data-feature-title=""
                    class="text-xl sm:text-2xl font-bold text-gray-800 group-hover:text-amber-600 transition-colors duration-300"
                >
                    {feature.title}
                </h3>

                <p data-feature-description="" class="text-gray-600 leading-relaxed text-sm sm:text-base">
                    {feature.description}
                </p>
            </div>

            // Decorative dots
            <div
                class="absolute top-4 right-4 w-2 h-2 rounded-full bg-amber-400/30 opacity-0 group-hover:opacity-100 transition-opacity duration-500"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-4 left-4 w-1.5 h-1.5 rounded-full bg-red-400/30 opacity-0 group-hover:opacity-100 transition-opacity duration-500"
                aria-hidden="true"
            ></div>
        </article>
    }
}

/// "¿Por qué elegir Marquesa Express?" grid
#[component]
pub fn Features() -> impl IntoView {
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    use_reveal(grid_ref, Targets::Selector("[data-feature-card]"), presets::FEATURE_CARDS);

    view! {
        <section
            id=SECTION_ID
            class="relative py-20 sm:py-24 lg:py-32 overflow-hidden"
            aria-labelledby="features-heading"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-amber-400/5 to-red-400/5" aria-hidden="true"></div>
            <div
                class="absolute top-0 left-0 w-72 sm:w-96 h-72 sm:h-96 bg-amber-400/10 rounded-full blur-3xl -translate-x-1/2 -translate-y-1/2"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-0 right-0 w-72 sm:w-96 h-72 sm:h-96 bg-red-400/10 rounded-full blur-3xl translate-x-1/2 translate-y-1/2"
                aria-hidden="true"
            ></div>

            <div class="container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading
                    heading_id="features-heading"
                    lines=TITLE
                    subtitle="Ofrecemos las herramientas y conocimientos necesarios para transformar tu pasión por la panadería en un negocio próspero y sostenible."
                    title_reveal=presets::FEATURE_TITLE
                    subtitle_reveal=presets::FEATURE_SUBTITLE
                />

                <div node_ref=grid_ref class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8" role="list">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <div role="listitem">
                                <FeatureCard feature=feature />
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::motion::provide_motion_context;

    fn render() -> String {
        Owner::new().with(|| {
            provide_motion_context();
            view! { <Features /> }.to_html()
        })
    }

    #[test]
    fn test_renders_one_card_per_feature_in_order() {
        let html = render();
        assert_eq!(html.matches("data-feature-card").count(), FEATURES.len());

        let positions: Vec<usize> = FEATURES
            .iter()
            .map(|f| {
                html.find(&format!("id=\"feature-title-{}\"", f.id))
                    .expect("feature title rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cards_are_labelled_by_their_titles() {
        let html = render();
        for feature in FEATURES {
            assert!(html.contains(&format!("aria-labelledby=\"feature-title-{}\"", feature.id)));
        }
    }

    #[test]
    fn test_section_is_labelled_by_heading() {
        let html = render();
        assert!(html.contains("id=\"caracteristicas\""));
        assert!(html.contains("id=\"features-heading\""));
        assert_eq!(html.matches("data-title-line").count(), TITLE.len());
    }
}
