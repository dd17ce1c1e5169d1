use leptos::prelude::*;

use crate::core::content::{TESTIMONIALS, Testimonial};
use crate::core::format::{display_date, initials, rating_label, star_fills};
use crate::core::motion::hover;
use crate::core::motion::reveal::presets;
use crate::core::navigation::Anchor;
use crate::ui::common::{SectionHeading, TitleLine};
use crate::ui::dom::scroll_to_anchor;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Targets, use_hover, use_motion_context, use_reveal};

const TITLE: &[TitleLine] = &[
    TitleLine::plain("Lo que dicen"),
    TitleLine::plain("nuestros"),
    TitleLine::gradient("clientes"),
];

#[component]
fn Stars(rating: u8) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1 mb-6" role="img" aria-label=rating_label(rating)>
            {star_fills(rating)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "w-5 h-5 text-amber-400" } else { "w-5 h-5 text-gray-300" };
                    view! { <Icon shape=icons::STAR class=class /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Article>::new();
    let hovered = use_hover(card_ref, vec![(Targets::Root, hover::TESTIMONIAL_CARD)]);

    let author_id = format!("testimonial-author-{}", testimonial.id);
    let gradient = testimonial.gradient.classes();

    view! {
        <div data-testimonial-card="" class="h-full">
            <article node_ref=card_ref class="relative group h-full" aria-labelledby=author_id.clone()>
                <div class=move || {
                    format!(
                        "relative h-full p-6 sm:p-8 rounded-3xl bg-white/80 backdrop-blur-sm border border-amber-200/50 hover:border-amber-300/70 transition-all duration-500 {}",
                        if hovered.get() { "shadow-2xl" } else { "shadow-lg" },
                    )
                }>
                    <div class="absolute top-6 right-6 opacity-50" aria-hidden="true">
                        <Icon shape=icons::QUOTE class="w-8 h-8 text-amber-400/20" />
                    </div>

                    <Stars rating=testimonial.rating />

                    <blockquote class="mb-8">
                        <p class="text-gray-700 leading-relaxed text-base group-hover:text-gray-800 transition-colors duration-300">
                            {format!("\u{201c}{}\u{201d}", testimonial.content)}
                        </p>
                    </blockquote>

                    <footer class="flex items-center gap-4">
                        <div
                            class=format!("w-12 h-12 sm:w-14 sm:h-14 rounded-xl flex items-center justify-center bg-gradient-to-br {gradient} font-bold text-white text-base sm:text-lg flex-shrink-0")
                            aria-hidden="true"
                        >
                            {initials(testimonial.name)}
                        </div>

                        <div class="min-w-0 flex-1">
                            <div class="flex items-center gap-2 mb-1">
                                <cite id=author_id.clone() class="font-bold text-gray-800 text-base not-italic">
                                    {testimonial.name}
                                </cite>
                                {testimonial.verified.then(|| view! {
                                    <span title="Cliente verificado" aria-label="Cliente verificado" class="text-amber-500">
                                        <Icon shape=icons::VERIFIED class="w-5 h-5" />
                                    </span>
                                })}
                            </div>
                            <p class="text-gray-600 text-sm">{testimonial.role}</p>
                            <p class="text-gray-500 text-xs mt-1">
                                {format!("{} • {}", testimonial.business, display_date(testimonial.date))}
                            </p>
                        </div>
                    </footer>
                </div>

                <div
                    class=format!("absolute inset-0 rounded-3xl blur-xl -z-10 bg-gradient-to-r {gradient} opacity-0 group-hover:opacity-10 transition-opacity duration-500")
                    aria-hidden="true"
                ></div>
            </article>
        </div>
    }
}

/// Customer quotes
#[component]
pub fn Testimonials() -> impl IntoView {
    let motion = use_motion_context();
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let cta_ref = NodeRef::<leptos::html::Div>::new();

    use_reveal(grid_ref, Targets::Selector("[data-testimonial-card]"), presets::TESTIMONIAL_CARDS);
    use_reveal(cta_ref, Targets::Root, presets::TESTIMONIAL_CTA);

    let on_start = move |_| {
        scroll_to_anchor(Anchor::Productos, !motion.is_reduced_untracked());
    };

    view! {
        <section
            id=Anchor::Testimonios.id()
            class="relative py-20 sm:py-24 lg:py-32 overflow-hidden"
            aria-labelledby="testimonials-heading"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-amber-400/5 to-red-400/5" aria-hidden="true"></div>
            <div
                class="absolute top-0 right-0 w-72 sm:w-96 h-72 sm:h-96 bg-amber-400/10 rounded-full blur-3xl translate-x-1/2 -translate-y-1/2"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-0 left-0 w-72 sm:w-96 h-72 sm:h-96 bg-red-400/10 rounded-full blur-3xl -translate-x-1/2 translate-y-1/2"
                aria-hidden="true"
            ></div>

            <div class="container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading
                    heading_id="testimonials-heading"
                    lines=TITLE
                    subtitle="Emprendedores reales compartiendo sus experiencias con nuestros productos."
                    title_reveal=presets::TESTIMONIAL_TITLE
                    subtitle_reveal=presets::TESTIMONIAL_SUBTITLE
                />

                <div node_ref=grid_ref class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8 mb-12 sm:mb-16 lg:mb-20">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>

                <div node_ref=cta_ref class="text-center">
                    <p class="text-lg text-gray-700 mb-6">
                        "Únete a los emprendedores que ya transformaron su pasión en negocio."
                    </p>
                    <button
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-xl font-semibold text-white bg-gradient-to-r from-amber-500 to-red-500
                               hover:shadow-xl hover:shadow-amber-500/40 active:scale-95 transition-all duration-300
                               focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 focus-visible:ring-offset-2"
                        on:click=on_start
                    >
                        "Comenzar Ahora"
                        <Icon shape=icons::ARROW_RIGHT />
                    </button>
                </div>
            </div>
        </section>
    }
}
