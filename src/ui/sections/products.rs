use leptos::prelude::*;

use crate::core::contact::CtaAction;
use crate::core::content::{PRODUCTS, Product};
use crate::core::motion::hover;
use crate::core::motion::reveal::presets;
use crate::core::navigation::Anchor;
use crate::ui::common::{SectionHeading, TitleLine};
use crate::ui::dom::dispatch_cta;
use crate::ui::icon::{GlyphIcon, Icon, icons};
use crate::ui::motion::{Targets, use_hover, use_reveal};

const TITLE: &[TitleLine] = &[TitleLine::plain("Nuestros"), TitleLine::gradient("Productos")];

#[component]
fn ProductCard(product: &'static Product) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Article>::new();
    let hovered = use_hover(card_ref, vec![(Targets::Root, hover::PRODUCT_CARD)]);

    let title_id = format!("product-title-{}", product.id);
    let gradient = product.gradient.classes();

    let border = if product.popular {
        "border-amber-400/50 shadow-amber-500/20"
    } else {
        "border-amber-200/50 hover:border-amber-300/70"
    };
    let button = if product.popular {
        "bg-gradient-to-r from-amber-400 to-red-400 text-black hover:shadow-xl hover:shadow-amber-500/50 focus-visible:ring-amber-400"
    } else {
        "bg-gradient-to-r from-amber-500 to-red-500 text-white hover:shadow-xl hover:shadow-amber-500/30 focus-visible:ring-amber-500"
    };

    let on_purchase = move |_| dispatch_cta(CtaAction::Purchase(product.id));

    view! {
        // reveal drives this wrapper, hover drives the article
        <div data-product-card="" class="h-full">
            <div class=if product.popular { "h-full lg:scale-105" } else { "h-full" }>
                <article node_ref=card_ref class="relative group h-full" aria-labelledby=title_id.clone()>
                    {product.popular.then(|| view! {
                        <div
                            class="absolute -top-4 left-1/2 -translate-x-1/2 z-20"
                            role="status"
                            aria-label="Producto más popular"
                        >
                            <div class="flex items-center gap-2 px-4 py-2 rounded-full bg-gradient-to-r from-amber-400 to-red-400 text-black text-sm font-bold shadow-lg shadow-amber-500/30">
                                <Icon shape=icons::STAR class="w-4 h-4" />
                                <span>"Más Popular"</span>
                            </div>
                        </div>
                    })}

                    <div class=move || {
                        format!(
                            "relative h-full p-6 sm:p-8 rounded-3xl bg-white/80 backdrop-blur-sm border-2 transition-all duration-500 {border} {}",
                            if hovered.get() { "shadow-2xl" } else { "shadow-lg" },
                        )
                    }>
                        <div class="text-center mb-6 sm:mb-8">
                            <div class=move || {
                                format!(
                                    "inline-flex items-center justify-center w-20 h-20 sm:w-24 sm:h-24 mb-4 sm:mb-6 rounded-2xl bg-gradient-to-br {gradient} text-white shadow-lg group-hover:shadow-xl transition-all duration-500 {}",
                                    if hovered.get() { "scale-110 rotate-3" } else { "" },
                                )
                            }>
                                <GlyphIcon glyph=product.glyph class="w-10 h-10" />
                            </div>

                            <h3 id=title_id.clone() class="text-xl sm:text-2xl font-bold text-gray-800 mb-2">
                                {product.name}
                            </h3>
                            <p class=format!("font-medium bg-gradient-to-r {gradient} bg-clip-text text-transparent")>
                                {product.tagline}
                            </p>
                        </div>

                        <div class="text-center mb-6 sm:mb-8">
                            <h4 class="text-lg font-semibold text-gray-800 mb-2">"Beneficios Incluidos"</h4>
                            <p class="text-sm text-gray-600 leading-relaxed px-2">{product.description}</p>
                        </div>

                        <ul
                            class="space-y-3 sm:space-y-4 mb-6 sm:mb-8"
                            role="list"
                            aria-label=format!("Beneficios de {}", product.name)
                        >
                            {product
                                .benefits
                                .iter()
                                .map(|benefit| view! {
                                    <li class="flex items-start gap-3" data-benefit=benefit.id>
                                        <div class=format!("flex-shrink-0 w-6 h-6 rounded-full flex items-center justify-center text-white bg-gradient-to-r {gradient}")>
                                            <Icon shape=icons::CHECK class="w-4 h-4" />
                                        </div>
                                        <span class="text-sm text-gray-700 leading-relaxed">{benefit.text}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>

                        <button
                            class=format!("w-full py-3 sm:py-4 px-6 rounded-xl font-semibold text-base sm:text-lg transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-offset-white active:scale-95 {button}")
                            on:click=on_purchase
                            aria-label=format!("Obtener {}", product.name)
                        >
                            "Obtener Ahora"
                        </button>
                    </div>

                    <div
                        class=format!("absolute inset-0 rounded-3xl blur-xl -z-10 bg-gradient-to-r {gradient} opacity-0 group-hover:opacity-20 transition-opacity duration-500")
                        aria-hidden="true"
                    ></div>
                </article>
            </div>
        </div>
    }
}

/// Product packages with purchase buttons
#[component]
pub fn Products() -> impl IntoView {
    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let cta_ref = NodeRef::<leptos::html::Div>::new();

    use_reveal(grid_ref, Targets::Selector("[data-product-card]"), presets::PRODUCT_CARDS);
    use_reveal(cta_ref, Targets::Root, presets::PRODUCT_CTA);

    view! {
        <section
            id=Anchor::Productos.id()
            class="relative py-20 sm:py-24 lg:py-32 overflow-hidden"
            aria-labelledby="products-heading"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-amber-400/5 to-red-400/5" aria-hidden="true"></div>
            <div
                class="absolute top-1/4 left-0 w-72 sm:w-96 h-72 sm:h-96 bg-amber-400/10 rounded-full blur-3xl -translate-x-1/2"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-1/4 right-0 w-72 sm:w-96 h-72 sm:h-96 bg-red-400/10 rounded-full blur-3xl translate-x-1/2"
                aria-hidden="true"
            ></div>

            <div class="container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeading
                    heading_id="products-heading"
                    lines=TITLE
                    subtitle="Elige el paquete que mejor se adapte a tus necesidades y comienza tu transformación hacia el éxito en la panadería."
                    title_reveal=presets::PRODUCT_TITLE
                    subtitle_reveal=presets::PRODUCT_SUBTITLE
                />

                <div node_ref=grid_ref class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8 mb-12 sm:mb-16">
                    {PRODUCTS.iter().map(|product| view! { <ProductCard product=product /> }).collect_view()}
                </div>

                <div node_ref=cta_ref class="text-center">
                    <p class="text-gray-600 mb-4">"¿No sabes cuál elegir?"</p>
                    <button
                        class="inline-flex items-center gap-2 px-8 py-4 rounded-xl font-semibold text-amber-700 bg-white/80 border-2 border-amber-300/70
                               hover:bg-amber-50 hover:border-amber-400 transition-all duration-300
                               focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 focus-visible:ring-offset-2"
                        on:click=move |_| dispatch_cta(CtaAction::Demo)
                    >
                        "Solicitar Demo"
                        <Icon shape=icons::ARROW_RIGHT />
                    </button>
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
            view! { <Products /> }.to_html()
        })
    }

    #[test]
    fn test_renders_one_card_per_product_in_order() {
        let html = render();
        assert_eq!(html.matches("data-product-card").count(), PRODUCTS.len());

        let positions: Vec<usize> = PRODUCTS
            .iter()
            .map(|p| {
                html.find(&format!("id=\"product-title-{}\"", p.id))
                    .expect("product title rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_only_popular_product_has_badge() {
        let html = render();
        let popular = PRODUCTS.iter().filter(|p| p.popular).count();
        assert_eq!(html.matches("Producto más popular").count(), popular);
        assert_eq!(html.matches("lg:scale-105").count(), popular);
    }

    #[test]
    fn test_every_benefit_is_listed() {
        let html = render();
        let benefits: usize = PRODUCTS.iter().map(|p| p.benefits.len()).sum();
        assert_eq!(html.matches("data-benefit=").count(), benefits);
        for product in PRODUCTS {
            assert!(html.contains(&format!("Obtener {}", product.name)));
        }
    }

    #[test]
    fn test_section_uses_products_anchor() {
        let html = render();
        assert!(html.contains("id=\"productos\""));
        assert!(html.contains("Solicitar Demo"));
    }
}
