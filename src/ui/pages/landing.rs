//! Landing page
//!
//! Single scrolling page for Marquesa Express:
//! - SEO meta tags and JSON-LD structured data
//! - Fixed header with mobile menu
//! - Hero with entrance animation and Lottie card
//! - Features, products and testimonials grids revealed on scroll
//! - Footer with contact links and the mobile bottom bar

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::seo;
use crate::ui::sections::{Features, Footer, Header, Hero, Products, Testimonials};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <Header />
            // room for the mobile bottom bar
            <main class="pb-20 md:pb-0">
                <Hero />
                <Features />
                <Products />
                <Testimonials />
            </main>
            <Footer />
        </div>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=seo::PAGE_TITLE />

        <Meta name="description" content=seo::PAGE_DESCRIPTION />
        <Meta name="keywords" content=seo::KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="es_ES" />
        <Meta property="og:site_name" content=seo::SITE_NAME />
        <Meta property="og:url" content=seo::CANONICAL_URL />
        <Meta property="og:title" content=seo::PAGE_TITLE />
        <Meta property="og:description" content=seo::PAGE_DESCRIPTION />
        <Meta property="og:image" content=seo::OG_IMAGE />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=seo::PAGE_TITLE />
        <Meta name="twitter:description" content=seo::PAGE_DESCRIPTION />
        <Meta name="twitter:image" content=seo::OG_IMAGE />

        <Link rel="canonical" href=seo::CANONICAL_URL />

        <script type="application/ld+json" inner_html=seo::structured_data_json()></script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::motion::provide_motion_context;
    use leptos_meta::provide_meta_context;

    fn render() -> String {
        render_with(false)
    }

    fn render_with(reduced: bool) -> String {
        Owner::new().with(|| {
            provide_meta_context();
            provide_motion_context().reduced.set(reduced);
            view! { <LandingPage /> }.to_html()
        })
    }

    /// Every value of `attr="…"` in document order.
    fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!("{attr}=\"");
        html.match_indices(&needle)
            .filter_map(|(at, _)| {
                let rest = &html[at + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    #[test]
    fn test_sections_render_in_page_order() {
        let html = render();
        let order = ["id=\"inicio\"", "id=\"caracteristicas\"", "id=\"productos\"", "id=\"testimonios\"", "id=\"contacto\""];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).expect("section rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_section_ids_are_unique() {
        let html = render();
        for id in ["inicio", "caracteristicas", "productos", "testimonios", "contacto"] {
            assert_eq!(html.matches(&format!("id=\"{id}\"")).count(), 1, "{id}");
        }
    }

    #[test]
    fn test_every_nav_target_is_a_rendered_section() {
        let html = render();
        let hrefs: Vec<&str> = attr_values(&html, "href")
            .into_iter()
            .filter_map(|href| href.strip_prefix('#'))
            .collect();
        let bottom_nav: Vec<&str> = attr_values(&html, "data-bottom-nav")
            .into_iter()
            .filter(|id| *id != "whatsapp")
            .collect();
        assert!(!hrefs.is_empty());
        assert!(!bottom_nav.is_empty());

        for id in hrefs.iter().chain(&bottom_nav) {
            assert_eq!(html.matches(&format!("id=\"{id}\"")).count(), 1, "#{id}");
        }
    }

    #[test]
    fn test_reduced_motion_renders_final_pose() {
        let full = render_with(false);
        let reduced = render_with(true);

        // nothing is pre-hidden for an entrance to reveal
        for style in attr_values(&reduced, "style") {
            assert!(!style.contains("transform"), "{style}");
        }
        assert_eq!(reduced.matches("data-title-line").count(), 3);
        assert!(reduced.contains("data-hero-float"));

        // the Lottie autoplay flag is the only motion-dependent markup
        assert!(full.contains(" autoplay "));
        assert!(!reduced.contains("autoplay"));
        assert_eq!(reduced, full.replace(" autoplay", ""));
    }

    #[test]
    fn test_structured_data_is_inlined() {
        let html = render();
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"@type\":\"Organization\""));
    }
}
