use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::contact::{CONTACT, CREDIT_URL, SOCIAL_LINKS};
use crate::core::motion::reveal::presets;
use crate::core::navigation::{Anchor, FOOTER_LINKS};
use crate::ui::common::LOGO_SRC;
use crate::ui::dom::{open_mailto, open_whatsapp, scroll_to_anchor};
use crate::ui::icon::{Icon, IconShape, icons};
use crate::ui::motion::{Targets, use_motion_context, use_reveal};

/// Entries of the mobile bottom bar, in display order
const BOTTOM_BAR: [(Anchor, &str, IconShape); 3] = [
    (Anchor::Inicio, "Inicio", icons::HOME),
    (Anchor::Productos, "Productos", icons::PACKAGE),
    (Anchor::Testimonios, "Testimonios", icons::CHAT),
];

/// Desktop footer with contact links, plus the app-style bottom bar shown
/// on small screens.
#[component]
pub fn Footer() -> impl IntoView {
    let motion = use_motion_context();
    let footer_ref = NodeRef::<leptos::html::Footer>::new();

    use_reveal(footer_ref, Targets::Selector("[data-footer-content]"), presets::FOOTER_CONTENT);

    let go = move |ev: MouseEvent, anchor: Anchor| {
        ev.prevent_default();
        scroll_to_anchor(anchor, !motion.is_reduced_untracked());
    };
    let on_email = move |_| open_mailto(&CONTACT.mailto_url());
    let on_whatsapp = move |_| open_whatsapp(&CONTACT.whatsapp_url());

    view! {
        <footer
            node_ref=footer_ref
            id=Anchor::Contacto.id()
            class="hidden md:block relative border-t border-amber-200/50"
            role="contentinfo"
        >
            <div
                class="absolute inset-0 bg-gradient-to-b from-transparent via-amber-400/[0.02] to-transparent"
                aria-hidden="true"
            ></div>

            <div class="relative z-10">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-10">
                    <div data-footer-content="" class="flex flex-col items-center gap-6 sm:gap-8">
                        <a
                            href=Anchor::Inicio.href()
                            class="group focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 rounded-lg"
                            on:click=move |ev| go(ev, Anchor::Inicio)
                            aria-label="Marquesa Express - Volver al inicio"
                        >
                            <img
                                src=LOGO_SRC
                                alt="Marquesa Express"
                                class="h-10 w-auto opacity-90 group-hover:opacity-100 transition-opacity duration-300"
                                loading="lazy"
                            />
                        </a>

                        <nav class="flex flex-wrap items-center justify-center gap-6 sm:gap-8" aria-label="Navegación del pie de página">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    let anchor = link.anchor;
                                    view! {
                                        <a
                                            href=anchor.href()
                                            class="text-sm text-gray-600 hover:text-amber-600 transition-colors duration-300 rounded px-1 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                                            on:click=move |ev| go(ev, anchor)
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>

                        <div class="flex flex-col sm:flex-row items-center gap-4 sm:gap-8">
                            <div class="flex items-center gap-3">
                                <button
                                    class="flex items-center gap-2 px-3 py-1.5 rounded-lg text-xs text-gray-600 hover:text-amber-600 hover:bg-amber-50/50 transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                                    on:click=on_email
                                    aria-label="Enviar email"
                                >
                                    <Icon shape=icons::MAIL class="w-4 h-4" />
                                    <span class="hidden sm:inline">"Email"</span>
                                </button>
                                <button
                                    class="flex items-center gap-2 px-3 py-1.5 rounded-lg text-xs text-gray-600 hover:text-green-600 hover:bg-green-50/50 transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-green-400"
                                    on:click=on_whatsapp
                                    aria-label="Contactar por WhatsApp"
                                >
                                    <Icon shape=icons::WHATSAPP class="w-4 h-4" />
                                    <span class="hidden sm:inline">"WhatsApp"</span>
                                </button>
                            </div>

                            <div class="hidden sm:block w-px h-4 bg-gray-300/50" aria-hidden="true"></div>

                            <div class="flex items-center gap-3">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-8 h-8 rounded-lg flex items-center justify-center text-gray-500 hover:text-amber-600 hover:bg-amber-50/50 transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                                            aria-label=format!("Visitar {}", social.name)
                                        >
                                            <Icon shape=icons::social(social.icon_path) class="w-4 h-4" />
                                        </a>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <p class="text-center text-xs text-gray-500">
                            "© Copyright 2025 Marquesa Express. Diseñado por "
                            <a
                                href=CREDIT_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="underline hover:text-amber-600 transition-colors"
                            >
                                "impulsa360.tech"
                            </a>
                        </p>
                    </div>
                </div>
            </div>
        </footer>

        <nav
            class="md:hidden fixed bottom-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-xl border-t border-amber-200/50"
            aria-label="Navegación móvil"
        >
            <div class="flex items-center justify-around py-2">
                {BOTTOM_BAR
                    .into_iter()
                    .map(|(anchor, label, shape)| view! {
                        <button
                            class="flex flex-col items-center gap-1 px-3 py-2 rounded-lg transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                            on:click=move |ev| go(ev, anchor)
                            aria-label=label
                            data-bottom-nav=anchor.id()
                        >
                            <Icon shape=shape class="w-5 h-5 text-gray-600" />
                            <span class="text-xs text-gray-600">{label}</span>
                        </button>
                    })
                    .collect_view()}

                <button
                    class="flex flex-col items-center gap-1 px-3 py-2 rounded-lg transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-green-400"
                    on:click=on_whatsapp
                    aria-label="Contacto"
                    data-bottom-nav="whatsapp"
                >
                    <div class="relative">
                        <Icon shape=icons::WHATSAPP class="w-5 h-5 text-green-600" />
                        <div class="absolute -top-1 -right-1 w-3 h-3 bg-green-500 rounded-full animate-pulse motion-reduce:animate-none"></div>
                    </div>
                    <span class="text-xs text-green-600">"Contacto"</span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::motion::provide_motion_context;

    fn render() -> String {
        Owner::new().with(|| {
            provide_motion_context();
            view! { <Footer /> }.to_html()
        })
    }

    #[test]
    fn test_footer_is_the_contact_anchor() {
        let html = render();
        assert!(html.contains("id=\"contacto\""));
        assert!(html.contains("data-footer-content"));
    }

    #[test]
    fn test_social_links_open_in_new_tab() {
        let html = render();
        for social in SOCIAL_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", social.href)));
            assert!(html.contains(&format!("Visitar {}", social.name)));
        }
        assert!(html.contains(CREDIT_URL));
    }

    #[test]
    fn test_bottom_bar_order() {
        let html = render();
        let order = ["inicio", "productos", "testimonios", "whatsapp"];
        let positions: Vec<usize> = order
            .iter()
            .map(|id| {
                html.find(&format!("data-bottom-nav=\"{id}\""))
                    .expect("bottom bar entry rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
