//! Fixed site header
//!
//! Holds the only mutable navigation state on the page: whether the page
//! has scrolled past the threshold, which section was last navigated to and
//! whether the mobile menu is open. While the menu is open the header owns a
//! [`ScrollLock`](crate::core::scroll_lock::ScrollLock) on the body.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::core::contact::{CONTACT, CtaAction};
use crate::core::motion::timeline::HEADER_ENTRANCE;
use crate::core::navigation::{Anchor, HEADER_LINKS, MenuEvent, MenuState, is_scrolled};
use crate::ui::common::Logo;
use crate::ui::dom::{dispatch_cta, scroll_to_anchor};
use crate::ui::motion::{use_entrance, use_motion_context};

fn desktop_link_class(active: bool, scrolled: bool) -> &'static str {
    match (active, scrolled) {
        (true, _) => {
            "relative text-sm lg:text-base font-medium transition-all duration-300 rounded px-2 py-1 text-amber-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
        }
        (false, true) => {
            "relative text-sm lg:text-base font-medium transition-all duration-300 rounded px-2 py-1 text-gray-900 hover:text-amber-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
        }
        (false, false) => {
            "relative text-sm lg:text-base font-medium transition-all duration-300 rounded px-2 py-1 text-gray-800 hover:text-amber-600 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
        }
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "block py-3 px-4 rounded-lg font-medium transition-all duration-300 text-amber-600 bg-amber-100/50 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
    } else {
        "block py-3 px-4 rounded-lg font-medium transition-all duration-300 text-gray-800 hover:text-amber-600 hover:bg-amber-50/50 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 motion-reduce:transition-none bg-white/85 backdrop-blur-xl backdrop-saturate-150 border-b border-amber-400/10 shadow-[0_4px_30px_rgba(245,158,11,0.15)]"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all duration-300 motion-reduce:transition-none bg-transparent border-b border-transparent"
    }
}

/// Track whether the page is scrolled past the header threshold, evaluating
/// at most once per animation frame.
fn use_scrolled() -> ReadSignal<bool> {
    // the server cannot know the offset; the first client frame catches up
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::navigation::FrameThrottle;
        use crate::ui::dom::current_scroll_y;
        use leptos::ev::scroll;

        Effect::new(move |_| {
            let now = is_scrolled(current_scroll_y());
            if now != scrolled.get_untracked() {
                set_scrolled.set(now);
            }
        });

        let throttle = StoredValue::new(FrameThrottle::default());
        let handle = window_event_listener(scroll, move |_| {
            if !throttle.try_update_value(|t| t.try_schedule()).unwrap_or(false) {
                return;
            }
            request_animation_frame(move || {
                let now = is_scrolled(current_scroll_y());
                if now != scrolled.get_untracked() {
                    set_scrolled.set(now);
                }
                throttle.update_value(|t| t.frame_done());
            });
        });

        on_cleanup(move || drop(handle));
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    scrolled
}

/// Hold a body scroll lock for as long as the menu is open.
fn use_menu_scroll_lock(menu: RwSignal<MenuState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::scroll_lock::ScrollLock;
        use crate::ui::dom::BodyStyle;

        Effect::new(move |_| {
            if !menu.get().locks_scroll() {
                return;
            }
            let Some(body) = BodyStyle::get() else {
                return;
            };
            let lock = StoredValue::new_local(Some(ScrollLock::acquire(body)));
            on_cleanup(move || {
                // dropping the guard restores the previous overflow value
                let _ = lock.try_update_value(Option::take);
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = menu;
}

#[component]
pub fn Header() -> impl IntoView {
    let motion = use_motion_context();
    let header_ref = NodeRef::<leptos::html::Header>::new();

    let scrolled = use_scrolled();
    let active = RwSignal::new(Anchor::Inicio);
    let menu = RwSignal::new(MenuState::Closed);

    use_menu_scroll_lock(menu);
    use_entrance(header_ref, HEADER_ENTRANCE);

    let send = move |event: MenuEvent| menu.update(|state| *state = state.next(event));

    // missing sections leave the header state untouched
    let navigate = move |ev: MouseEvent, anchor: Anchor| {
        ev.prevent_default();
        if scroll_to_anchor(anchor, !motion.is_reduced_untracked()) {
            active.set(anchor);
            send(MenuEvent::LinkActivated);
        }
    };

    let open = move || menu.get().is_open();
    let menu_tabindex = move || if open() { "0" } else { "-1" };

    view! {
        <div
            class=move || {
                if open() {
                    "fixed inset-0 bg-amber-900/60 backdrop-blur-sm z-40 md:hidden transition-opacity duration-300 motion-reduce:transition-none pointer-events-auto"
                } else {
                    "fixed inset-0 bg-amber-900/60 backdrop-blur-sm z-40 md:hidden transition-opacity duration-300 motion-reduce:transition-none pointer-events-none"
                }
            }
            style=move || format!("opacity: {}", menu.get().overlay_opacity())
            on:click=move |_| send(MenuEvent::OverlayClicked)
            aria-hidden="true"
            data-menu-overlay=""
        ></div>

        <header node_ref=header_ref class=move || header_class(scrolled.get()) role="banner">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <nav class="flex items-center justify-between py-4 sm:py-6" aria-label="Navegación principal">
                    <a
                        href=Anchor::Inicio.href()
                        data-header-logo=""
                        class="flex items-center space-x-3 group focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 rounded-lg"
                        on:click=move |ev| navigate(ev, Anchor::Inicio)
                        aria-label="Marquesa Express - Inicio"
                    >
                        <Logo eager=true />
                    </a>

                    <div data-header-nav="" class="hidden md:flex items-center space-x-6 lg:space-x-8" role="menubar">
                        {HEADER_LINKS
                            .iter()
                            .map(|link| {
                                let anchor = link.anchor;
                                let is_active = move || active.get() == anchor;
                                view! {
                                    <a
                                        href=anchor.href()
                                        role="menuitem"
                                        class=move || desktop_link_class(is_active(), scrolled.get())
                                        aria-current=move || is_active().then_some("page")
                                        on:click=move |ev| navigate(ev, anchor)
                                    >
                                        {link.label}
                                        <span
                                            class=move || {
                                                if is_active() {
                                                    "absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-amber-400 to-red-400 transition-all duration-300 w-full"
                                                } else {
                                                    "absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-amber-400 to-red-400 transition-all duration-300 w-0"
                                                }
                                            }
                                            aria-hidden="true"
                                        ></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div data-header-cta="" class="hidden md:block">
                        <a
                            href=CONTACT.whatsapp_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="relative px-6 py-2.5 rounded-xl font-medium text-white overflow-hidden bg-gradient-to-r from-amber-500 to-red-500
                                   hover:shadow-lg hover:shadow-amber-500/50 hover:scale-105 active:scale-95 transition-all duration-300 group
                                   focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 focus-visible:ring-offset-2 focus-visible:ring-offset-white"
                            aria-label=format!("WhatsApp {}", CONTACT.whatsapp_number)
                        >
                            <span class="relative z-10">"Contactanos"</span>
                            <div
                                class="absolute inset-0 bg-gradient-to-r from-amber-600 to-red-600 opacity-0 group-hover:opacity-100 transition-opacity duration-300"
                                aria-hidden="true"
                            ></div>
                        </a>
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg relative z-50 hover:bg-white/10 transition-colors duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                        on:click=move |_| send(MenuEvent::Toggle)
                        aria-label=move || menu.get().toggle_label()
                        aria-expanded=move || open().to_string()
                        aria-controls="mobile-menu"
                    >
                        <div class="w-6 h-6 flex flex-col justify-center items-center gap-1.5">
                            <span class=move || {
                                if open() {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full rotate-45 translate-y-2"
                                } else {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full"
                                }
                            }></span>
                            <span class=move || {
                                if open() {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full opacity-0"
                                } else {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full"
                                }
                            }></span>
                            <span class=move || {
                                if open() {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full -rotate-45 -translate-y-2"
                                } else {
                                    "block w-6 h-0.5 bg-gray-800 transition-all duration-300 rounded-full"
                                }
                            }></span>
                        </div>
                    </button>
                </nav>

                <div
                    id="mobile-menu"
                    class=move || {
                        if open() {
                            "md:hidden overflow-hidden transition-all duration-500 ease-out motion-reduce:transition-none max-h-96 opacity-100"
                        } else {
                            "md:hidden overflow-hidden transition-all duration-500 ease-out motion-reduce:transition-none max-h-0 opacity-0"
                        }
                    }
                    role="menu"
                    aria-hidden=move || (!open()).to_string()
                >
                    <div class="py-6 space-y-1 bg-white/90 backdrop-blur-xl rounded-2xl px-4 mb-4 border border-amber-200/50">
                        {HEADER_LINKS
                            .iter()
                            .map(|link| {
                                let anchor = link.anchor;
                                view! {
                                    <a
                                        href=anchor.href()
                                        role="menuitem"
                                        class=move || mobile_link_class(active.get() == anchor)
                                        tabindex=menu_tabindex
                                        on:click=move |ev| navigate(ev, anchor)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="w-full mt-4 px-6 py-3 rounded-xl font-medium text-white bg-gradient-to-r from-amber-500 to-red-500
                                   hover:shadow-lg hover:shadow-amber-500/50 active:scale-95 transition-all duration-300
                                   focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400"
                            tabindex=menu_tabindex
                            on:click=move |_| dispatch_cta(CtaAction::GetStarted)
                        >
                            "Comenzar Ahora"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_class_wins_over_scroll_state() {
        assert_eq!(desktop_link_class(true, true), desktop_link_class(true, false));
        assert!(desktop_link_class(true, false).contains("text-amber-600"));
        assert!(desktop_link_class(false, true).contains("text-gray-900"));
    }

    #[test]
    fn test_header_class_follows_scroll_state() {
        assert!(header_class(true).contains("bg-white/85"));
        assert!(header_class(false).contains("bg-transparent"));
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::super::*;
        use crate::ui::motion::provide_motion_context;

        fn render() -> String {
            Owner::new().with(|| {
                provide_motion_context();
                view! { <Header /> }.to_html()
            })
        }

        #[test]
        fn test_links_render_for_desktop_and_mobile() {
            let html = render();
            for link in HEADER_LINKS {
                assert_eq!(
                    html.matches(&format!("href=\"{}\"", link.anchor.href())).count(),
                    // the logo also links to #inicio
                    if link.anchor == Anchor::Inicio { 3 } else { 2 },
                );
            }
        }

        #[test]
        fn test_menu_starts_closed() {
            let html = render();
            assert!(html.contains("aria-expanded=\"false\""));
            assert!(html.contains("aria-label=\"Abrir menú\""));
            assert!(html.contains("max-h-0"));
            assert!(html.contains("opacity: 0"));
        }

        #[test]
        fn test_menu_toggle_draws_bars() {
            let html = render();
            let start = html.find("aria-controls=\"mobile-menu\"").expect("toggle rendered");
            let button = &html[start..start + html[start..].find("</button>").expect("button closed")];
            assert_eq!(button.matches("<span class=\"block w-6 h-0.5").count(), 3);
            assert!(!button.contains("<svg"));
        }

        #[test]
        fn test_first_render_is_transparent() {
            let html = render();
            assert!(html.contains(header_class(false)));
            assert!(!html.contains("bg-white/85"));
        }

        #[test]
        fn test_inicio_is_current_on_first_render() {
            let html = render();
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        }
    }
}
