use leptos::prelude::*;

use crate::core::contact::CtaAction;
use crate::core::content::HERO_BADGES;
use crate::core::motion::idle::{self, VISIBILITY_THRESHOLD};
use crate::core::motion::timeline::HERO_ENTRANCE;
use crate::core::navigation::Anchor;
use crate::ui::dom::{dispatch_cta, scroll_to_anchor};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Targets, use_entrance, use_idle_loop, use_motion_context, use_visibility};

pub const LOTTIE_SRC: &str = "/lottie/pasteleria.json";

/// Position, size and tint of each background particle
const PARTICLES: [&str; 6] = [
    "top-20 left-20 w-3 h-3 bg-amber-500/60",
    "top-40 right-32 w-4 h-4 bg-red-500/60",
    "bottom-32 left-1/4 w-2 h-2 bg-amber-500/70",
    "bottom-20 right-20 w-3 h-3 bg-red-500/60",
    "top-1/2 left-10 w-2 h-2 bg-amber-500/80",
    "top-1/3 right-10 w-3 h-3 bg-red-500/70",
];

const HERO_BACKGROUND: &str = "background: \
    radial-gradient(circle at 20% 80%, rgba(251, 191, 36, 0.15) 0%, transparent 50%), \
    radial-gradient(circle at 80% 20%, rgba(239, 68, 68, 0.15) 0%, transparent 50%), \
    linear-gradient(135deg, #ffffff 0%, #fef3c7 100%)";

/// `autoplay` is left off under reduced motion so the player never starts
/// before hydration can pause it.
fn lottie_markup(autoplay: bool) -> String {
    let autoplay = if autoplay { " autoplay" } else { "" };
    format!(
        r#"<lottie-player src="{LOTTIE_SRC}" background="transparent" speed="1" loop{autoplay} class="w-full h-full" aria-label="Animación de cocina y pastelería"></lottie-player>"#
    )
}

#[component]
fn LottieCard() -> impl IntoView {
    let autoplay = !use_motion_context().is_reduced_untracked();

    view! {
        // entrance moves the outer box, the float loop the inner one
        <div data-hero-animation="" class="relative w-full max-w-md mx-auto flex items-center justify-center">
            <div
                data-hero-float=""
                class="relative rounded-3xl p-8 sm:p-10 bg-white/80 backdrop-blur-xl border border-amber-200/50 shadow-2xl shadow-amber-500/20 overflow-hidden"
            >
                <div data-lottie-host="" class="relative w-80 h-80 mx-auto" inner_html=lottie_markup(autoplay)></div>

                <div
                    class="absolute -top-8 -right-8 w-24 h-24 bg-amber-300/30 rounded-full blur-2xl pointer-events-none animate-pulse motion-reduce:animate-none"
                    aria-hidden="true"
                ></div>
                <div
                    class="absolute -bottom-8 -left-8 w-32 h-32 bg-red-300/30 rounded-full blur-2xl pointer-events-none animate-pulse [animation-delay:1s] motion-reduce:animate-none"
                    aria-hidden="true"
                ></div>
            </div>
        </div>
    }
}

/// Landing hero: headline, calls to action, badges and the Lottie card.
///
/// Runs the entrance timeline once mounted. The float and particle loops
/// (and the Lottie playback) only run while at least 10% of the hero is on
/// screen.
#[component]
pub fn Hero() -> impl IntoView {
    let motion = use_motion_context();
    let section_ref = NodeRef::<leptos::html::Section>::new();

    let visible = use_visibility(section_ref, VISIBILITY_THRESHOLD);
    let active = Signal::derive(move || visible.get());

    use_entrance(section_ref, HERO_ENTRANCE);
    use_idle_loop(section_ref, Targets::Selector("[data-hero-float]"), idle::HERO_FLOAT, active);
    use_idle_loop(section_ref, Targets::Selector("[data-particle-spin]"), idle::PARTICLE_SPIN, active);

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::dom::call_method;

        Effect::new(move |_| {
            let play = idle::should_idle(visible.get(), motion.is_reduced());
            let Some(section) = section_ref.get() else {
                return;
            };
            if let Ok(Some(player)) = section.query_selector("lottie-player") {
                let _ = if play {
                    player.set_attribute("autoplay", "")
                } else {
                    player.remove_attribute("autoplay")
                };
                call_method(&player, if play { "play" } else { "pause" });
            }
        });
    }

    let on_explore = move |_| {
        scroll_to_anchor(Anchor::Productos, !motion.is_reduced_untracked());
    };

    view! {
        <section
            node_ref=section_ref
            id=Anchor::Inicio.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-24 pb-12 sm:pt-32 sm:pb-20"
            aria-labelledby="hero-heading"
            style=HERO_BACKGROUND
        >
            <div class="absolute inset-0 pointer-events-none opacity-60" aria-hidden="true">
                {PARTICLES
                    .iter()
                    .map(|placement| view! {
                        <div data-particle="" class=format!("absolute {placement} rounded-full blur-sm")>
                            <div data-particle-spin="" class="w-full h-full rounded-full bg-inherit"></div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="container max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div class="space-y-8 sm:space-y-10">
                        <header class="space-y-6">
                            <h1 id="hero-heading" class="text-5xl sm:text-6xl lg:text-7xl font-bold leading-tight">
                                <span data-title-line="" class="block text-gray-800">"Convierte tu"</span>
                                <span data-title-line="" class="block text-gray-800">"pasión en un"</span>
                                <span
                                    data-title-line=""
                                    class="block bg-gradient-to-r from-amber-400 to-red-400 bg-clip-text text-transparent"
                                >
                                    "negocio exitoso"
                                </span>
                            </h1>

                            <p data-hero-subtitle="" class="text-lg sm:text-xl text-gray-600 leading-relaxed max-w-xl">
                                "Plataforma líder en infoproductos digitales de panadería y pastelería. Recetas probadas y rentables para que aprendas rápido y emprendas."
                            </p>
                        </header>

                        <div class="space-y-6 sm:space-y-8">
                            <div data-hero-buttons="" class="flex flex-col sm:flex-row gap-4">
                                <button
                                    class="group inline-flex items-center justify-center px-8 py-4 rounded-xl font-semibold text-white
                                           bg-gradient-to-r from-amber-500 to-red-500 hover:shadow-xl hover:shadow-amber-500/40
                                           active:scale-95 transition-all duration-300
                                           focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 focus-visible:ring-offset-2"
                                    on:click=on_explore
                                >
                                    "Explorar Productos"
                                    <Icon shape=icons::ARROW_RIGHT class="w-5 h-5 ml-2 group-hover:translate-x-1 transition-transform duration-300" />
                                </button>
                                <button
                                    class="inline-flex items-center justify-center px-8 py-4 rounded-xl font-semibold text-gray-800
                                           bg-white/80 border-2 border-amber-200/70 hover:border-amber-400 hover:bg-amber-50
                                           transition-all duration-300
                                           focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-400 focus-visible:ring-offset-2"
                                    on:click=move |_| dispatch_cta(CtaAction::Demo)
                                >
                                    "Ver Demo"
                                </button>
                            </div>

                            <div
                                data-hero-badges=""
                                class="flex flex-wrap items-center gap-6"
                                role="list"
                                aria-label="Características principales"
                            >
                                {HERO_BADGES
                                    .iter()
                                    .map(|badge| view! {
                                        <div role="listitem" data-badge=badge.id>
                                            <div class="flex items-center gap-2 group">
                                                <div
                                                    class="w-6 h-6 rounded-full flex items-center justify-center bg-gradient-to-br from-amber-400 to-red-400
                                                           text-black group-hover:scale-110 group-hover:rotate-12 transition-all duration-300 shadow-lg shadow-amber-500/25"
                                                    aria-hidden="true"
                                                >
                                                    <Icon shape=icons::CHECK class="w-3 h-3" />
                                                </div>
                                                <span class="text-sm text-gray-600 group-hover:text-gray-800 transition-colors">
                                                    {badge.text}
                                                </span>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="relative lg:block hidden">
                        <LottieCard />
                    </div>
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
            view! { <Hero /> }.to_html()
        })
    }

    #[test]
    fn test_entrance_targets_are_present() {
        let html = render();
        assert_eq!(html.matches("data-title-line").count(), 3);
        assert!(html.contains("data-hero-subtitle"));
        assert!(html.contains("data-hero-buttons"));
        assert!(html.contains("data-hero-animation"));
        assert_eq!(html.matches("data-particle=").count(), PARTICLES.len());
        assert_eq!(html.matches("data-particle-spin").count(), PARTICLES.len());
    }

    #[test]
    fn test_badges_in_declared_order() {
        let html = render();
        let positions: Vec<usize> = HERO_BADGES
            .iter()
            .map(|b| {
                html.find(&format!("data-badge=\"{}\"", b.id))
                    .expect("badge rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lottie_player_markup() {
        let html = render();
        assert!(html.contains("<lottie-player"));
        assert!(html.contains(LOTTIE_SRC));
        assert!(html.contains("id=\"inicio\""));
    }

    #[test]
    fn test_lottie_autoplay_follows_motion_preference() {
        assert!(lottie_markup(true).contains(" loop autoplay "));
        assert!(!lottie_markup(false).contains("autoplay"));

        let html = Owner::new().with(|| {
            provide_motion_context().reduced.set(true);
            view! { <Hero /> }.to_html()
        });
        assert!(html.contains("<lottie-player"));
        assert!(!html.contains("autoplay"));
    }
}
