use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::provide_motion_context;

/// Web component that renders the hero's Lottie animation
const LOTTIE_PLAYER_SCRIPT: &str = "https://unpkg.com/@lottiefiles/lottie-player@2.0.8/dist/lottie-player.js";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#f59e0b"/>
                <link rel="icon" type="image/png" href="/img/LOGO FINAL MARQUESA EXPRESS.png"/>
                <script src=LOTTIE_PLAYER_SCRIPT defer></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased text-gray-800">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Shared by every animated component; gates all motion on the user's preference
    provide_motion_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/marquesa-express.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
