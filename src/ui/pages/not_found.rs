//! Not found page component
//!
//! Shown for every route other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::common::Logo;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // the server sets the status code through the response options
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página no encontrada - Marquesa Express" />

        <div class="min-h-screen bg-gradient-to-br from-white to-amber-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="mb-8 flex justify-center">
                    <Logo class="h-16 w-auto" />
                </div>

                <h1 class="text-6xl font-bold bg-gradient-to-r from-amber-400 to-red-400 bg-clip-text text-transparent mb-4">
                    "404"
                </h1>

                <h2 class="text-2xl font-semibold text-gray-800 mb-2">"Página no encontrada"</h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "La página que buscas no existe o fue movida."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-xl font-medium text-white bg-gradient-to-r from-amber-500 to-red-500 hover:shadow-lg hover:shadow-amber-500/40 transition-all duration-300"
                >
                    <Icon shape=icons::HOME />
                    "Volver al inicio"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">"© 2025 Marquesa Express"</p>
            </div>
        </div>
    }
}
