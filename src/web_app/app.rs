// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags and mounts the catalog page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with the single catalog route
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        // HTML meta tags
        <Title text="Catálogo de Produtos" />
        <Meta name="description" content="Catálogo de produtos com listagem dinâmica e cadastro via formulário controlado" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link
        <Stylesheet id="leptos" href="/pkg/catalogo_produtos.css" />

        // Router setup (single screen, plus a fallback)
        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Página não encontrada"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Voltar ao catálogo"
                </a>
            </div>
        </div>
    }
}
