// web_app/pages/catalog.rs - Catalog page component
//
// The single page of the application. Owns the in-memory product list,
// simulates the initial catalog fetch and composes the form and the grid.

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;

/// Main catalog page component
///
/// Orchestrates the catalog experience with:
/// - A simulated fetch that seeds the product list after a fixed delay
/// - The registration form, which emits validated records
/// - The product grid with loading and empty states
#[component]
pub fn CatalogPage() -> impl IntoView {
    // Page state: the product list and the mock-load flag. The list is owned
    // here; children only receive read signals or callbacks.
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);

    // Simulated catalog fetch. Effects only run on the client, so the server
    // renders the loading state and the timeout is scheduled once after
    // hydration. Clearing the handle on cleanup guarantees an unmounted page
    // is never touched by a late firing.
    Effect::new(move || {
        let handle = set_timeout_with_handle(
            move || {
                products.set(mock_products());
                loading.set(false);
            },
            Duration::from_millis(MOCK_LOAD_DELAY_MS),
        )
        .ok();

        on_cleanup(move || {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
    });

    // Add-product operation exposed to the form child: assign the next id
    // and append, so insertion order stays display order.
    let on_add = Callback::new(move |new_product: NewProduct| {
        products.update(|items| {
            let id = next_product_id(items);
            items.push(new_product.with_id(id));
        });
    });

    let product_list: Signal<Vec<Product>> = products.into();

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🛒"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Catálogo de Produtos"
                        </h1>
                    </div>
                    <div class="text-sm text-gray-500">
                        "Listagem e cadastro de produtos"
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <ProductForm on_add=on_add />

                // Catalog: loading indicator until the mock fetch resolves,
                // then the grid (which handles its own empty state)
                <section>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                                <Loading message="Carregando produtos..." />
                            </div>
                        }
                    >
                        <ProductGrid products=product_list />
                    </Show>
                </section>
            </main>

            // Footer
            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-5xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Catálogo de Produtos. Construído com Leptos e Actix."</p>
                </div>
            </footer>
        </div>
    }
}
