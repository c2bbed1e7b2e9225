// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card for one catalog entry
// - ProductGrid: Grid layout with empty state for the whole catalog

use crate::web_app::model::{Product, PLACEHOLDER_IMAGE};
use leptos::prelude::*;

/// Product card for the catalog grid
///
/// Pure presentational component: everything shown derives from the given
/// record, so rendering the same product twice yields the same card.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    // Format price with the BRL currency prefix
    let price_display = format!("R$ {:.2}", product.price);

    // Fall back to the bundled placeholder when the record carries no image
    let image_src = if product.image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        product.image.clone()
    };

    view! {
        <article class="bg-white rounded-xl shadow-sm hover:shadow-xl \
                        transition-all duration-300 border border-gray-100 \
                        flex flex-col h-full overflow-hidden">
            <img
                src=image_src
                alt=product.name.clone()
                class="h-40 w-full object-cover bg-gray-100"
            />

            <div class="p-5 flex flex-col flex-1">
                <h3 class="font-bold text-gray-900 mb-2 text-lg">
                    {product.name.clone()}
                </h3>

                <span class="text-lg font-bold text-blue-600 mb-2">
                    {price_display}
                </span>

                <p class="text-gray-600 text-sm flex-1">
                    {product.description.clone()}
                </p>
            </div>
        </article>
    }
}

/// Catalog grid component
///
/// Displays a grid of ProductCards with a count header and empty state.
#[component]
pub fn ProductGrid(
    /// Products to display, in insertion order
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            // Count header
            <div class="flex justify-between items-center mb-6">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = products.get().len();
                        if count == 1 {
                            "1 produto cadastrado".to_string()
                        } else {
                            format!("{} produtos cadastrados", count)
                        }
                    }}
                </span>
            </div>

            // Grid or empty state
            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"📦"</div>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Sem produtos cadastrados."
                        </p>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product| {
                            view! { <ProductCard product=product /> }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
