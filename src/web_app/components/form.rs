// web_app/components/form.rs - Controlled product registration form
//
// Holds the uncommitted field values locally and only emits a validated,
// normalized record to the parent. Submission is synchronous; there is no
// async behavior here.

use crate::web_app::model::{NewProduct, ProductDraft, ValidationError};
use leptos::prelude::*;

use super::common::{Button, ErrorMessage, TextArea, TextInput};

/// Controlled form for registering a new product
///
/// On submit the raw fields are validated through [`ProductDraft::validate`].
/// Failure surfaces a single inline message and leaves the catalog untouched;
/// success emits the normalized record via `on_add` and resets every field.
#[component]
pub fn ProductForm(
    /// Receives the validated record; the parent assigns the id
    on_add: Callback<NewProduct>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ValidationError>);

    let reset = move || {
        name.set(String::new());
        price.set(String::new());
        description.set(String::new());
        image.set(String::new());
        error.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ProductDraft {
            name: name.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
            image: image.get_untracked(),
        };

        match draft.validate() {
            Ok(new_product) => {
                on_add.run(new_product);
                reset();
            }
            Err(validation_error) => error.set(Some(validation_error)),
        }
    };

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100 space-y-4">
            <h2 class="text-xl font-bold text-gray-900">"Adicionar Produto"</h2>

            // Validation message, if any
            {move || {
                error
                    .get()
                    .map(|validation_error| view! { <ErrorMessage message=validation_error.to_string() /> })
            }}

            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Nome*"</span>
                <div class="mt-1">
                    <TextInput value=name />
                </div>
            </label>

            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Preço* (ex: 29.9)"</span>
                <div class="mt-1">
                    <TextInput value=price />
                </div>
            </label>

            <label class="block">
                <span class="text-sm font-medium text-gray-700">"Descrição*"</span>
                <div class="mt-1">
                    <TextArea value=description />
                </div>
            </label>

            <label class="block">
                <span class="text-sm font-medium text-gray-700">"URL da imagem (opcional)"</span>
                <div class="mt-1">
                    <TextInput
                        value=image
                        placeholder="Cole uma URL ou deixe em branco para usar o placeholder"
                    />
                </div>
            </label>

            <Button button_type="submit">"Adicionar"</Button>
        </form>
    }
}
