// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Carregando...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Inline error message component
///
/// Used by the product form to surface the validation message.
#[component]
pub fn ErrorMessage(
    /// The error message to display
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-3">
            <div class="bg-red-100 p-1.5 rounded-full text-red-600">
                <span class="text-lg font-bold">"⚠"</span>
            </div>
            <p class="text-red-700 text-sm self-center">{message}</p>
        </div>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text input component
///
/// A styled single-line input driven entirely by the given signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            placeholder=placeholder
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Multi-line text input component
///
/// Same contract as [`TextInput`], rendered as a textarea.
#[component]
pub fn TextArea(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Number of visible rows
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm resize-y";

    view! {
        <textarea
            placeholder=placeholder
            rows=rows
            class=class
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        >
            {value.get_untracked()}
        </textarea>
    }
}
