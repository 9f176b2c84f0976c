//! Loading Component

use leptos::*;

/// Centered loading message
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center h-64">{message}</div>
    }
}
