//! Placeholder Page
//!
//! Inert page for sections without content. It never reads the snapshot.

use leptos::*;

#[component]
pub fn Placeholder(label: &'static str) -> impl IntoView {
    view! { <div>{label}</div> }
}
