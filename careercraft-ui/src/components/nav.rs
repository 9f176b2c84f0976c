//! Navigation Component
//!
//! Sidebar with the brand and one link per navigation table entry.

use leptos::*;
use leptos_router::*;

use careercraft_bi::routes::{Route, BRAND, ROUTES};

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="w-64 bg-indigo-800 text-white">
            <div class="p-4">
                <h1 class="text-xl font-bold">{BRAND}</h1>
            </div>

            <nav class="mt-8">
                <ul>
                    {ROUTES.iter().map(|route| view! { <NavLink route=route /> }).collect_view()}
                </ul>
            </nav>
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(route: &'static Route) -> impl IntoView {
    view! {
        <li class="mb-2">
            <A
                href=route.path
                exact=true
                class="flex items-center px-4 py-3 hover:bg-indigo-700 transition-colors duration-200"
                active_class="bg-indigo-700"
            >
                <span class="w-5 h-5 mr-3">{route.icon.glyph()}</span>
                <span>{route.label}</span>
            </A>
        </li>
    }
}
