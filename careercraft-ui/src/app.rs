//! App Root Component
//!
//! Shell layout and routing. Every path goes through one catch-all route;
//! the navigation table decides what the main region mounts.

use leptos::*;
use leptos_router::*;

use careercraft_bi::routes::{self, HEADER_TITLE};

use crate::components::Sidebar;
use crate::pages::{Dashboard, Placeholder};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                <Sidebar />

                <div class="flex-1 overflow-auto">
                    <Header />

                    <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                        <Routes>
                            <Route path="/*any" view=MainRegion />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto py-4 px-4 sm:px-6 lg:px-8">
                <h1 class="text-2xl font-semibold text-gray-900">{HEADER_TITLE}</h1>
            </div>
        </header>
    }
}

/// Swaps the main region when the resolved route changes
///
/// Unknown paths render nothing. Staying on the same path keeps the mounted
/// view, so the dashboard is only remounted by navigating away and back.
#[component]
fn MainRegion() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| routes::resolve(&location.pathname.get()));

    move || match route.get() {
        Some(route) if route.fetches_snapshot() => view! { <Dashboard /> }.into_view(),
        Some(route) => view! { <Placeholder label=route.label /> }.into_view(),
        None => ().into_view(),
    }
}
