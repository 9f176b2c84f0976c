//! Dashboard Page
//!
//! Reads the snapshot once per mount and shows loading, error, or the full
//! dashboard. Unmounting aborts the read and drops its result.

use leptos::*;

use careercraft_bi::view::DashboardView;
use careercraft_bi::{DashboardLoader, LoadState, Screen, ViewLifetime};

use crate::api::BrowserSource;
use crate::components::{ChartCard, Loading, RecommendationsPanel, StatCard};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(LoadState::Loading);
    let lifetime = ViewLifetime::new();
    let controller = web_sys::AbortController::new().ok();

    let source = BrowserSource::snapshot().abort_on(controller.as_ref().map(|c| c.signal()));
    let pending = lifetime.clone();
    spawn_local(async move {
        let Some(settled) = DashboardLoader::new().load(&source, &pending).await else {
            return;
        };

        match &settled {
            LoadState::Error(failure) => {
                web_sys::console::error_1(
                    &format!("Error fetching dashboard data: {}", failure).into(),
                );
            }
            LoadState::Ready(loaded) => {
                for warning in &loaded.warnings {
                    web_sys::console::warn_1(&warning.to_string().into());
                }
            }
            LoadState::Loading => {}
        }

        state.set(settled);
    });

    on_cleanup(move || {
        lifetime.cancel();
        if let Some(controller) = controller {
            controller.abort();
        }
    });

    let screen = create_memo(move |_| state.with(Screen::from_state));

    move || match screen.get() {
        Screen::Loading { message } => view! { <Loading message=message /> }.into_view(),
        Screen::Error { message } => {
            view! { <div class="text-red-500">{message}</div> }.into_view()
        }
        Screen::Ready(dashboard) => view! { <DashboardBody dashboard=*dashboard /> }.into_view(),
    }
}

#[component]
fn DashboardBody(dashboard: DashboardView) -> impl IntoView {
    let DashboardView { heading, intro, cards, charts, recommendations } = dashboard;

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-gray-800">{heading}</h2>
                <p class="text-gray-600">{intro}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {cards.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {charts.into_iter().map(|panel| view! { <ChartCard panel=panel /> }).collect_view()}
            </div>

            <RecommendationsPanel recommendations=recommendations />
        </div>
    }
}
