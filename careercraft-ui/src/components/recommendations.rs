//! Insights and Recommendations Component

use leptos::*;

use careercraft_bi::view::insights::{
    Recommendations, IMPROVEMENTS_TITLE, PANEL_TITLE, STRATEGIES_TITLE,
};

#[component]
pub fn RecommendationsPanel(recommendations: Recommendations) -> impl IntoView {
    let Recommendations { improvements, strategies } = recommendations;

    view! {
        <div class="bg-white p-6 rounded-lg shadow">
            <h3 class="text-lg font-medium mb-4">{PANEL_TITLE}</h3>
            <div class="space-y-4">
                <div class="p-4 bg-blue-50 rounded-md">
                    <h4 class="font-medium text-blue-800">{IMPROVEMENTS_TITLE}</h4>
                    <ul class="mt-2 space-y-1 list-disc pl-5">
                        {improvements.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="p-4 bg-green-50 rounded-md">
                    <h4 class="font-medium text-green-800">{STRATEGIES_TITLE}</h4>
                    <ul class="mt-2 space-y-1 list-disc pl-5">
                        {strategies.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
