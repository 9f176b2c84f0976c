//! Statistic Card Component
//!
//! Displays one headline number with its subtext.

use leptos::*;

use careercraft_bi::view::{cards, Tone};

/// Statistic card component
#[component]
pub fn StatCard(card: cards::StatCard) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-lg shadow">
            <h3 class="text-sm font-medium text-gray-500">{card.title}</h3>
            <p class="mt-2 text-3xl font-semibold">{card.value}</p>
            <div class=format!("mt-1 text-sm {}", tone_class(card.tone))>{card.subtext}</div>
        </div>
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "text-green-600",
        Tone::Warning => "text-amber-600",
        Tone::Negative => "text-red-600",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes() {
        assert_eq!(tone_class(Tone::Positive), "text-green-600");
        assert_eq!(tone_class(Tone::Warning), "text-amber-600");
        assert_eq!(tone_class(Tone::Negative), "text-red-600");
    }
}
