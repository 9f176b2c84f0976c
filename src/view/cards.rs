//! Statistic cards
//!
//! Direct projections of `stats`; nothing is aggregated here.

use serde::Serialize;

use super::format;
use crate::snapshot::Stats;

/// Colour of a card's subtext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Warning,
    Negative,
}

/// One headline number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: String,
    pub tone: Tone,
}

/// The four cards, in display order
pub fn stat_cards(stats: &Stats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total de Conversas",
            value: stats.total_conversations.to_string(),
            subtext: "Leads potenciais".to_string(),
            tone: Tone::Positive,
        },
        StatCard {
            title: "Taxa de Conversão",
            value: format::percent(stats.conversion_rate),
            subtext: format!("{} conversões", stats.total_conversions),
            tone: Tone::Positive,
        },
        StatCard {
            title: "Tempo Médio de Resposta",
            value: format::hours(stats.avg_response_time),
            subtext: "Oportunidade de melhoria".to_string(),
            tone: Tone::Warning,
        },
        StatCard {
            title: "Conversas Não Respondidas",
            value: format::percent(stats.unanswered_rate),
            subtext: format!("{} conversas", stats.unanswered_count),
            tone: Tone::Negative,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::sample_snapshot;

    #[test]
    fn test_cards_project_stats() {
        let cards = stat_cards(&sample_snapshot().stats);
        let shown: Vec<_> = cards
            .iter()
            .map(|c| (c.title, c.value.as_str(), c.subtext.as_str()))
            .collect();

        assert_eq!(
            shown,
            vec![
                ("Total de Conversas", "120", "Leads potenciais"),
                ("Taxa de Conversão", "25%", "30 conversões"),
                ("Tempo Médio de Resposta", "18.4h", "Oportunidade de melhoria"),
                ("Conversas Não Respondidas", "12.5%", "15 conversas"),
            ]
        );
    }

    #[test]
    fn test_rates_are_not_recomputed() {
        let mut stats = sample_snapshot().stats;
        stats.conversion_rate = 99.0;
        let cards = stat_cards(&stats);
        assert_eq!(cards[1].value, "99%");
        assert_eq!(cards[1].subtext, "30 conversões");
    }
}
