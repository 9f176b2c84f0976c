//! Insights and recommendations panel

use serde::Serialize;

use super::format;
use crate::snapshot::DashboardSnapshot;

pub const PANEL_TITLE: &str = "Insights e Recomendações";
pub const IMPROVEMENTS_TITLE: &str = "Oportunidades de Melhoria";
pub const STRATEGIES_TITLE: &str = "Estratégias Recomendadas";

const STRATEGIES: [&str; 4] = [
    "Focar conteúdo em soluções para as principais dores: currículo, entrevista e visto",
    "Implementar mensagens automáticas de boas-vindas para todas as novas conversas",
    "Criar campanhas específicas para reengajamento de leads não respondidos",
    "Estabelecer fluxos de trabalho para qualificação e conversão de leads",
];

/// Narrative bullets; only the improvements interpolate snapshot values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub improvements: Vec<String>,
    pub strategies: Vec<&'static str>,
}

pub fn recommendations(snapshot: &DashboardSnapshot) -> Recommendations {
    let stats = &snapshot.stats;

    Recommendations {
        improvements: vec![
            format!(
                "Reduzir o tempo médio de resposta de {} para menos de 24h",
                format::hours(stats.avg_response_time)
            ),
            format!(
                "Responder às {} conversas pendentes para aumentar engajamento",
                stats.unanswered_count
            ),
            format!(
                "Aumentar o uso de stories, que têm a maior taxa de conversão ({})",
                format::percent(snapshot.story_rate())
            ),
        ],
        strategies: STRATEGIES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures::sample_snapshot;

    #[test]
    fn test_improvements_interpolate_stats() {
        let recs = recommendations(&sample_snapshot());
        assert_eq!(
            recs.improvements,
            vec![
                "Reduzir o tempo médio de resposta de 18.4h para menos de 24h",
                "Responder às 15 conversas pendentes para aumentar engajamento",
                "Aumentar o uso de stories, que têm a maior taxa de conversão (42%)",
            ]
        );
        assert_eq!(recs.strategies.len(), 4);
    }

    #[test]
    fn test_missing_story_renders_zero() {
        let mut snapshot = sample_snapshot();
        snapshot.effectiveness_data.clear();

        let recs = recommendations(&snapshot);
        assert!(recs.improvements[2].ends_with("(0%)"));
    }
}
