//! The two remote text-generation operations.
//!
//! Both are single-shot: no caching, no retry, no timeout beyond whatever
//! the transport applies. Remote failures collapse into one generic typed
//! failure per operation; callers never see error subtypes.

use thiserror::Error;

use crate::client::{LlmError, TextGenerator};
use crate::prompts::{self, StockLine};

/// Returned when the service answers with an empty description body.
pub const DESCRIPTION_PLACEHOLDER: &str = "Description non disponible.";

/// Returned when the service answers with an empty report body.
pub const ANALYSIS_PLACEHOLDER: &str = "Analyse non disponible.";

/// Generic failure of the description operation.
#[derive(Debug, Error)]
#[error("Impossible de générer la description. Vérifiez votre clé API.")]
pub struct GenerationError(#[source] LlmError);

/// Generic failure of the stock-analysis operation.
#[derive(Debug, Error)]
#[error("Impossible d'analyser le stock. Vérifiez votre clé API.")]
pub struct AnalysisError(#[source] LlmError);

/// Request a short promotional description for a product.
///
/// Precondition: `name` and `category` are non-empty. The boundary
/// validates presence before invoking; it is not re-checked here.
pub async fn generate_product_description(
    generator: &dyn TextGenerator,
    name: &str,
    category: &str,
) -> Result<String, GenerationError> {
    let prompt = prompts::product_description(name, category);

    let text = generator.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "description generation failed");
        GenerationError(e)
    })?;

    if text.trim().is_empty() {
        Ok(DESCRIPTION_PLACEHOLDER.to_string())
    } else {
        Ok(text)
    }
}

/// Request a Markdown stock-health report over the given snapshot.
///
/// The snapshot may be empty; the prompt is still well-formed. The report is
/// returned verbatim, with no partial-result recovery on failure.
pub async fn analyze_stock_health(
    generator: &dyn TextGenerator,
    lines: &[StockLine],
) -> Result<String, AnalysisError> {
    let summary = prompts::stock_summary(lines);
    let prompt = prompts::stock_health(&summary);

    let text = generator.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "stock analysis failed");
        AnalysisError(e)
    })?;

    if text.trim().is_empty() {
        Ok(ANALYSIS_PLACEHOLDER.to_string())
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted stand-in for the remote service: records prompts and replays
    /// a fixed outcome.
    struct ScriptedGenerator {
        prompts: Mutex<Vec<String>>,
        outcome: fn() -> Result<String, LlmError>,
    }

    impl ScriptedGenerator {
        fn replying(outcome: fn() -> Result<String, LlmError>) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                outcome,
            }
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.outcome)()
        }
    }

    fn line(name: &str, quantity: u32, min_stock: u32, price: f64) -> StockLine {
        StockLine {
            name: name.to_string(),
            quantity,
            min_stock,
            price,
        }
    }

    #[tokio::test]
    async fn description_returns_response_verbatim() {
        let generator =
            ScriptedGenerator::replying(|| Ok("Un casque au son limpide.".to_string()));

        let text = generate_product_description(&generator, "Casque Audio", "Électronique")
            .await
            .unwrap();

        assert_eq!(text, "Un casque au son limpide.");
        assert!(generator.last_prompt().contains("\"Casque Audio\""));
    }

    #[tokio::test]
    async fn empty_description_body_maps_to_placeholder() {
        let generator = ScriptedGenerator::replying(|| Ok("  \n".to_string()));

        let text = generate_product_description(&generator, "Casque Audio", "Électronique")
            .await
            .unwrap();

        assert_eq!(text, DESCRIPTION_PLACEHOLDER);
    }

    #[tokio::test]
    async fn description_failure_is_one_generic_error() {
        for make in [
            (|| Err(LlmError::Transport("connexion refusée".to_string())))
                as fn() -> Result<String, LlmError>,
            || {
                Err(LlmError::Status {
                    status: 429,
                    body: "quota".to_string(),
                })
            },
            || Err(LlmError::Malformed("troncature".to_string())),
        ] {
            let generator = ScriptedGenerator::replying(make);
            let err = generate_product_description(&generator, "X", "Y")
                .await
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Impossible de générer la description. Vérifiez votre clé API."
            );
        }
    }

    #[tokio::test]
    async fn analysis_prompt_contains_every_product_line() {
        let generator = ScriptedGenerator::replying(|| Ok("## Rapport".to_string()));
        let lines = vec![
            line("Chaise Ergonomique", 3, 10, 250.0),
            line("Casque Audio Sans Fil", 45, 8, 89.0),
        ];

        let report = analyze_stock_health(&generator, &lines).await.unwrap();

        assert_eq!(report, "## Rapport");
        let prompt = generator.last_prompt();
        assert!(prompt.contains("- Chaise Ergonomique (Qté: 3, Min: 10, Prix: 250€)"));
        assert!(prompt.contains("- Casque Audio Sans Fil (Qté: 45, Min: 8, Prix: 89€)"));
    }

    #[tokio::test]
    async fn empty_collection_still_sends_a_well_formed_prompt() {
        let generator = ScriptedGenerator::replying(|| Ok("Rien à signaler.".to_string()));

        let report = analyze_stock_health(&generator, &[]).await.unwrap();

        assert_eq!(report, "Rien à signaler.");
        let prompt = generator.last_prompt();
        assert!(prompt.contains("Données du stock :"));
        assert!(prompt.contains("Reste professionnel et direct."));
    }

    #[tokio::test]
    async fn empty_analysis_body_maps_to_placeholder() {
        let generator = ScriptedGenerator::replying(|| Ok(String::new()));

        let report = analyze_stock_health(&generator, &[]).await.unwrap();

        assert_eq!(report, ANALYSIS_PLACEHOLDER);
    }

    #[tokio::test]
    async fn analysis_failure_is_one_generic_error() {
        let generator = ScriptedGenerator::replying(|| {
            Err(LlmError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let err = analyze_stock_health(&generator, &[]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Impossible d'analyser le stock. Vérifiez votre clé API."
        );
    }
}
