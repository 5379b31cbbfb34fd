//! Fixed prompt templates.
//!
//! The templates are part of the observable contract: the remote service
//! receives exactly this French wording.

/// One product line in the stock-analysis input.
///
/// This crate consumes snapshots, not catalog records, so it stays decoupled
/// from the domain crates.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLine {
    pub name: String,
    pub quantity: u32,
    pub min_stock: u32,
    pub price: f64,
}

/// Prompt for a short promotional product description.
pub fn product_description(name: &str, category: &str) -> String {
    format!(
        "Rédige une description commerciale courte, attrayante et professionnelle \
         (max 50 mots) pour un produit nommé \"{name}\" appartenant à la catégorie \
         \"{category}\". Le ton doit être vendeur."
    )
}

/// One-line-per-product summary, joined with line breaks.
///
/// Empty input yields an empty summary; the surrounding prompt stays
/// well-formed.
pub fn stock_summary(lines: &[StockLine]) -> String {
    lines
        .iter()
        .map(|l| {
            format!(
                "- {} (Qté: {}, Min: {}, Prix: {}€)",
                l.name, l.quantity, l.min_stock, l.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the stock-health report (Markdown expected back).
pub fn stock_health(summary: &str) -> String {
    format!(
        "Tu es un expert en logistique et gestion d'inventaire. Analyse la liste \
         de stock suivante et fournis un rapport concis en format Markdown.\n\
         \n\
         Tes objectifs :\n\
         1. Identifier les produits en rupture ou stock critique.\n\
         2. Identifier le sur-stockage potentiel (si quantité > 100).\n\
         3. Suggérer une action prioritaire pour optimiser la valeur du stock.\n\
         \n\
         Données du stock :\n\
         {summary}\n\
         \n\
         Reste professionnel et direct."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_prompt_embeds_name_and_category() {
        let prompt = product_description("Moniteur 4K", "Électronique");
        assert!(prompt.contains("\"Moniteur 4K\""));
        assert!(prompt.contains("\"Électronique\""));
        assert!(prompt.contains("max 50 mots"));
    }

    #[test]
    fn summary_is_one_line_per_product() {
        let lines = vec![
            StockLine {
                name: "Chaise Ergonomique".to_string(),
                quantity: 3,
                min_stock: 10,
                price: 250.0,
            },
            StockLine {
                name: "Casque Audio Sans Fil".to_string(),
                quantity: 45,
                min_stock: 8,
                price: 89.0,
            },
        ];

        assert_eq!(
            stock_summary(&lines),
            "- Chaise Ergonomique (Qté: 3, Min: 10, Prix: 250€)\n\
             - Casque Audio Sans Fil (Qté: 45, Min: 8, Prix: 89€)"
        );
    }

    #[test]
    fn empty_collection_yields_empty_summary_but_well_formed_prompt() {
        let summary = stock_summary(&[]);
        assert_eq!(summary, "");

        let prompt = stock_health(&summary);
        assert!(prompt.contains("Données du stock :\n\n"));
        assert!(prompt.ends_with("Reste professionnel et direct."));
    }

    #[test]
    fn health_prompt_states_the_overstock_threshold() {
        let prompt = stock_health("- X (Qté: 1, Min: 1, Prix: 1€)");
        assert!(prompt.contains("quantité > 100"));
        assert!(prompt.contains("format Markdown"));
    }
}
