use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;

use stockpro_ai::{
    analyze_stock_health, generate_product_description, AnalysisError, AnalysisSlot,
    AnalysisState, GenerationError, StockLine, TextGenerator,
};
use stockpro_catalog::{search, stats, Product, ProductDraft, ProductStore, StockStats};
use stockpro_core::{DomainResult, ProductId};

/// Application state shared by all handlers.
///
/// The store has exactly one mutator at a time (the write lock); derived
/// views recompute from a read snapshot. The two remote operations keep
/// independent result slots and share nothing but the generator.
pub struct AppServices {
    store: RwLock<ProductStore>,
    generator: Arc<dyn TextGenerator>,
    description_slot: Mutex<AnalysisSlot>,
    analysis_slot: Mutex<AnalysisSlot>,
}

impl AppServices {
    /// Production wiring: the fixed seed set plus the real generator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_store(ProductStore::seeded(), generator)
    }

    pub fn with_store(store: ProductStore, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            store: RwLock::new(store),
            generator,
            description_slot: Mutex::new(AnalysisSlot::new()),
            analysis_slot: Mutex::new(AnalysisSlot::new()),
        }
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.store.read().unwrap().all().to_vec()
    }

    pub fn products_search(&self, query: &str) -> Vec<Product> {
        let store = self.store.read().unwrap();
        search::filter(store.all(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn products_get(&self, id: ProductId) -> Option<Product> {
        self.store.read().unwrap().get(id).cloned()
    }

    pub fn products_create(&self, draft: ProductDraft) -> DomainResult<Product> {
        self.store
            .write()
            .unwrap()
            .create(draft, Utc::now().date_naive())
    }

    pub fn products_update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        self.store
            .write()
            .unwrap()
            .update(id, draft, Utc::now().date_naive())
    }

    pub fn products_delete(&self, id: ProductId) -> DomainResult<()> {
        self.store.write().unwrap().delete(id)
    }

    pub fn stock_stats(&self) -> StockStats {
        stats::compute(self.store.read().unwrap().all())
    }

    pub fn description_state(&self) -> AnalysisState {
        self.description_slot.lock().unwrap().state().clone()
    }

    pub fn analysis_state(&self) -> AnalysisState {
        self.analysis_slot.lock().unwrap().state().clone()
    }

    /// Run the description operation, driving its result slot.
    pub async fn run_description(
        &self,
        name: &str,
        category: &str,
    ) -> Result<String, GenerationError> {
        let ticket = self.description_slot.lock().unwrap().begin();

        let outcome = generate_product_description(self.generator.as_ref(), name, category).await;

        let mut slot = self.description_slot.lock().unwrap();
        match &outcome {
            Ok(text) => {
                slot.complete(ticket, Ok(text.clone()));
            }
            Err(e) => {
                slot.complete(ticket, Err(e.to_string()));
            }
        }
        outcome
    }

    /// Snapshot the store and run the stock-health analysis, driving its
    /// result slot.
    ///
    /// Overlapping requests both run to completion; the slot keeps the
    /// last-begun request's outcome and discards the superseded one.
    pub async fn run_stock_analysis(&self) -> Result<String, AnalysisError> {
        let lines: Vec<StockLine> = {
            let store = self.store.read().unwrap();
            store
                .all()
                .iter()
                .map(|p| StockLine {
                    name: p.name().to_string(),
                    quantity: p.quantity(),
                    min_stock: p.min_stock(),
                    price: p.price(),
                })
                .collect()
        };

        let ticket = self.analysis_slot.lock().unwrap().begin();

        let outcome = analyze_stock_health(self.generator.as_ref(), &lines).await;

        let mut slot = self.analysis_slot.lock().unwrap();
        match &outcome {
            Ok(report) => {
                slot.complete(ticket, Ok(report.clone()));
            }
            Err(e) => {
                slot.complete(ticket, Err(e.to_string()));
            }
        }
        outcome
    }
}
