//! `stockpro-ai`
//!
//! **Responsibility:** remote text-generation subsystem boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog types (inputs are snapshots provided by
//!   callers).
//! - It must not mutate domain state.
//! - It produces text reports, not domain records.

pub mod client;
pub mod gemini;
pub mod pipeline;
pub mod prompts;
pub mod slot;

pub use client::{LlmError, TextGenerator};
pub use gemini::{GeminiClient, GeminiConfig};
pub use pipeline::{
    analyze_stock_health, generate_product_description, AnalysisError, GenerationError,
    ANALYSIS_PLACEHOLDER, DESCRIPTION_PLACEHOLDER,
};
pub use prompts::StockLine;
pub use slot::{AnalysisSlot, AnalysisState, AnalysisTicket};
