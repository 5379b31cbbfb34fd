//! `stockpro-api` — HTTP boundary for the inventory dashboard.

pub mod app;
