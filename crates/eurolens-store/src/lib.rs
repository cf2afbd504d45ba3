//! Local persistence of past analysis results.
//!
//! One append-front, most-recent-first list, stored as a single JSON blob.
//! Corrupt persisted data is never fatal: the store resets to empty and
//! reports the condition through the diagnostic log.

pub mod history;

pub use history::{AnalysisHistoryItem, HistoryStore, StoreError};
