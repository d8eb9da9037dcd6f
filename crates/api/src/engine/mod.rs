//! The attendance reconciliation engine.
//!
//! Consumes batches of recognition events plus roster state, applies the
//! per-session dedup and enrollment rules, writes new ledger entries, and
//! runs the closing absence sweep. Everything here is best-effort at the
//! event level: a noisy detection skips, it never fails the batch.

pub mod reconcile;
pub mod sweep;

pub use reconcile::{record_batch, RecognitionBatch, RecognizedEvent};
pub use sweep::mark_absences;
