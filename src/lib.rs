//! trackmatch - order reconciliation and tracking-number enrichment
//!
//! Matches a fulfillment-system order export against an ERP export on a
//! shared order-item identifier, then fills each matched row with the
//! shipment tracking number and the numeric carrier code the downstream
//! system expects.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod reconcile;
pub mod report;
pub mod writer;

pub use config::Config;
pub use error::TrackmatchError;
pub use model::Table;
pub use reconcile::{reconcile, ReconcileResult};
