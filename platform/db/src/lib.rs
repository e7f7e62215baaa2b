//! In-memory record store for the workforce directory.
//!
//! A [`RecordStore`] owns four insertion-ordered tables and is constructed
//! explicitly, then passed by handle to whoever needs it. Nothing here is
//! persisted.

pub mod directory;
mod ids;
mod latency;
mod seed;
mod settings;
mod stats;
mod store;
mod table;

pub use latency::Latency;
pub use seed::{Dataset, demo_dataset};
pub use settings::{ConfigError, ConfigResult, StoreSettings};
pub use stats::{average_rating, dashboard_stats};
pub use store::{Collection, RecordStore, ReviewChange, Stored, Tables};
pub use table::Table;
