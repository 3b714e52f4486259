pub mod archive;
pub mod error;
pub mod profile;
pub mod schema;
pub mod store;

pub use archive::{RunArchive, default_base_dir};
pub use error::{Result, StoreError};
pub use profile::{ConstantOverrides, SweepProfile};
pub use store::{ClassificationCounts, RunSummary, Store};
