//! vf-factors: fugitive-emission factor tables and leak aggregation.
//!
//! Provides the published per-component leak rates (EPA average and API
//! pegged tables), the component classes they cover, and the leak-source
//! inventory that aggregates counted components into a total leak rate.

pub mod catalog;
pub mod component;
pub mod error;
pub mod inventory;

// Re-exports
pub use catalog::{
    EmissionFactor, FactorSet, FactorSetKey, emission_factor_catalog, factor_set,
    filter_emission_factor_catalog,
};
pub use component::ComponentType;
pub use error::{FactorError, FactorResult};
pub use inventory::{FugitiveSource, LeakInventory};
