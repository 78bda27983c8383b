//! Factor lookup and inventory errors.

use thiserror::Error;

use crate::catalog::FactorSetKey;
use crate::component::ComponentType;

/// Result type for factor operations.
pub type FactorResult<T> = Result<T, FactorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorError {
    /// A source references a component class the active table does not list.
    /// Happens when the factor set changes under an existing inventory; the
    /// aggregator never treats a missing lookup as zero.
    #[error("Component type '{component}' is not listed in factor set '{factor_set}'")]
    UnknownComponentType {
        component: ComponentType,
        factor_set: FactorSetKey,
    },

    /// Zero-count source entry.
    #[error("Quantity for component type '{component}' must be positive")]
    InvalidQuantity { component: ComponentType },
}
