//! Fugitive leak-source inventory.

use serde::{Deserialize, Serialize};

use crate::catalog::FactorSet;
use crate::component::ComponentType;
use crate::error::{FactorError, FactorResult};

/// One counted leak source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FugitiveSource {
    pub component: ComponentType,
    pub quantity: u32,
}

/// Ordered list of leak sources for one enclosure.
///
/// Adding a component class that is already present accumulates its
/// quantity instead of creating a duplicate entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeakInventory {
    sources: Vec<FugitiveSource>,
}

impl LeakInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from (component, quantity) pairs, accumulating
    /// repeated component classes.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ComponentType, u32)>,
    ) -> FactorResult<Self> {
        let mut inventory = Self::new();
        for (component, quantity) in entries {
            inventory.add(component, quantity)?;
        }
        Ok(inventory)
    }

    /// Add `quantity` units of a component class.
    pub fn add(&mut self, component: ComponentType, quantity: u32) -> FactorResult<()> {
        if quantity == 0 {
            return Err(FactorError::InvalidQuantity { component });
        }

        match self
            .sources
            .iter_mut()
            .find(|source| source.component == component)
        {
            Some(existing) => existing.quantity += quantity,
            None => self.sources.push(FugitiveSource {
                component,
                quantity,
            }),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> &[FugitiveSource] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = FugitiveSource> + '_ {
        self.sources.iter().copied()
    }

    /// Total leak rate under the given factor table [CFM].
    ///
    /// Fails if any source references a component class the table omits;
    /// an empty inventory totals zero.
    pub fn total_leak_cfm(&self, set: &FactorSet) -> FactorResult<f64> {
        let mut total = 0.0;
        for source in &self.sources {
            let rate = set.unit_rate_cfm(source.component).ok_or(
                FactorError::UnknownComponentType {
                    component: source.component,
                    factor_set: set.key,
                },
            )?;
            total += rate * f64::from(source.quantity);
        }
        Ok(total)
    }
}
