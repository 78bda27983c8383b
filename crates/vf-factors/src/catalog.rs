//! Static fugitive-emission factor tables.

use serde::{Deserialize, Serialize};

use crate::component::ComponentType;

/// Identifies one of the published factor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorSetKey {
    /// Average emission factors (EPA / Table 1)
    AverageEpa,
    /// Pegged (maximum) rates (API / Table 2)
    PeggedApi,
}

impl FactorSetKey {
    pub const ALL: [FactorSetKey; 2] = [FactorSetKey::AverageEpa, FactorSetKey::PeggedApi];

    /// Stable key used in documents.
    pub fn key(&self) -> &'static str {
        match self {
            FactorSetKey::AverageEpa => "average-epa",
            FactorSetKey::PeggedApi => "pegged-api",
        }
    }
}

impl std::fmt::Display for FactorSetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-unit leak rate for one component class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionFactor {
    pub component: ComponentType,
    /// Leak rate per installed unit [CFM].
    pub rate_cfm: f64,
}

/// One named factor table. Process-wide static data; the only runtime
/// choice is which table is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSet {
    pub key: FactorSetKey,
    pub display_name: &'static str,
    pub factors: &'static [EmissionFactor],
}

impl FactorSet {
    /// Per-unit leak rate for a component class, if this table lists it.
    pub fn unit_rate_cfm(&self, component: ComponentType) -> Option<f64> {
        self.factors
            .iter()
            .find(|factor| factor.component == component)
            .map(|factor| factor.rate_cfm)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.key.key().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .factors
                .iter()
                .any(|factor| factor.component.label().to_ascii_lowercase().contains(&query))
    }
}

const EMISSION_FACTOR_CATALOG: [FactorSet; 2] = [
    FactorSet {
        key: FactorSetKey::AverageEpa,
        display_name: "Average Emission Factors (EPA / Table 1)",
        factors: &[
            EmissionFactor {
                component: ComponentType::Valves,
                rate_cfm: 0.00392,
            },
            EmissionFactor {
                component: ComponentType::Connectors,
                rate_cfm: 0.00017,
            },
            EmissionFactor {
                component: ComponentType::Flanges,
                rate_cfm: 0.00034,
            },
        ],
    },
    FactorSet {
        key: FactorSetKey::PeggedApi,
        display_name: "Pegged (Maximum) Rates (API / Table 2)",
        factors: &[
            EmissionFactor {
                component: ComponentType::Valves,
                rate_cfm: 0.112,
            },
            EmissionFactor {
                component: ComponentType::Flanges,
                rate_cfm: 0.067,
            },
            EmissionFactor {
                component: ComponentType::ThreadedConnections,
                rate_cfm: 0.024,
            },
        ],
    },
];

pub fn emission_factor_catalog() -> &'static [FactorSet] {
    &EMISSION_FACTOR_CATALOG
}

/// Resolve a factor table by key. Every key has a catalog entry.
pub fn factor_set(key: FactorSetKey) -> &'static FactorSet {
    let catalog = emission_factor_catalog();
    match key {
        FactorSetKey::AverageEpa => &catalog[0],
        FactorSetKey::PeggedApi => &catalog[1],
    }
}

pub fn filter_emission_factor_catalog(query: &str) -> Vec<FactorSet> {
    emission_factor_catalog()
        .iter()
        .copied()
        .filter(|set| set.matches_query(query))
        .collect()
}
