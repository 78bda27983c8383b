//! Leak-prone component classes.

use serde::{Deserialize, Serialize};

/// Component classes with published fugitive-emission factors.
///
/// Not every factor table lists every class; lookups against a table that
/// omits the class fail rather than defaulting to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    /// Process and block valves
    Valves,
    /// Tubing and piping connectors
    Connectors,
    /// Flanged joints
    Flanges,
    /// Threaded pipe connections
    ThreadedConnections,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Valves,
        ComponentType::Connectors,
        ComponentType::Flanges,
        ComponentType::ThreadedConnections,
    ];

    /// Stable key used in documents and factor tables.
    pub fn key(&self) -> &'static str {
        match self {
            ComponentType::Valves => "valves",
            ComponentType::Connectors => "connectors",
            ComponentType::Flanges => "flanges",
            ComponentType::ThreadedConnections => "threaded-connections",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Valves => "Valves",
            ComponentType::Connectors => "Connectors",
            ComponentType::Flanges => "Flanges",
            ComponentType::ThreadedConnections => "Threaded Connections",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
