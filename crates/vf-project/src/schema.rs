//! Calculation request document schema.

use serde::{Deserialize, Serialize};
use vf_factors::{FactorSetKey, FugitiveSource};
use vf_results::GasBuoyancy;

/// Flat, form-shaped calculation request as it appears in a document.
///
/// Optional fields may be blank in the source file; `compile_request`
/// enforces which of them are required for the selected method and mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub method: MethodKindDef,
    pub mode: ModeKindDef,
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    pub inside_temp_f: f64,
    pub outside_temp_f: f64,
    pub wind_velocity_mph: f64,
    pub terrain_factor: f64,
    pub wind_effectiveness: f64,
    pub discharge_coefficient: f64,
    pub inlet_obstruction: f64,
    pub outlet_obstruction: f64,
    pub gas_buoyancy: GasBuoyancy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lfl_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fugitive_factor_set: Option<FactorSetKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fugitive_sources: Vec<FugitiveSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_inlet_area_ft2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_outlet_area_ft2: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MethodKindDef {
    AreaMethod,
    FugitiveEmissionMethod,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModeKindDef {
    Design,
    Verification,
}
