//! Saved calculation documents.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vf_results::CalculationResult;

use crate::schema::CalculationDef;
use crate::{ProjectError, ProjectResult, compile};

/// Current saved-document version.
pub const LATEST_VERSION: u32 = 1;

/// One completed calculation: the request document that produced it plus
/// the full result snapshot (recommendations included). Loading an old
/// document re-renders the calculation without recomputing anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedCalculation {
    pub version: u32,
    pub request: CalculationDef,
    pub result: CalculationResult,
}

impl SavedCalculation {
    pub fn new(request: CalculationDef, result: CalculationResult) -> Self {
        Self {
            version: LATEST_VERSION,
            request,
            result,
        }
    }
}

pub fn save_json(path: &Path, document: &SavedCalculation) -> ProjectResult<()> {
    compile::compile_request(&document.request)?;
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<SavedCalculation> {
    let content = std::fs::read_to_string(path)?;
    let document: SavedCalculation = serde_json::from_str(&content)?;
    if document.version > LATEST_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            version: document.version,
        });
    }
    compile::compile_request(&document.request)?;
    Ok(document)
}
