//! vf-project: calculation request documents and validation.
//!
//! The document layer between untyped request files and the typed engine:
//! a flat serde schema, a compile step that validates it into an engine
//! request, and the saved-calculation document produced after a run.

pub mod compile;
pub mod document;
pub mod schema;

pub use compile::{ValidationError, compile_request};
pub use document::{LATEST_VERSION, SavedCalculation, load_json, save_json};
pub use schema::*;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] compile::ValidationError),

    #[error("Unsupported document version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate a calculation request file. JSON for `.json` paths,
/// YAML otherwise.
pub fn load_request(path: &std::path::Path) -> ProjectResult<schema::CalculationDef> {
    let content = std::fs::read_to_string(path)?;
    let def: schema::CalculationDef = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    compile::compile_request(&def)?;
    Ok(def)
}

/// Write a calculation request file (YAML), validating first.
pub fn save_request(path: &std::path::Path, def: &schema::CalculationDef) -> ProjectResult<()> {
    compile::compile_request(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}
