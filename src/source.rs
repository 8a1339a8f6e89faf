//! Input boundary for the two transport payload shapes.
//!
//! The upload transport may hand back either the raw export text (parsed
//! locally) or an already-assembled model as JSON (decoded directly). Both
//! paths converge on [`WorkflowModel`]; downstream code cannot tell which
//! one produced it.

use crate::error::ParseError;
use crate::model::WorkflowModel;
use crate::parser::parse_workflow;

/// A workflow document as delivered by the transport layer.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Raw XML export text, to be parsed locally.
    Xml(String),
    /// A pre-assembled model in the serialized model shape.
    Json(String),
}

impl DocumentSource {
    /// Converges either payload shape into a model.
    pub fn into_model(self) -> Result<WorkflowModel, ParseError> {
        match self {
            DocumentSource::Xml(text) => parse_workflow(&text),
            DocumentSource::Json(text) => Ok(serde_json::from_str(&text)?),
        }
    }
}
