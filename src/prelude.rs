//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so consumers can
//! bring the whole parsing surface into scope with one `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowgraph::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = std::fs::read_to_string("path/to/workflow.xml")?;
//! let model = parse_workflow(&xml)?;
//! println!("{} activities", model.activities.len());
//! # Ok(())
//! # }
//! ```

// Parsing entry points
pub use crate::parser::parse_workflow;
pub use crate::source::DocumentSource;

// Model types
pub use crate::model::{
    Activity, Condition, Stage, Transition, WorkflowModel, WorkflowSummary, WorkflowVersion,
};

// Error types
pub use crate::error::ParseError;

// Upload client (optional)
#[cfg(feature = "client")]
pub use crate::client::WorkflowClient;
#[cfg(feature = "client")]
pub use crate::error::FetchError;
