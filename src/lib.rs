//! # Flowgraph - Workflow Export Parser
//!
//! **Flowgraph** converts workflow-definition XML exports (the `wf_*`
//! schema produced by workflow-management platforms) into a typed in-memory
//! graph model: stages, activities (states), conditions (guards) and
//! transitions (directed edges). Consumers render or analyze the model
//! without ever touching XML again.
//!
//! ## Core Workflow
//!
//! 1.  **Obtain the document**: load the export text from disk, or receive
//!     it (raw or pre-assembled) from a transport as a [`DocumentSource`].
//! 2.  **Parse**: [`parse_workflow`] walks the document once, indexes it by
//!     tag name, and runs five independent extraction passes over the index.
//! 3.  **Consume**: look entities up by id on [`WorkflowModel`], follow the
//!     per-activity adjacency lists, or take the condensed
//!     [`WorkflowSummary`] view.
//!
//! The model itself describes a state machine, but this crate never walks or
//! executes it; interpretation is a downstream concern. Referential fields
//! are unresolved string handles and missing source fields are empty
//! strings, never errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowgraph::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let xml = std::fs::read_to_string("change_request_workflow.xml")?;
//!     let model = parse_workflow(&xml)?;
//!
//!     let summary = model.summary();
//!     println!(
//!         "'{}' on table '{}': {} stages, {} activities",
//!         summary.name, summary.table, summary.stage_count, summary.activity_count
//!     );
//!
//!     if let Some(start) = model.start_activity() {
//!         for transition in model.transitions_from(&start.id) {
//!             println!("{} -> {}", start.name, transition.to_activity_id);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`parse_workflow`]: parser::parse_workflow
//! [`DocumentSource`]: source::DocumentSource
//! [`WorkflowModel`]: model::WorkflowModel
//! [`WorkflowSummary`]: model::WorkflowSummary

pub mod document;
pub mod error;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod source;

#[cfg(feature = "client")]
pub mod client;
