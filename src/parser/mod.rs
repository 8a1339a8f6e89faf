//! Extraction orchestration: XML text in, [`WorkflowModel`] out.

use ahash::AHashMap;
use roxmltree::Document;

use crate::document::TagIndex;
use crate::error::ParseError;
use crate::model::{Transition, WorkflowModel};

mod extract;

use extract::*;

/// Parses a workflow XML export into its graph model.
///
/// This is a pure function of its input: the document is parsed into a tree,
/// indexed once, and the five extraction passes run over the shared index.
/// No state survives the call and no state is shared between calls.
///
/// A well-formed but incomplete document always succeeds; missing fields
/// appear as `""` in the records and absent entity kinds as empty maps. The
/// only failure is [`ParseError::MalformedDocument`].
///
/// When the same `sys_id` occurs on more than one node of a kind, the last
/// occurrence in document order wins. That matches the upstream export
/// tooling's own behavior and is pinned by tests rather than treated as an
/// input error.
pub fn parse_workflow(xml: &str) -> Result<WorkflowModel, ParseError> {
    let document = Document::parse(xml)?;
    let index = TagIndex::build(&document);

    Ok(WorkflowModel {
        workflow_version: extract_version(&index),
        stages: extract_stages(&index),
        activities: extract_activities(&index),
        conditions: extract_conditions(&index),
        transitions_by_origin: group_by_origin(extract_transitions(&index)),
    })
}

/// Folds transition records into an adjacency map keyed by origin activity,
/// preserving document order within each group. The accumulation is local to
/// one parse call.
fn group_by_origin(records: Vec<Transition>) -> AHashMap<String, Vec<Transition>> {
    let mut by_origin: AHashMap<String, Vec<Transition>> = AHashMap::new();
    for transition in records {
        by_origin
            .entry(transition.from_activity_id.clone())
            .or_default()
            .push(transition);
    }
    by_origin
}

impl WorkflowModel {
    /// Convenience wrapper around [`parse_workflow`].
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        parse_workflow(xml)
    }
}
