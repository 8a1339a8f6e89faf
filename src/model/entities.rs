//! The typed workflow graph model.
//!
//! All identifiers are opaque strings, unique within one parse. Referential
//! fields (`stage_id`, `activity_id`, `from_activity_id`, `to_activity_id`,
//! `condition_id`, `start_activity_id`) are unresolved handles: the model
//! does not check that the referenced entity exists, resolution is left to
//! the consumer. Fields absent from the source document are `""`.
//!
//! Numeric-looking fields (`order`, `x`, `y`) are kept in their raw textual
//! form; coercion is a caller concern.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The document-level workflow header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowVersion {
    pub id: String,
    pub name: String,
    pub table: String,
    /// `true` only when the source text is exactly `"true"`.
    pub active: bool,
    pub description: String,
    pub start_activity_id: String,
}

/// A named grouping marker over activities. Stages are milestones, not nodes
/// in the transition graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub value: String,
    pub order: String,
}

/// A state in the workflow; the unit connected by transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub activity_definition: String,
    pub stage_id: String,
    pub x: String,
    pub y: String,
}

/// A named boolean guard expression attached to an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub activity_id: String,
    pub condition: String,
    pub order: String,
}

/// A directed edge between two activities, optionally guarded by a condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transition {
    pub id: String,
    pub condition_id: String,
    pub from_activity_id: String,
    pub to_activity_id: String,
}

/// The complete graph model assembled from one workflow export.
///
/// The model is constructed in one pass and immutable afterwards; separate
/// parse calls share no state. It serializes with the keys
/// `workflowVersion`, `stages`, `activities`, `conditions` and
/// `transitions`, and deserializes from the same shape, so a pre-assembled
/// payload from a remote parser is indistinguishable from a local parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowModel {
    /// The document header, or `None` when the export carries no
    /// `wf_workflow_version` node.
    pub workflow_version: Option<WorkflowVersion>,
    pub stages: AHashMap<String, Stage>,
    pub activities: AHashMap<String, Activity>,
    pub conditions: AHashMap<String, Condition>,
    /// Transitions grouped by origin activity id, in document order within
    /// each group.
    #[serde(rename = "transitions")]
    pub transitions_by_origin: AHashMap<String, Vec<Transition>>,
}

impl WorkflowModel {
    /// All transitions leaving the given activity, in document order. Empty
    /// for activities with no outgoing edges or unknown ids.
    pub fn transitions_from(&self, activity_id: &str) -> &[Transition] {
        self.transitions_by_origin
            .get(activity_id)
            .map_or(&[], Vec::as_slice)
    }

    /// The activity the header's `start_activity_id` points at, when that
    /// reference resolves.
    pub fn start_activity(&self) -> Option<&Activity> {
        let version = self.workflow_version.as_ref()?;
        self.activities.get(&version.start_activity_id)
    }
}
