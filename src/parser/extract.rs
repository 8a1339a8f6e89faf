//! The five extraction passes.
//!
//! Each pass reads only the shared [`TagIndex`]; none depends on another
//! pass's output, so their order is irrelevant. Entity passes insert records
//! keyed by `sys_id` in document order, which makes duplicate ids resolve
//! last-write-wins (see [`parse_workflow`](crate::parser::parse_workflow)).

use ahash::AHashMap;

use crate::document::{TagIndex, resolve_reference, text_of};
use crate::model::{Activity, Condition, Stage, Transition, WorkflowVersion};

/// The single document-level header, or `None` when the export has no
/// `wf_workflow_version` node. Exports are expected to carry at most one;
/// should several appear, the first wins.
pub(super) fn extract_version(index: &TagIndex) -> Option<WorkflowVersion> {
    let node = index.first("wf_workflow_version")?;
    Some(WorkflowVersion {
        id: text_of(node, "sys_id"),
        name: text_of(node, "name"),
        table: text_of(node, "table"),
        active: text_of(node, "active") == "true",
        description: text_of(node, "description"),
        start_activity_id: resolve_reference(node, "start"),
    })
}

pub(super) fn extract_stages(index: &TagIndex) -> AHashMap<String, Stage> {
    let mut stages = AHashMap::new();
    for &node in index.all("wf_stage") {
        let stage = Stage {
            id: text_of(node, "sys_id"),
            name: text_of(node, "name"),
            value: text_of(node, "value"),
            order: text_of(node, "order"),
        };
        stages.insert(stage.id.clone(), stage);
    }
    stages
}

pub(super) fn extract_activities(index: &TagIndex) -> AHashMap<String, Activity> {
    let mut activities = AHashMap::new();
    for &node in index.all("wf_activity") {
        let activity = Activity {
            id: text_of(node, "sys_id"),
            name: text_of(node, "name"),
            activity_definition: resolve_reference(node, "activity_definition"),
            stage_id: resolve_reference(node, "stage"),
            x: text_of(node, "x"),
            y: text_of(node, "y"),
        };
        activities.insert(activity.id.clone(), activity);
    }
    activities
}

pub(super) fn extract_conditions(index: &TagIndex) -> AHashMap<String, Condition> {
    let mut conditions = AHashMap::new();
    for &node in index.all("wf_condition") {
        let condition = Condition {
            id: text_of(node, "sys_id"),
            name: text_of(node, "name"),
            activity_id: resolve_reference(node, "activity"),
            condition: text_of(node, "condition"),
            order: text_of(node, "order"),
        };
        conditions.insert(condition.id.clone(), condition);
    }
    conditions
}

/// All transition records in document order. Grouping by origin happens in
/// the assembler, not here.
pub(super) fn extract_transitions(index: &TagIndex) -> Vec<Transition> {
    index
        .all("wf_transition")
        .iter()
        .map(|&node| Transition {
            id: text_of(node, "sys_id"),
            condition_id: resolve_reference(node, "condition"),
            from_activity_id: resolve_reference(node, "from"),
            to_activity_id: resolve_reference(node, "to"),
        })
        .collect()
}
