use ahash::AHashMap;
use serde::Serialize;

use super::entities::WorkflowModel;

/// A condensed, render-friendly view of a parsed workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub name: String,
    pub table: String,
    pub description: String,
    /// Name of the start activity, or `""` when the header is missing or its
    /// start reference dangles.
    pub start_activity: String,
    pub stage_count: usize,
    pub activity_count: usize,
    /// Activity names grouped by the stage id they belong to, sorted within
    /// each stage. Activities with an empty `stage_id` are omitted.
    pub stage_activities: AHashMap<String, Vec<String>>,
}

impl WorkflowModel {
    /// Builds the condensed view of this model.
    pub fn summary(&self) -> WorkflowSummary {
        let mut summary = WorkflowSummary {
            stage_count: self.stages.len(),
            activity_count: self.activities.len(),
            ..WorkflowSummary::default()
        };

        if let Some(version) = &self.workflow_version {
            summary.name = version.name.clone();
            summary.table = version.table.clone();
            summary.description = version.description.clone();
        }
        if let Some(start) = self.start_activity() {
            summary.start_activity = start.name.clone();
        }

        for activity in self.activities.values() {
            if activity.stage_id.is_empty() {
                continue;
            }
            summary
                .stage_activities
                .entry(activity.stage_id.clone())
                .or_default()
                .push(activity.name.clone());
        }
        // Map iteration order varies per instance; sort each group so the
        // view is stable across parses.
        for names in summary.stage_activities.values_mut() {
            names.sort();
        }

        summary
    }
}
