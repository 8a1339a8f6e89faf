use clap::Parser;
use flowgraph::prelude::*;
use std::fs;
use std::process;

/// Parse a workflow XML export and inspect the resulting graph model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow XML export
    export_path: String,

    /// Print the full model as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// List outgoing transitions for one activity id
    #[arg(long, value_name = "ACTIVITY_ID")]
    transitions: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let xml = match fs::read_to_string(&cli.export_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read export file '{}': {}", cli.export_path, e);
            process::exit(1);
        }
    };

    let model = match parse_workflow(&xml) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Parse failed: {}", e);
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&model) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize model: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if let Some(activity_id) = &cli.transitions {
        let outgoing = model.transitions_from(activity_id);
        println!(
            "{} outgoing transition(s) from '{}'",
            outgoing.len(),
            activity_id
        );
        for transition in outgoing {
            let guard = if transition.condition_id.is_empty() {
                "unguarded".to_string()
            } else {
                format!("guarded by {}", transition.condition_id)
            };
            println!(
                "  -> {} ({}, {})",
                transition.to_activity_id, transition.id, guard
            );
        }
        return;
    }

    let summary = model.summary();
    println!("Workflow: {}", summary.name);
    println!("Table: {}", summary.table);
    if !summary.description.is_empty() {
        println!("Description: {}", summary.description);
    }
    match &model.workflow_version {
        Some(version) => println!("Active: {}", version.active),
        None => println!("No workflow version header found"),
    }
    println!("Start activity: {}", summary.start_activity);
    println!(
        "{} stage(s), {} activity(ies), {} condition(s)",
        summary.stage_count,
        summary.activity_count,
        model.conditions.len()
    );
    for (stage_id, activity_names) in &summary.stage_activities {
        let stage_name = model
            .stages
            .get(stage_id)
            .map(|s| s.name.as_str())
            .unwrap_or(stage_id.as_str());
        println!("  Stage '{}': {}", stage_name, activity_names.join(", "));
    }
}
