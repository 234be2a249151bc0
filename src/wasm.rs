//! WASM bindings for the lignage-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Each one takes the person snapshot as a JSON string and returns JSON, so
//! the frontend round-trips plain strings.

use serde_json::to_string;
use wasm_bindgen::prelude::*;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::graph::{Person, PersonIndex, collect_ancestors, direct_lineage, find_path};
use crate::layout::{LayoutConfig, layout_tree};
use crate::output::{ErrorInfo, GenerationsOutput, RelationshipOutput, StatsOutput, TreeOutput};
use crate::stats::compute_family_stats;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn parse_persons(persons_json: &str) -> Result<PersonIndex, serde_json::Error> {
    let persons: Vec<Person> = serde_json::from_str(persons_json)?;
    Ok(PersonIndex::new(persons))
}

fn tree_json(output: &TreeOutput) -> String {
    to_string(output).unwrap_or_else(|_| "{\"nodes\":[],\"edges\":[]}".to_string())
}

fn stats_json(output: &StatsOutput) -> String {
    to_string(output).unwrap_or_else(|_| "{}".to_string())
}

/// Lay out the ancestor tree of `root_id` and return it as JSON.
///
/// `lineage_target_id` highlights the path from the root to that person;
/// pass an empty string for no highlight. An unknown root yields an empty
/// tree, and malformed input yields an error payload.
#[wasm_bindgen]
pub fn build_tree(
    persons_json: &str,
    root_id: &str,
    max_generations: usize,
    lineage_target_id: &str,
) -> String {
    let index = match parse_persons(persons_json) {
        Ok(index) => index,
        Err(e) => {
            console_error(&format!("Error parsing persons: {}", e));
            return tree_json(&TreeOutput::from_error(e.to_string()));
        }
    };
    let root = match index.get(root_id) {
        Some(root) => root,
        None => return tree_json(&TreeOutput::empty()),
    };

    let highlight: Option<HashSet<String>> = if lineage_target_id.is_empty() {
        None
    } else {
        index.get(lineage_target_id).map(|target| {
            direct_lineage(root, target, &index)
                .iter()
                .map(|p| p.id.clone())
                .collect()
        })
    };

    let layout = layout_tree(
        root,
        &index,
        max_generations,
        highlight.as_ref(),
        &LayoutConfig::default(),
    );
    tree_json(&TreeOutput::from_layout(layout))
}

/// Describe how `from_id` relates to `to_id`.
///
/// Returns a JSON object with the id path and the French label, or JSON
/// null when either id is unknown or no path connects them.
#[wasm_bindgen]
pub fn relationship(persons_json: &str, from_id: &str, to_id: &str) -> String {
    let index = match parse_persons(persons_json) {
        Ok(index) => index,
        Err(e) => {
            console_error(&format!("Error parsing persons: {}", e));
            return "null".to_string();
        }
    };

    let found = match (index.get(from_id), index.get(to_id)) {
        (Some(from), Some(to)) => find_path(from, to, &index),
        _ => None,
    };
    let output = found.map(|found| RelationshipOutput {
        from_id: from_id.to_string(),
        to_id: to_id.to_string(),
        path: found.path.iter().map(|p| p.id.clone()).collect(),
        relationship: found.relationship,
    });
    to_string(&output).unwrap_or_else(|_| "null".to_string())
}

/// Collect the ancestor generations of `root_id` as arrays of person ids.
///
/// Generation 0 is the root itself. An unknown root yields no generations.
#[wasm_bindgen]
pub fn ancestor_generations(persons_json: &str, root_id: &str, max_generations: usize) -> String {
    let index = match parse_persons(persons_json) {
        Ok(index) => index,
        Err(e) => {
            console_error(&format!("Error parsing persons: {}", e));
            let output = GenerationsOutput {
                generations: Vec::new(),
                error: Some(ErrorInfo { message: e.to_string() }),
            };
            return to_string(&output).unwrap_or_else(|_| "{\"generations\":[]}".to_string());
        }
    };

    let generations = match index.get(root_id) {
        Some(root) => collect_ancestors(root, &index, max_generations)
            .iter()
            .map(|(_, persons)| persons.iter().map(|p| p.id.clone()).collect())
            .collect(),
        None => Vec::new(),
    };
    let output = GenerationsOutput { generations, error: None };
    to_string(&output).unwrap_or_else(|_| "{\"generations\":[]}".to_string())
}

/// Compute dashboard statistics for the snapshot.
///
/// `today_iso` is the frontend's current date as YYYY-MM-DD; ages and
/// birthday countdowns are relative to it.
#[wasm_bindgen]
pub fn family_stats(persons_json: &str, root_id: &str, today_iso: &str) -> String {
    let index = match parse_persons(persons_json) {
        Ok(index) => index,
        Err(e) => {
            console_error(&format!("Error parsing persons: {}", e));
            return stats_json(&StatsOutput {
                stats: None,
                error: Some(ErrorInfo { message: e.to_string() }),
            });
        }
    };
    let today = match NaiveDate::parse_from_str(today_iso, "%Y-%m-%d") {
        Ok(today) => today,
        Err(e) => {
            console_error(&format!("Invalid date '{}': {}", today_iso, e));
            return stats_json(&StatsOutput {
                stats: None,
                error: Some(ErrorInfo {
                    message: format!("invalid date '{}': {}", today_iso, e),
                }),
            });
        }
    };

    let stats = compute_family_stats(&index, root_id, today);
    stats_json(&StatsOutput { stats: Some(stats), error: None })
}
