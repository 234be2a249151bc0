//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React frontend.
//! Everything is camelCase on the wire. The tree payload keeps its `nodes`
//! and `edges` arrays even when empty so the view can render
//! unconditionally; absent optional fields are dropped instead of being
//! emitted as null.

use crate::layout::{Position, TreeLayout};
use crate::stats::FamilyStats;
use serde::Serialize;

/// A positioned person node ready for React to display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub person_id: String,
    /// Ancestor depth: 0 is the root, parents are 1, and so on
    pub generation: usize,
    pub position: Position,
    pub is_root: bool,
    /// Whether this person sits on the highlighted lineage path
    pub is_direct_lineage: bool,
}

/// Edge kind as the frontend switches on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    ParentChild,
    Spouse,
}

/// An edge between two placed nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEdge {
    /// Stable id, e.g. "child-father-parent" or "spouse-a-b"
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub kind: EdgeKind,
    /// Parent edges into a highlighted child animate in the view
    pub highlighted: bool,
}

/// Error information surfaced to the frontend console banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined tree output sent to React
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOutput {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl TreeOutput {
    pub fn from_layout(layout: TreeLayout) -> Self {
        Self {
            nodes: layout.nodes,
            edges: layout.edges,
            error: None,
        }
    }

    /// Tree for an unknown root: nothing to draw, not an error.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            error: None,
        }
    }

    pub fn from_error(message: String) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            error: Some(ErrorInfo { message }),
        }
    }
}

/// Path between two persons, as ids plus the French label
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipOutput {
    pub from_id: String,
    pub to_id: String,
    pub path: Vec<String>,
    pub relationship: String,
}

/// Ancestor generations for one root, as id arrays indexed by depth
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationsOutput {
    pub generations: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Dashboard statistics payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<FamilyStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
