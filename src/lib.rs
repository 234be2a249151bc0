//! Core engine behind the family tree app: builds the person graph from a
//! JSON snapshot, walks ancestry and kinship paths, lays out the tree view
//! and computes dashboard statistics. Compiled to WASM; the `wasm` module
//! holds the JS-facing surface.

mod dates;
mod graph;
mod layout;
mod output;
mod stats;
pub mod wasm;

pub use dates::{calculate_age, days_until_birthday, format_date_fr, next_birthday};
pub use graph::{
    AncestorMap, Gender, Person, PersonIndex, RelationshipPath, collect_ancestors,
    describe_relationship, direct_lineage, find_path,
};
pub use layout::{DEFAULT_TREE_GENERATIONS, LayoutConfig, Position, TreeLayout, layout_tree};
pub use output::{
    EdgeKind, ErrorInfo, GenerationsOutput, RelationshipOutput, StatsOutput, TreeEdge, TreeNode,
    TreeOutput,
};
pub use stats::{
    DEFAULT_STATS_GENERATIONS, FamilyStats, OldestLiving, UpcomingBirthday, compute_family_stats,
};
