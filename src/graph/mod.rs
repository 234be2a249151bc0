mod ancestors;
mod index;
mod kinship;
mod pathfind;
mod types;

pub use ancestors::{AncestorMap, collect_ancestors};
pub use index::PersonIndex;
pub use kinship::describe_relationship;
pub use pathfind::{RelationshipPath, direct_lineage, find_path};
pub use types::{Gender, Person};
