// Generation-grid layouter for the family tree view.
//
// Goals:
// - Deterministic: no randomness; identical snapshots render identically
// - Generation rows: one row per generation, siblings in columns
// - Pedigree collapse folds to a single node (first placement wins)
// - Spouses sit next to their partner, outside the ancestor grid
// - Every edge references two placed nodes
//
// Output: TreeLayout with positioned nodes + typed edges for the React Flow
// view.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::graph::{Person, PersonIndex, collect_ancestors};
use crate::output::{EdgeKind, TreeEdge, TreeNode};

/// Ancestor depth of the default tree view.
pub const DEFAULT_TREE_GENERATIONS: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Horizontal pitch between siblings of one generation row.
    pub sibling_spacing: i32,
    /// Offset of a spouse from the person they are attached to.
    pub spouse_offset: i32,
    /// Vertical pitch between generation rows.
    pub generation_spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_spacing: 300,
            spouse_offset: 280,
            generation_spacing: 200,
        }
    }
}

/// Positioned nodes and typed edges for one tree view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLayout {
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeEdge>,
}

/// Lay out the ancestor tree of `root`.
///
/// Persons come from the ancestor map of `root` bounded by
/// `max_generations`, plus spouse fill-ins placed next to their partner. A
/// person reached by several ancestry paths keeps its first placement.
/// `highlight` ids mark nodes as direct lineage and animate the parent
/// edges into them; geometry is unaffected.
pub fn layout_tree<'a>(
    root: &'a Person,
    index: &'a PersonIndex,
    max_generations: usize,
    highlight: Option<&HashSet<String>>,
    cfg: &LayoutConfig,
) -> TreeLayout {
    let ancestors = collect_ancestors(root, index, max_generations);
    let highlighted = |id: &str| highlight.map(|ids| ids.contains(id)).unwrap_or(false);

    let mut nodes: Vec<TreeNode> = Vec::new();
    let mut placed_persons: Vec<&'a Person> = Vec::new();
    let mut processed: HashSet<String> = HashSet::new();
    // Spouse edges belong to the partner that pulled the spouse in.
    let mut spouse_of: HashMap<String, String> = HashMap::new();
    let mut max_width = 0i32;

    for (generation, persons) in ancestors.iter() {
        let y = generation as i32 * cfg.generation_spacing;
        let mut placed_in_row = 0i32;

        for (i, person) in persons.iter().enumerate() {
            if processed.contains(&person.id) {
                continue;
            }
            processed.insert(person.id.clone());

            let x = i as i32 * cfg.sibling_spacing;
            nodes.push(TreeNode {
                person_id: person.id.clone(),
                generation,
                position: Position { x, y },
                is_root: generation == 0,
                is_direct_lineage: highlighted(&person.id),
            });
            placed_persons.push(person);

            // A spouse not in the ancestor grid is placed right here.
            if let Some(spouse_id) = person.spouse_id.as_deref() {
                if !processed.contains(spouse_id) {
                    if let Some(spouse) = index.get(spouse_id) {
                        processed.insert(spouse.id.clone());
                        nodes.push(TreeNode {
                            person_id: spouse.id.clone(),
                            generation,
                            position: Position { x: x + cfg.spouse_offset, y },
                            is_root: false,
                            is_direct_lineage: highlighted(&spouse.id),
                        });
                        placed_persons.push(spouse);
                        spouse_of.insert(person.id.clone(), spouse.id.clone());
                    }
                }
            }

            placed_in_row += 1;
        }

        max_width = max_width.max(placed_in_row * cfg.sibling_spacing);
    }

    // Edges in placement order: father, mother, then the spouse tie. Parent
    // edges are only emitted between placed nodes.
    let mut edges: Vec<TreeEdge> = Vec::new();
    for person in &placed_persons {
        for (parent_id, side) in [(&person.father_id, "father"), (&person.mother_id, "mother")] {
            if let Some(parent_id) = parent_id.as_deref() {
                if processed.contains(parent_id) {
                    edges.push(TreeEdge {
                        id: format!("{}-{}-{}", person.id, side, parent_id),
                        source_id: parent_id.to_string(),
                        target_id: person.id.clone(),
                        kind: EdgeKind::ParentChild,
                        highlighted: highlighted(&person.id),
                    });
                }
            }
        }
        if let Some(spouse_id) = spouse_of.get(person.id.as_str()) {
            edges.push(TreeEdge {
                id: format!("spouse-{}-{}", person.id, spouse_id),
                source_id: person.id.clone(),
                target_id: spouse_id.clone(),
                kind: EdgeKind::Spouse,
                highlighted: false,
            });
        }
    }

    // Center on the widest row so the root sits in the middle.
    let center_offset = max_width / 2;
    for node in &mut nodes {
        node.position.x -= center_offset;
    }

    TreeLayout { nodes, edges }
}
