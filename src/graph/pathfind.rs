// Shortest relationship path between two persons.
//
// Breadth-first search over the undirected family multigraph. Neighbors are
// expanded in a fixed order: father, mother, children (reverse edges via the
// index), spouse. Each queue entry carries its full path from the source;
// the first time the target comes off the queue that path is a shortest one
// and gets labeled. A person is marked visited when dequeued, so cyclic data
// costs nothing more than a skipped entry.

use std::collections::{HashSet, VecDeque};

use crate::graph::index::PersonIndex;
use crate::graph::kinship::describe_relationship;
use crate::graph::types::Person;

/// One shortest connecting walk between two persons, with its French label.
#[derive(Debug, Clone)]
pub struct RelationshipPath<'a> {
    /// Source to target, inclusive of both.
    pub path: Vec<&'a Person>,
    /// e.g. "grand-mère", "cousin au 2e degré".
    pub relationship: String,
}

/// Find a shortest path from `from` to `to`, or `None` when the two are in
/// disconnected components. `from.id == to.id` yields the single-element
/// path labeled "même personne".
pub fn find_path<'a>(
    from: &'a Person,
    to: &'a Person,
    index: &'a PersonIndex,
) -> Option<RelationshipPath<'a>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&'a Person, Vec<&'a Person>)> = VecDeque::new();
    queue.push_back((from, vec![from]));

    while let Some((person, path)) = queue.pop_front() {
        if person.id == to.id {
            let relationship = describe_relationship(&path, from, to);
            return Some(RelationshipPath { path, relationship });
        }
        if !visited.insert(person.id.as_str()) {
            continue;
        }

        if let Some(father_id) = person.father_id.as_deref() {
            if !visited.contains(father_id) {
                if let Some(father) = index.get(father_id) {
                    queue.push_back((father, extended(&path, father)));
                }
            }
        }
        if let Some(mother_id) = person.mother_id.as_deref() {
            if !visited.contains(mother_id) {
                if let Some(mother) = index.get(mother_id) {
                    queue.push_back((mother, extended(&path, mother)));
                }
            }
        }
        for child in index.children_of(&person.id) {
            if !visited.contains(child.id.as_str()) {
                queue.push_back((child, extended(&path, child)));
            }
        }
        if let Some(spouse_id) = person.spouse_id.as_deref() {
            if !visited.contains(spouse_id) {
                if let Some(spouse) = index.get(spouse_id) {
                    queue.push_back((spouse, extended(&path, spouse)));
                }
            }
        }
    }

    None
}

/// The path when the two persons are connected, empty otherwise. The app
/// highlights these ids in the tree view.
pub fn direct_lineage<'a>(
    from: &'a Person,
    to: &'a Person,
    index: &'a PersonIndex,
) -> Vec<&'a Person> {
    find_path(from, to, index).map(|found| found.path).unwrap_or_default()
}

fn extended<'a>(path: &[&'a Person], next: &'a Person) -> Vec<&'a Person> {
    let mut out = path.to_vec();
    out.push(next);
    out
}
