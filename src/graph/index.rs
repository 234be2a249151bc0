// Person lookup and reverse-edge index.
//
// Built once per query from the flat person collection:
// 1. id -> record lookup (last record wins on duplicate ids)
// 2. children index: parent id -> child records, in input order
//
// No referential-integrity validation is performed; a dangling father/mother/
// spouse id resolves to nothing at lookup time and ends that branch.

use std::collections::HashMap;

use crate::graph::types::Person;

/// Immutable per-query index over a snapshot of person records.
#[derive(Debug, Clone)]
pub struct PersonIndex {
    /// Records in first-occurrence order.
    records: Vec<Person>,
    /// id -> position in `records`.
    by_id: HashMap<String, usize>,
    /// Position -> positions of every person naming it as father or mother.
    children: Vec<Vec<usize>>,
}

impl PersonIndex {
    /// Build the index. O(n); duplicate ids keep their first position but the
    /// last record wins, matching the app's `Map`-based lookup.
    pub fn new(persons: Vec<Person>) -> Self {
        let mut records: Vec<Person> = Vec::with_capacity(persons.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(persons.len());

        for person in persons {
            match by_id.get(&person.id) {
                Some(&pos) => records[pos] = person,
                None => {
                    by_id.insert(person.id.clone(), records.len());
                    records.push(person);
                }
            }
        }

        // Reverse edges: each child registers once per distinct parent.
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
        for (pos, person) in records.iter().enumerate() {
            let father = person.father_id.as_deref().and_then(|id| by_id.get(id).copied());
            let mother = person.mother_id.as_deref().and_then(|id| by_id.get(id).copied());
            if let Some(f) = father {
                children[f].push(pos);
            }
            if let Some(m) = mother {
                if father != Some(m) {
                    children[m].push(pos);
                }
            }
        }

        Self { records, by_id, children }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.position(id).map(|pos| &self.records[pos])
    }

    /// Position of a person in index order, usable with `at`/`children_at`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn at(&self, pos: usize) -> &Person {
        &self.records[pos]
    }

    /// Positions of every child of the person at `pos`, in index order.
    pub fn children_at(&self, pos: usize) -> &[usize] {
        &self.children[pos]
    }

    /// Children of a person, or nothing when the id is unknown.
    pub fn children_of<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Person> {
        let positions = self
            .position(id)
            .map(|pos| self.children[pos].as_slice())
            .unwrap_or(&[]);
        positions.iter().map(|&pos| &self.records[pos])
    }

    /// Records in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.records.iter()
    }
}
