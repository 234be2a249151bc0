// Generation-bucketed ancestor collection.
//
// Walks father/mother links upward from a root person, bounded by a
// generation ceiling. The walk is depth-first per branch (the father's whole
// branch before the mother's) but the result is grouped by generation
// number. There is no visited set: pedigree collapse legitimately puts the
// same person in several buckets, and the ceiling alone guarantees
// termination even on cyclic data.

use crate::graph::index::PersonIndex;
use crate::graph::types::Person;

/// Ancestors of one person, grouped by generation.
///
/// Generation 0 is the person themself. Buckets are dense: a generation is
/// present only when it holds at least one person, so the last bucket is
/// never empty.
#[derive(Debug, Clone)]
pub struct AncestorMap<'a> {
    generations: Vec<Vec<&'a Person>>,
}

impl<'a> AncestorMap<'a> {
    /// Persons at generation `g`, empty past the deepest resolved ancestor.
    pub fn generation(&self, g: usize) -> &[&'a Person] {
        self.generations.get(g).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of populated generations, the root's included.
    pub fn generation_count(&self) -> usize {
        self.generations.len()
    }

    /// Buckets in ascending generation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'a Person])> {
        self.generations.iter().map(|bucket| bucket.as_slice()).enumerate()
    }
}

/// Collect ancestors of `root` up to `max_generations` levels above it.
///
/// A parent id that does not resolve in the index ends that branch; with
/// `max_generations == 0` only generation 0 is returned. The root goes into
/// generation 0 even when it is not part of the index.
pub fn collect_ancestors<'a>(
    root: &'a Person,
    index: &'a PersonIndex,
    max_generations: usize,
) -> AncestorMap<'a> {
    let mut generations: Vec<Vec<&'a Person>> = vec![vec![root]];
    let mut stack: Vec<(&'a Person, usize)> = vec![(root, 0)];

    while let Some((person, generation)) = stack.pop() {
        if generation >= max_generations {
            continue;
        }
        let father = person.father_id.as_deref().and_then(|id| index.get(id));
        let mother = person.mother_id.as_deref().and_then(|id| index.get(id));

        for parent in [father, mother].into_iter().flatten() {
            if generations.len() <= generation + 1 {
                generations.push(Vec::new());
            }
            generations[generation + 1].push(parent);
        }
        // Pushed mother-first so the father's branch pops first.
        for parent in [mother, father].into_iter().flatten() {
            stack.push((parent, generation + 1));
        }
    }

    AncestorMap { generations }
}
