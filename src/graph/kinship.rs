// French kinship labels.
//
// Turns a relationship path into a noun phrase by counting ascending and
// descending hops after the fact: a hop is ascending when the next person is
// the current one's father or mother, descending in the reverse case, and
// neither for spouse hops. Spouse hops therefore let a path cross a marriage
// while keeping blood-relation wording, which mislabels in-laws; the app has
// always worked that way.

use crate::graph::types::{Gender, Person};

/// Describe how `to` relates to `from` along `path` (source to target,
/// inclusive). Pure; always produces a label, falling back to a generic
/// "parent éloigné (…)" phrase when the degrees disagree.
pub fn describe_relationship(path: &[&Person], from: &Person, to: &Person) -> String {
    if path.len() == 1 {
        return "même personne".to_string();
    }
    if path.len() == 2 {
        if let Some(relation) = direct_relation(from, to) {
            return relation;
        }
    }

    let mut ascending = 0usize;
    let mut descending = 0usize;
    for pair in path.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if lists_as_parent(next, current) {
            descending += 1;
        } else if lists_as_parent(current, next) {
            ascending += 1;
        }
    }

    if ascending > 0 && descending == 0 {
        return ascendant_title(ascending, to.gender);
    }
    if descending > 0 && ascending == 0 {
        return descendant_title(descending, to.gender);
    }
    if ascending == descending {
        let feminine = if to.gender == Gender::Female { "e" } else { "" };
        let ordinal = if ascending == 1 { "er" } else { "e" };
        return format!("cousin{} au {}{} degré", feminine, ascending, ordinal);
    }
    format!(
        "parent éloigné ({} gén. montantes, {} gén. descendantes)",
        ascending, descending
    )
}

/// Does `child` name `parent` as father or mother?
fn lists_as_parent(child: &Person, parent: &Person) -> bool {
    child.father_id.as_deref() == Some(parent.id.as_str())
        || child.mother_id.as_deref() == Some(parent.id.as_str())
}

/// Labels for the four relations readable straight off the records.
fn direct_relation(from: &Person, to: &Person) -> Option<String> {
    if from.father_id.as_deref() == Some(to.id.as_str()) {
        let label = if to.gender == Gender::Male { "père" } else { "mère" };
        return Some(label.to_string());
    }
    if from.mother_id.as_deref() == Some(to.id.as_str()) {
        let label = if to.gender == Gender::Female { "mère" } else { "père" };
        return Some(label.to_string());
    }
    if lists_as_parent(to, from) {
        let label = if to.gender == Gender::Male { "fils" } else { "fille" };
        return Some(label.to_string());
    }
    if from.spouse_id.as_deref() == Some(to.id.as_str()) {
        let label = if to.gender == Gender::Male { "époux" } else { "épouse" };
        return Some(label.to_string());
    }
    None
}

/// père, grand-père, arrière-grand-père, arrière-arrière-… by generation count.
fn ascendant_title(generations: usize, gender: Gender) -> String {
    let feminine = gender == Gender::Female;
    match generations {
        1 => if feminine { "mère" } else { "père" }.to_string(),
        _ => {
            let prefix = "arrière-".repeat(generations.saturating_sub(2));
            if feminine {
                format!("{}grand-mère", prefix)
            } else {
                format!("{}grand-père", prefix)
            }
        }
    }
}

/// fils, petit-fils, arrière-petit-fils, … by generation count.
fn descendant_title(generations: usize, gender: Gender) -> String {
    let feminine = gender == Gender::Female;
    match generations {
        1 => if feminine { "fille" } else { "fils" }.to_string(),
        _ => {
            let prefix = "arrière-".repeat(generations.saturating_sub(2));
            if feminine {
                format!("{}petite-fille", prefix)
            } else {
                format!("{}petit-fils", prefix)
            }
        }
    }
}
