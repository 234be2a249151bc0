// Aggregate family statistics for the dashboard.
//
// Mirrors what the app's landing page shows: member count, how many
// generations are documented above the reference person, the oldest living
// member, and birthdays coming up in the next month.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{calculate_age, days_until_birthday};
use crate::graph::{PersonIndex, collect_ancestors};

/// Ancestor depth used for the "generations documented" figure.
pub const DEFAULT_STATS_GENERATIONS: usize = 7;

/// Upcoming-birthday window, in days.
const BIRTHDAY_WINDOW_DAYS: i64 = 30;

/// At most this many birthdays are listed.
const BIRTHDAY_LIST_CAP: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStats {
    pub total_members: usize,
    /// Populated generation count of the root's ancestor map, bound 7.
    pub generations_documented: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_living: Option<OldestLiving>,
    pub upcoming_birthdays: Vec<UpcomingBirthday>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OldestLiving {
    pub person_id: String,
    pub age: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthday {
    pub person_id: String,
    pub days_until: i64,
}

/// Compute the dashboard figures for one snapshot. An unknown `root_id`
/// zeroes the generation figure and nothing else.
pub fn compute_family_stats(index: &PersonIndex, root_id: &str, today: NaiveDate) -> FamilyStats {
    let generations_documented = match index.get(root_id) {
        Some(root) => collect_ancestors(root, index, DEFAULT_STATS_GENERATIONS).generation_count(),
        None => 0,
    };

    let mut oldest_living: Option<OldestLiving> = None;
    for person in index.iter() {
        if person.death_date.is_some() {
            continue;
        }
        if let Some(age) = calculate_age(person.birth_date, None, today) {
            let is_older = oldest_living.as_ref().map_or(true, |current| age > current.age);
            if is_older {
                oldest_living = Some(OldestLiving { person_id: person.id.clone(), age });
            }
        }
    }

    let mut upcoming_birthdays: Vec<UpcomingBirthday> = index
        .iter()
        .filter(|person| person.death_date.is_none())
        .filter_map(|person| {
            let birth = person.birth_date?;
            let days_until = days_until_birthday(birth, today);
            if days_until <= BIRTHDAY_WINDOW_DAYS {
                Some(UpcomingBirthday { person_id: person.id.clone(), days_until })
            } else {
                None
            }
        })
        .collect();
    upcoming_birthdays.sort_by_key(|entry| entry.days_until);
    upcoming_birthdays.truncate(BIRTHDAY_LIST_CAP);

    FamilyStats {
        total_members: index.len(),
        generations_documented,
        oldest_living,
        upcoming_birthdays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Gender, Person};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(id: &str, birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Person {
        Person {
            id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Test".to_string(),
            birth_name: None,
            gender: Gender::Other,
            birth_date: birth,
            death_date: death,
            father_id: None,
            mother_id: None,
            spouse_id: None,
        }
    }

    #[test]
    fn test_generations_documented_follows_root_ancestry() {
        let mut a = person("a", None, None);
        a.father_id = Some("b".to_string());
        let mut b = person("b", None, None);
        b.mother_id = Some("c".to_string());
        let index = PersonIndex::new(vec![a, b, person("c", None, None)]);

        let stats = compute_family_stats(&index, "a", date(2024, 6, 1));
        assert_eq!(stats.total_members, 3);
        assert_eq!(stats.generations_documented, 3);

        let stats = compute_family_stats(&index, "missing", date(2024, 6, 1));
        assert_eq!(stats.generations_documented, 0);
        assert_eq!(stats.total_members, 3);
    }

    #[test]
    fn test_oldest_living_skips_deceased_and_undated() {
        let index = PersonIndex::new(vec![
            person("young", Some(date(1990, 1, 1)), None),
            person("gone", Some(date(1900, 1, 1)), Some(date(1980, 1, 1))),
            person("old", Some(date(1941, 8, 5)), None),
            person("undated", None, None),
        ]);
        let stats = compute_family_stats(&index, "young", date(2024, 6, 1));
        let oldest = stats.oldest_living.unwrap();
        assert_eq!(oldest.person_id, "old");
        assert_eq!(oldest.age, 82);
    }

    #[test]
    fn test_no_living_member_with_birth_date() {
        let index = PersonIndex::new(vec![
            person("gone", Some(date(1900, 1, 1)), Some(date(1980, 1, 1))),
            person("undated", None, None),
        ]);
        let stats = compute_family_stats(&index, "undated", date(2024, 6, 1));
        assert!(stats.oldest_living.is_none());
    }

    #[test]
    fn test_upcoming_birthdays_window_and_order() {
        let today = date(2024, 6, 1);
        let index = PersonIndex::new(vec![
            person("in-five-days", Some(date(1980, 6, 6)), None),
            person("too-far", Some(date(1980, 7, 15)), None),
            person("today", Some(date(1980, 6, 1)), None),
            person("deceased", Some(date(1900, 6, 3)), Some(date(1990, 1, 1))),
            person("at-the-edge", Some(date(1980, 7, 1)), None),
        ]);
        let stats = compute_family_stats(&index, "today", today);
        let entries: Vec<(&str, i64)> = stats
            .upcoming_birthdays
            .iter()
            .map(|entry| (entry.person_id.as_str(), entry.days_until))
            .collect();
        assert_eq!(entries, vec![("today", 0), ("in-five-days", 5), ("at-the-edge", 30)]);
    }

    #[test]
    fn test_upcoming_birthdays_keep_the_five_soonest() {
        let today = date(2024, 6, 1);
        let persons: Vec<Person> = (0..7)
            .map(|i| person(&format!("p{}", i), Some(date(1980, 6, 2 + i as u32)), None))
            .collect();
        let index = PersonIndex::new(persons);
        let stats = compute_family_stats(&index, "p0", today);
        assert_eq!(stats.upcoming_birthdays.len(), 5);
        assert_eq!(stats.upcoming_birthdays[0].person_id, "p0");
        assert_eq!(stats.upcoming_birthdays[4].person_id, "p4");
    }
}
