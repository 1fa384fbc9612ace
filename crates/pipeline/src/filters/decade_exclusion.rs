//! Filter that hides everyone who started in one decade.
//!
//! One instance per toggle that is switched off; the pipeline chains them,
//! so the order they run in never changes the result.

use crate::decade::Decade;
use crate::traits::Filter;
use people_common::Person;
use rayon::prelude::*;

/// Above this many people the filter runs on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Removes people whose start year falls in `decade`.
///
/// ## Algorithm
/// Keeps a person unless `person.decade() == decade.start_year()`.
/// Relative order is preserved on both the sequential and parallel paths.
pub struct DecadeExclusionFilter {
    decade: Decade,
    name: String,
}

impl DecadeExclusionFilter {
    pub fn new(decade: Decade) -> Self {
        Self {
            decade,
            name: format!("DecadeExclusionFilter({})", decade.label()),
        }
    }

    pub fn decade(&self) -> Decade {
        self.decade
    }
}

impl Filter for DecadeExclusionFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, people: Vec<Person>) -> Vec<Person> {
        if people.len() >= PARALLEL_THRESHOLD {
            return people
                .into_par_iter()
                .filter(|person| !self.decade.contains(person))
                .collect();
        }
        people
            .into_iter()
            .filter(|person| !self.decade.contains(person))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn person(id: i32, year: i32) -> Person {
        Person::new(id, "Test", "Person", NaiveDate::from_ymd_opt(year, 6, 1).unwrap(), 5)
    }

    #[test]
    fn test_decade_exclusion_filter() {
        let people = vec![
            person(1, 2000),
            person(2, 1971),
            person(3, 1979),
            person(4, 1980),
        ];

        let filter = DecadeExclusionFilter::new(Decade::Seventies);
        let filtered = filter.apply(people);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 4);
    }

    #[test]
    fn test_people_outside_known_decades_pass() {
        let people = vec![person(1, 1929), person(2, 2021), person(3, 1965)];

        for decade in Decade::ALL {
            let filtered = DecadeExclusionFilter::new(decade).apply(people.clone());
            assert_eq!(filtered.len(), 3);
        }
    }

    #[test]
    fn test_parallel_path_preserves_order() {
        let people: Vec<Person> = (0..(PARALLEL_THRESHOLD as i32 * 2))
            .map(|i| person(i, 1960 + (i % 60)))
            .collect();

        let filtered = DecadeExclusionFilter::new(Decade::Nineties).apply(people.clone());
        let expected: Vec<i32> = people
            .iter()
            .filter(|p| p.decade() != 1990)
            .map(|p| p.id)
            .collect();
        let actual: Vec<i32> = filtered.iter().map(|p| p.id).collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_name_mentions_decade() {
        assert_eq!(
            DecadeExclusionFilter::new(Decade::TwoThousands).name(),
            "DecadeExclusionFilter(00s)"
        );
    }
}
