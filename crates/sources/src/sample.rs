//! Built-in demo data set.
//!
//! Covers every decade the view can filter on, plus a few people outside
//! those decades so the pass-through behavior is visible.

use chrono::NaiveDate;
use people_common::Person;

/// Dates are built in `const` blocks, so a bad one fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

/// The people served when no data file is configured.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(1, "John", "Koenig", const { ymd(1975, 10, 17) }, 6),
        Person::new(2, "Dylan", "Hunt", const { ymd(2000, 10, 2) }, 8),
        Person::new(3, "Leela", "Turanga", const { ymd(1999, 3, 28) }, 8),
        Person::new(4, "John", "Crichton", const { ymd(1999, 3, 19) }, 7),
        Person::new(5, "Dave", "Lister", const { ymd(1988, 2, 15) }, 9)
            .with_format_string("{1}, {0}"),
        Person::new(6, "Laura", "Roslin", const { ymd(2003, 12, 8) }, 6),
        Person::new(7, "John", "Sheridan", const { ymd(1994, 1, 26) }, 6),
        Person::new(8, "Dante", "Montana", const { ymd(2000, 11, 1) }, 5),
        Person::new(9, "Isaac", "Gampu", const { ymd(1977, 9, 10) }, 4),
        Person::new(10, "Jeff", "Winger", const { ymd(2009, 9, 17) }, 7),
        Person::new(11, "Abed", "Nadir", const { ymd(2012, 4, 5) }, 9),
        Person::new(12, "Buck", "Rogers", const { ymd(1929, 1, 7) }, 5),
        Person::new(13, "Ellen", "Ripley", const { ymd(2021, 5, 30) }, 10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let people = sample_people();
        let ids: HashSet<i32> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), people.len());
        assert_eq!(people.len(), 13);
    }

    #[test]
    fn test_sample_spans_all_decades() {
        let decades: HashSet<i32> = sample_people().iter().map(|p| p.decade()).collect();
        for decade in [1970, 1980, 1990, 2000, 2010] {
            assert!(decades.contains(&decade), "missing {decade}");
        }
    }

    #[test]
    fn test_sample_dates_and_formats() {
        let people = sample_people();
        let lister = people.iter().find(|p| p.id == 5).unwrap();
        assert_eq!(lister.to_string(), "Lister, Dave");
        assert_eq!(lister.start_date, NaiveDate::from_ymd_opt(1988, 2, 15).unwrap());

        let koenig = people.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(koenig.to_string(), "John Koenig");
        assert_eq!(people.first().map(|p| p.id), Some(1));
        assert_eq!(people.last().map(|p| p.id), Some(13));
    }
}
