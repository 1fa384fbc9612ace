//! Derivation of the visible view from a snapshot and a toggle set.

use crate::decade::FilterState;
use crate::filter_pipeline::FilterPipeline;
use people_common::Person;

/// People from `snapshot` that survive every toggle that is switched off.
///
/// Pure: the snapshot is not touched and the result keeps its order. People
/// whose start year is outside the five filterable decades always pass.
pub fn derive_visible(snapshot: &[Person], state: &FilterState) -> Vec<Person> {
    FilterPipeline::from_state(state).apply(snapshot.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decade::Decade;
    use chrono::NaiveDate;

    fn person(id: i32, year: i32) -> Person {
        Person::new(id, "Test", "Person", NaiveDate::from_ymd_opt(year, 3, 3).unwrap(), 5)
    }

    fn ids(people: &[Person]) -> Vec<i32> {
        people.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_toggles_on_keeps_everything_in_order() {
        let snapshot = vec![person(1, 2000), person(2, 1971)];
        let visible = derive_visible(&snapshot, &FilterState::default());
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn test_seventies_off() {
        let snapshot = vec![person(1, 2000), person(2, 1971)];
        let mut state = FilterState::default();
        state.include_70s = false;

        let visible = derive_visible(&snapshot, &state);
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_idempotent() {
        let snapshot: Vec<Person> = (0..40).map(|i| person(i, 1965 + i)).collect();
        let mut state = FilterState::default();
        state.include_90s = false;
        state.include_10s = false;

        let once = derive_visible(&snapshot, &state);
        let twice = derive_visible(&once, &state);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_toggle_off_then_on_restores_view() {
        let snapshot: Vec<Person> = (0..40).map(|i| person(i, 1965 + i)).collect();
        let mut state = FilterState::default();
        let original = derive_visible(&snapshot, &state);

        state.set(Decade::Eighties, false);
        let filtered = derive_visible(&snapshot, &state);
        assert!(filtered.len() < original.len());

        state.set(Decade::Eighties, true);
        let restored = derive_visible(&snapshot, &state);
        assert_eq!(ids(&restored), ids(&original));
    }

    #[test]
    fn test_everything_off_leaves_outsiders() {
        let snapshot = vec![person(1, 1929), person(2, 1975), person(3, 2021), person(4, 2015)];
        let mut state = FilterState::default();
        for decade in Decade::ALL {
            state.set(decade, false);
        }

        let visible = derive_visible(&snapshot, &state);
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn test_snapshot_untouched() {
        let snapshot = vec![person(1, 1971), person(2, 1985)];
        let mut state = FilterState::default();
        state.include_70s = false;
        let _ = derive_visible(&snapshot, &state);
        assert_eq!(ids(&snapshot), vec![1, 2]);
    }
}
