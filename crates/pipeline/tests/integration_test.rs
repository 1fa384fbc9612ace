//! Integration tests for the pipeline.
//!
//! These tests drive the public API the way the view model does: a snapshot
//! plus a toggle set in, a visible list out.

use chrono::NaiveDate;
use people_common::Person;
use pipeline::filters::DecadeExclusionFilter;
use pipeline::{Decade, FilterPipeline, FilterState, derive_visible};

fn person(id: i32, year: i32, month: u32, day: u32) -> Person {
    Person::new(
        id,
        "Given",
        "Family",
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        5,
    )
}

fn create_snapshot() -> Vec<Person> {
    vec![
        person(1, 2000, 10, 1),
        person(2, 1971, 7, 23),
        person(3, 1985, 1, 1),
        person(4, 1999, 12, 31),
        person(5, 2013, 1, 1),
        person(6, 1950, 5, 5),
        person(7, 2024, 2, 29),
    ]
}

fn ids(people: &[Person]) -> Vec<i32> {
    people.iter().map(|p| p.id).collect()
}

#[test]
fn test_exclusion_order_does_not_matter() {
    let snapshot = create_snapshot();

    let forward = FilterPipeline::new()
        .add_filter(DecadeExclusionFilter::new(Decade::Seventies))
        .add_filter(DecadeExclusionFilter::new(Decade::Nineties))
        .apply(snapshot.clone());
    let backward = FilterPipeline::new()
        .add_filter(DecadeExclusionFilter::new(Decade::Nineties))
        .add_filter(DecadeExclusionFilter::new(Decade::Seventies))
        .apply(snapshot.clone());

    assert_eq!(ids(&forward), ids(&backward));
    assert_eq!(ids(&forward), vec![1, 3, 5, 6, 7]);
}

#[test]
fn test_derive_visible_matches_manual_pipeline() {
    let snapshot = create_snapshot();
    let mut state = FilterState::default();
    state.set(Decade::Eighties, false);
    state.set(Decade::TwentyTens, false);

    let derived = derive_visible(&snapshot, &state);
    let manual = FilterPipeline::new()
        .add_filter(DecadeExclusionFilter::new(Decade::Eighties))
        .add_filter(DecadeExclusionFilter::new(Decade::TwentyTens))
        .apply(snapshot);

    assert_eq!(ids(&derived), ids(&manual));
    assert_eq!(ids(&derived), vec![1, 2, 4, 6, 7]);
}

#[test]
fn test_each_toggle_removes_only_its_decade() {
    let snapshot = create_snapshot();

    for decade in Decade::ALL {
        let mut state = FilterState::default();
        state.set(decade, false);

        let visible = derive_visible(&snapshot, &state);
        for p in &snapshot {
            let expected = Decade::from_year(p.start_year()) != Some(decade);
            assert_eq!(
                visible.contains(p),
                expected,
                "person {} with {} off",
                p.id,
                decade
            );
        }
    }
}

#[test]
fn test_decade_boundaries() {
    let snapshot = vec![
        person(1, 1969, 12, 31),
        person(2, 1970, 1, 1),
        person(3, 1979, 12, 31),
        person(4, 1980, 1, 1),
    ];
    let mut state = FilterState::default();
    state.include_70s = false;

    assert_eq!(ids(&derive_visible(&snapshot, &state)), vec![1, 4]);
}
