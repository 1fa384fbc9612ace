//! Terminal rendering for the shell.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use people_common::{Person, SelectionChange, Winners};
use pipeline::{Decade, FilterState};

pub fn print_people(people: &[Person], filters: &FilterState) {
    let hidden: Vec<String> = filters.excluded().map(|d| d.to_string()).collect();
    if hidden.is_empty() {
        println!("{}", format!("People ({})", people.len()).bold().blue());
    } else {
        println!(
            "{}",
            format!("People ({}, hiding {})", people.len(), hidden.join(" ")).bold().blue()
        );
    }
    if people.is_empty() {
        println!("  (none)");
    }
    for person in people {
        print_person(person);
    }
}

pub fn print_person(person: &Person) {
    println!(
        "{:>4}  {:<24} {}  {}",
        person.id.to_string().green(),
        person.to_string(),
        person.start_date,
        "★".repeat(person.rating.clamp(0, 10) as usize).yellow()
    );
}

pub fn print_filters(filters: &FilterState) {
    for decade in Decade::ALL {
        let state = if filters.is_included(decade) {
            "on".green()
        } else {
            "off".red()
        };
        println!("  {:<4} {}", decade.label(), state);
    }
}

pub fn print_winners(winners: &Winners) {
    println!(
        "{}",
        format!("Winners for {} ({})", winners.date(), winners.len()).bold().blue()
    );
    if winners.is_empty() {
        println!("  (none)");
    }
    for person in winners.selected_people() {
        print_person(person);
    }
}

pub fn print_refreshed(at: DateTime<Utc>) {
    println!(
        "{} Last refreshed {}",
        "✓".green(),
        at.with_timezone(&Local).format("%H:%M:%S")
    );
}

pub fn describe_change(change: &SelectionChange) -> String {
    match change {
        SelectionChange::Added(person) => format!("{} {}", "+".green(), person),
        SelectionChange::Removed(person) => format!("{} {}", "-".red(), person),
        SelectionChange::Cleared => format!("{} winners cleared", "×".red()),
    }
}
