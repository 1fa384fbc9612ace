//! Decade buckets and the toggle set that drives the visible view.

use people_common::Person;
use std::fmt;

/// A ten-year span the view can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decade {
    Seventies,
    Eighties,
    Nineties,
    TwoThousands,
    TwentyTens,
}

impl Decade {
    /// Every filterable decade, oldest first.
    pub const ALL: [Decade; 5] = [
        Decade::Seventies,
        Decade::Eighties,
        Decade::Nineties,
        Decade::TwoThousands,
        Decade::TwentyTens,
    ];

    /// First year of the decade (1970 for the seventies).
    pub fn start_year(self) -> i32 {
        match self {
            Decade::Seventies => 1970,
            Decade::Eighties => 1980,
            Decade::Nineties => 1990,
            Decade::TwoThousands => 2000,
            Decade::TwentyTens => 2010,
        }
    }

    /// The decade `year` falls in, if it is one the view filters on.
    pub fn from_year(year: i32) -> Option<Decade> {
        let start = year.div_euclid(10) * 10;
        Decade::ALL.into_iter().find(|d| d.start_year() == start)
    }

    /// Short label used by hosts ("70s", "00s", ...).
    pub fn label(self) -> &'static str {
        match self {
            Decade::Seventies => "70s",
            Decade::Eighties => "80s",
            Decade::Nineties => "90s",
            Decade::TwoThousands => "00s",
            Decade::TwentyTens => "10s",
        }
    }

    /// Parse a label as produced by [`Decade::label`], also accepting the
    /// full start year ("1970").
    pub fn from_label(label: &str) -> Option<Decade> {
        Decade::ALL
            .into_iter()
            .find(|d| d.label() == label || d.start_year().to_string() == label)
    }

    /// Whether `person` started in this decade.
    pub fn contains(self, person: &Person) -> bool {
        person.decade() == self.start_year()
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five include toggles, one per decade. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub include_70s: bool,
    pub include_80s: bool,
    pub include_90s: bool,
    pub include_00s: bool,
    pub include_10s: bool,
}

impl FilterState {
    pub fn is_included(&self, decade: Decade) -> bool {
        match decade {
            Decade::Seventies => self.include_70s,
            Decade::Eighties => self.include_80s,
            Decade::Nineties => self.include_90s,
            Decade::TwoThousands => self.include_00s,
            Decade::TwentyTens => self.include_10s,
        }
    }

    pub fn set(&mut self, decade: Decade, include: bool) {
        let slot = match decade {
            Decade::Seventies => &mut self.include_70s,
            Decade::Eighties => &mut self.include_80s,
            Decade::Nineties => &mut self.include_90s,
            Decade::TwoThousands => &mut self.include_00s,
            Decade::TwentyTens => &mut self.include_10s,
        };
        *slot = include;
    }

    /// Turn every toggle back on.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn all_included(&self) -> bool {
        Decade::ALL.into_iter().all(|d| self.is_included(d))
    }

    /// Decades currently toggled off, oldest first.
    pub fn excluded(&self) -> impl Iterator<Item = Decade> + '_ {
        Decade::ALL.into_iter().filter(|d| !self.is_included(*d))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            include_70s: true,
            include_80s: true,
            include_90s: true,
            include_00s: true,
            include_10s: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_year() {
        assert_eq!(Decade::from_year(1970), Some(Decade::Seventies));
        assert_eq!(Decade::from_year(1979), Some(Decade::Seventies));
        assert_eq!(Decade::from_year(2000), Some(Decade::TwoThousands));
        assert_eq!(Decade::from_year(2019), Some(Decade::TwentyTens));
        assert_eq!(Decade::from_year(1969), None);
        assert_eq!(Decade::from_year(2020), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for decade in Decade::ALL {
            assert_eq!(Decade::from_label(decade.label()), Some(decade));
        }
        assert_eq!(Decade::from_label("1990"), Some(Decade::Nineties));
        assert_eq!(Decade::from_label("60s"), None);
    }

    #[test]
    fn test_filter_state_defaults_and_reset() {
        let mut state = FilterState::default();
        assert!(state.all_included());
        assert_eq!(state.excluded().count(), 0);

        state.set(Decade::Eighties, false);
        state.set(Decade::TwentyTens, false);
        assert!(!state.include_80s);
        assert_eq!(
            state.excluded().collect::<Vec<_>>(),
            vec![Decade::Eighties, Decade::TwentyTens]
        );

        state.reset();
        assert!(state.all_included());
    }
}
