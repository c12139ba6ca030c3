use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Day of the week an alarm repeats on. Ordered Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                name == needle || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| ValidationError::UnknownWeekday(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("Fri".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn set_iterates_sunday_first() {
        let days: BTreeSet<Weekday> = [Weekday::Saturday, Weekday::Sunday, Weekday::Wednesday]
            .into_iter()
            .collect();
        let names: Vec<_> = days.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Sunday", "Wednesday", "Saturday"]);
    }
}
