use serde::{Deserialize, Serialize};
use std::fmt;

/// Days of the week a scrim runs on, in fixed Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Two-letter label used on buttons and in the stored day string.
    pub fn abbrev(self) -> &'static str {
        match self {
            Day::Monday => "Mo",
            Day::Tuesday => "Tu",
            Day::Wednesday => "We",
            Day::Thursday => "Th",
            Day::Friday => "Fr",
            Day::Saturday => "Sa",
            Day::Sunday => "Su",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

/// Independent per-day active/inactive flags, default all active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelection {
    active: [bool; 7],
}

impl Default for DaySelection {
    fn default() -> Self {
        Self { active: [true; 7] }
    }
}

impl DaySelection {
    pub fn is_active(&self, day: Day) -> bool {
        self.active[day as usize]
    }

    pub fn toggle(&mut self, day: Day) {
        self.active[day as usize] = !self.active[day as usize];
    }

    pub fn active_days(&self) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|d| self.is_active(*d))
            .collect()
    }

    /// Parse a stored day string like "Mo, Tu, Fr". Unrecognized tokens
    /// are ignored.
    pub fn parse(s: &str) -> Self {
        let mut selection = Self { active: [false; 7] };
        for token in s.split(',') {
            let token = token.trim();
            if let Some(day) = Day::ALL.into_iter().find(|d| d.abbrev() == token) {
                selection.active[day as usize] = true;
            }
        }
        selection
    }
}

impl fmt::Display for DaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbrevs: Vec<&str> = self.active_days().into_iter().map(Day::abbrev).collect();
        write!(f, "{}", abbrevs.join(", "))
    }
}
