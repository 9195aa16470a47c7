use crate::model::{DraftError, Named};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Day of the week, `0` for Sunday through `6` for Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekDay(u8);

impl WeekDay {
    pub const SUNDAY: WeekDay = WeekDay(0);
    pub const SATURDAY: WeekDay = WeekDay(6);

    pub fn new(code: u8) -> Option<Self> {
        (code <= Self::SATURDAY.0).then_some(WeekDay(code))
    }

    pub fn code(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for WeekDay {
    type Error = DraftError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        WeekDay::new(code).ok_or_else(|| DraftError::InvalidWeekDay(code.to_string()))
    }
}

impl From<WeekDay> for u8 {
    fn from(day: WeekDay) -> Self {
        day.0
    }
}

impl FromStr for WeekDay {
    type Err = DraftError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<u8>()
            .ok()
            .and_then(WeekDay::new)
            .ok_or_else(|| DraftError::InvalidWeekDay(value.to_string()))
    }
}

/// One button of the weekday picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDayOption {
    pub short_label: &'static str,
    pub full_label: &'static str,
    pub value: &'static str,
}

impl WeekDayOption {
    pub fn day(&self) -> Result<WeekDay, DraftError> {
        self.value.parse()
    }
}

impl Named for WeekDayOption {
    fn name(&self) -> &str {
        self.full_label
    }
}

pub const WEEK_DAY_OPTIONS: [WeekDayOption; 7] = [
    WeekDayOption {
        short_label: "D",
        full_label: "Domingo",
        value: "0",
    },
    WeekDayOption {
        short_label: "S",
        full_label: "Segunda",
        value: "1",
    },
    WeekDayOption {
        short_label: "T",
        full_label: "Terça",
        value: "2",
    },
    WeekDayOption {
        short_label: "Q",
        full_label: "Quarta",
        value: "3",
    },
    WeekDayOption {
        short_label: "Q",
        full_label: "Quinta",
        value: "4",
    },
    WeekDayOption {
        short_label: "S",
        full_label: "Sexta",
        value: "5",
    },
    WeekDayOption {
        short_label: "S",
        full_label: "Sábado",
        value: "6",
    },
];

/// The days picked in the weekday toggle group.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct WeekDaySelection {
    days: BTreeSet<WeekDay>,
}

impl WeekDaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the day if absent, removes it otherwise.
    pub fn toggle(&mut self, day: WeekDay) {
        if !self.days.remove(&day) {
            self.days.insert(day);
        }
    }

    pub fn toggled(&self, day: WeekDay) -> Self {
        let mut selection = self.clone();
        selection.toggle(day);
        selection
    }

    pub fn contains(&self, day: WeekDay) -> bool {
        self.days.contains(&day)
    }

    /// Numeric codes in ascending order.
    pub fn codes(&self) -> Vec<u8> {
        self.days.iter().map(WeekDay::code).collect()
    }
}

impl FromIterator<WeekDay> for WeekDaySelection {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        WeekDaySelection {
            days: iter.into_iter().collect(),
        }
    }
}
