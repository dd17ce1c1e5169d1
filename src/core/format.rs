//! Display helpers for testimonial cards.

#[cfg(test)]
use chrono::Datelike;
use chrono::{Locale, NaiveDate, NaiveTime};

use crate::core::error::ContentError;

/// A calendar month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    pub fn parse(s: &str) -> Result<Self, ContentError> {
        let invalid = || ContentError::InvalidYearMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(invalid)
    }

    #[cfg(test)]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[cfg(test)]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Long Spanish form, e.g. `noviembre de 2024`
    pub fn format_es(&self) -> String {
        self.first_day
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%B de %Y", Locale::es_ES)
            .to_string()
    }
}

/// Render a `YYYY-MM` string for display, falling back to the raw value.
pub fn display_date(raw: &str) -> String {
    YearMonth::parse(raw)
        .map(|ym| ym.format_es())
        .unwrap_or_else(|_| raw.to_string())
}

/// Up to two uppercase initials for an avatar.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Which of the five stars are filled for a rating (clamped to 1..=5).
pub fn star_fills(rating: u8) -> [bool; 5] {
    let filled = rating.clamp(1, 5) as usize;
    std::array::from_fn(|i| i < filled)
}

/// Accessible label for a star row
pub fn rating_label(rating: u8) -> String {
    format!("{} de 5 estrellas", rating.clamp(1, 5))
}
