//! Birthdate value object and date parsing.

use super::errors::ValidationError;
use chrono::{Datelike, Local, Months, NaiveDate};

/// Date formats accepted from user input, tried in order.
const INPUT_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-supplied date (`dd/mm/yyyy`, `yyyy-mm-dd` or `dd-mm-yyyy`).
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

/// A birthdate that is not in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Validate against the current local date.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_as_of(date, today())
    }

    /// Validate against an explicit "today". A birthdate equal to today is accepted.
    pub fn new_as_of(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureBirthdate(date));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whole years elapsed on `today`.
    ///
    /// One is subtracted when this year's anniversary has not been reached yet.
    /// A 29 February birthdate has its anniversary on 28 February in common years.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let years = today.year() - self.0.year();
        if years <= 0 {
            return 0;
        }
        let years = years as u32;
        let before_anniversary = self
            .0
            .checked_add_months(Months::new(years * 12))
            .map_or(false, |anniversary| today < anniversary);

        if before_anniversary {
            years - 1
        } else {
            years
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthdate_today_accepted_tomorrow_rejected() {
        let today = date(2024, 6, 15);
        assert!(Birthdate::new_as_of(today, today).is_ok());
        assert_eq!(
            Birthdate::new_as_of(date(2024, 6, 16), today),
            Err(ValidationError::FutureBirthdate(date(2024, 6, 16)))
        );
    }

    #[test]
    fn test_birthdate_against_local_clock() {
        let now = today();
        assert!(Birthdate::new(now).is_ok());
        assert!(Birthdate::new(now.succ_opt().unwrap()).is_err());
    }

    #[test]
    fn test_age_before_and_after_anniversary() {
        let born = Birthdate::new_as_of(date(1990, 7, 22), date(2024, 1, 1)).unwrap();
        assert_eq!(born.age_on(date(2024, 7, 21)), 33);
        assert_eq!(born.age_on(date(2024, 7, 22)), 34);
        assert_eq!(born.age_on(date(2024, 12, 31)), 34);
    }

    #[test]
    fn test_age_for_leap_day_birthdate() {
        let born = Birthdate::new_as_of(date(2000, 2, 29), date(2024, 1, 1)).unwrap();
        assert_eq!(born.age_on(date(2023, 2, 27)), 22);
        assert_eq!(born.age_on(date(2023, 2, 28)), 23);
        assert_eq!(born.age_on(date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_age_born_today_is_zero() {
        let today = date(2024, 3, 1);
        let born = Birthdate::new_as_of(today, today).unwrap();
        assert_eq!(born.age_on(today), 0);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("14/02/1991"), Some(date(1991, 2, 14)));
        assert_eq!(parse_date(" 1991-02-14 "), Some(date(1991, 2, 14)));
        assert_eq!(parse_date("14-02-1991"), Some(date(1991, 2, 14)));
        assert_eq!(parse_date("31/02/1991"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }
}
