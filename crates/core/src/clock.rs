//! Current-date providers.
//!
//! Domain logic that needs "today" takes a [`Clock`] instead of reading the
//! system clock directly. Production code passes [`SystemClock`]; tests and
//! "as of" evaluations pass a [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Granularity is one calendar day. There is no time-of-day component and no
/// timezone arithmetic beyond whatever the provider uses to pick the date.
pub trait Clock: Send + Sync {
    /// The date to treat as "today".
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Production clock: the host's local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for FixedClock {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_clock_always_returns_its_date() {
        let clock = FixedClock::new(date(2022, 2, 2));
        assert_eq!(clock.today(), date(2022, 2, 2));
        assert_eq!(clock.today(), clock.date());
    }

    #[test]
    fn clock_works_through_references_and_trait_objects() {
        let clock = FixedClock::from(date(2022, 2, 6));
        let by_ref: &FixedClock = &clock;
        let dynamic: &dyn Clock = &clock;

        assert_eq!(by_ref.today(), date(2022, 2, 6));
        assert_eq!(dynamic.today(), date(2022, 2, 6));
    }

    #[test]
    fn system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();

        // Tolerate the test straddling midnight.
        assert!(before <= today && today <= after);
    }
}
