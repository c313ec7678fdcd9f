use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

// Timeline arithmetic lives here to keep the generator loop short.

/// Hour of day at which each day's first commit lands.
pub const COMMIT_HOUR: i64 = 20;

/// Gap between consecutive commits on the same day.
pub const COMMIT_SPACING_MINUTES: i64 = 15;

/// Calendar days `[start, start + total_days)`, each anchored at [`COMMIT_HOUR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
  start: NaiveDateTime,
  total_days: u32,
}

impl Timeline {
  pub fn new(now: NaiveDateTime, days_before: u32, days_after: u32) -> Self {
    let anchor = evening_of(now.date());
    Self {
      start: anchor - Duration::days(i64::from(days_before)),
      total_days: days_before.saturating_add(days_after),
    }
  }

  pub fn start(&self) -> NaiveDateTime {
    self.start
  }

  /// Exclusive upper bound of the window.
  pub fn end(&self) -> NaiveDateTime {
    self.start + Duration::days(i64::from(self.total_days))
  }

  pub fn total_days(&self) -> u32 {
    self.total_days
  }

  pub fn days(&self) -> impl Iterator<Item = NaiveDateTime> {
    let start = self.start;
    (0..self.total_days).map(move |n| start + Duration::days(i64::from(n)))
  }
}

fn evening_of(date: NaiveDate) -> NaiveDateTime {
  date.and_time(NaiveTime::MIN) + Duration::hours(COMMIT_HOUR)
}

/// Saturday or Sunday (weekday index >= 5 counting from Monday = 0).
pub fn is_weekend(day: NaiveDateTime) -> bool {
  day.weekday().num_days_from_monday() >= 5
}

/// `count` instants starting at `day`, [`COMMIT_SPACING_MINUTES`] apart.
pub fn commit_instants(day: NaiveDateTime, count: u32) -> impl Iterator<Item = NaiveDateTime> {
  (0..count).map(move |m| day + Duration::minutes(i64::from(m) * COMMIT_SPACING_MINUTES))
}
