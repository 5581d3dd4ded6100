//! Consecutive-Day Streak
//!
//! Calendar-day streak arithmetic. Time of day never enters the
//! computation; the caller strips it by supplying [`NaiveDate`]s.

use chrono::NaiveDate;

/// Advances a streak for a session starting on `today`.
///
/// Exactly one day since the last session extends the streak, a longer gap
/// resets it to 1, and a same-day repeat leaves it unchanged. A negative
/// day delta (clock moved backward, or a persisted date in the future) also
/// leaves the counter unchanged; only `last_access` advances. Returns the
/// new `(streak_days, last_access_date)` pair.
pub fn advance(streak_days: u32, last_access: NaiveDate, today: NaiveDate) -> (u32, NaiveDate) {
    let diff_days = (today - last_access).num_days();

    let new_streak = if diff_days == 1 {
        streak_days + 1
    } else if diff_days > 1 {
        1
    } else {
        streak_days
    };

    (new_streak, today)
}
