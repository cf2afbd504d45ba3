//! Re-engagement prompt policy.
//!
//! Pure and total: the caller reads and writes the "last open" timestamp;
//! this module only decides.

use chrono::{DateTime, Utc};

/// Number of whole calendar days the user must have been away before a
/// re-engagement prompt is due. The comparison is strict, so exactly this
/// many days never prompts.
const PROMPT_AFTER_DAYS: i64 = 7;

/// Decides whether to show the re-engagement nudge.
///
/// Rules, in order:
/// 1. `last_open` absent: never prompt on the first-ever open.
/// 2. Empty history: never prompt a user with nothing to come back to.
/// 3. Otherwise prompt iff the whole-day difference between `last_open` and
///    `now` is strictly greater than 7.
///
/// The day difference is computed on calendar dates, not elapsed-seconds
/// divided by 86 400: being away 7 days plus a few hours only prompts when
/// those hours push the date difference to 8.
#[must_use]
pub fn should_prompt(
    now: DateTime<Utc>,
    last_open: Option<DateTime<Utc>>,
    history_is_empty: bool,
) -> bool {
    let Some(last_open) = last_open else {
        return false;
    };
    if history_is_empty {
        return false;
    }
    let days = now
        .date_naive()
        .signed_duration_since(last_open.date_naive())
        .num_days();
    days > PROMPT_AFTER_DAYS
}
