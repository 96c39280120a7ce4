use chrono::{DateTime, Duration, Utc};

/// Decides whether a new announcement may go out at `now`.
///
/// Pure function of elapsed time; the caller owns `last_announced_at` and only
/// moves it forward once a send has actually succeeded. `None` means nothing was
/// announced since the process started.
///
/// # Returns
/// - `true` - At least `min_gap` has elapsed since the last announcement
/// - `false` - The caller should ask the author to wait
pub fn allow(
    now: DateTime<Utc>,
    last_announced_at: Option<DateTime<Utc>>,
    min_gap: Duration,
) -> bool {
    match last_announced_at {
        Some(last) => now - last >= min_gap,
        None => true,
    }
}
