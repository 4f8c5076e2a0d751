use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone};
use tracing::{error, info};

use crate::store::SeqStore;

const ONE_DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Time left until the next midnight in `now`'s time zone.
///
/// When a DST jump skips midnight the first instant that exists on the new
/// day is used instead.
pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|day| start_of_day(&now.timezone(), day));
    match midnight {
        Some(midnight) => (midnight - now.clone()).to_std().unwrap_or_default(),
        None => ONE_DAY,
    }
}

/// First existing local instant of `day`, searched in half hour steps.
fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<Tz>> {
    let mut local = day.and_hms_opt(0, 0, 0)?;
    while local.date() == day {
        if let Some(instant) = tz.from_local_datetime(&local).earliest() {
            return Some(instant);
        }
        local += TimeDelta::minutes(30);
    }
    None
}

/// Zero the counter at every local midnight. Never returns.
pub async fn run(store: Arc<SeqStore>) {
    loop {
        let wait = until_next_midnight(&Local::now());
        info!("process seq reset after {:?}", wait);
        tokio::time::sleep(wait).await;

        if let Err(err) = store.reset().await {
            error!("write bizCfg error: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use chrono_tz::America::Santiago;

    use super::*;

    #[test]
    fn test_until_next_midnight_utc() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 0).unwrap();
        assert_eq!(until_next_midnight(&now), Duration::from_secs(60));

        let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        assert_eq!(until_next_midnight(&now), ONE_DAY);
    }

    #[test]
    fn test_until_next_midnight_offset() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 12, 31, 12, 30, 0).unwrap();
        assert_eq!(
            until_next_midnight(&now),
            Duration::from_secs(11 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn test_until_next_midnight_skipped_by_dst() {
        // Chile moves 2026-09-06 00:00 -04 straight to 01:00 -03
        let now = Santiago.with_ymd_and_hms(2026, 9, 5, 22, 0, 0).unwrap();
        assert_eq!(until_next_midnight(&now), Duration::from_secs(2 * 3600));

        let fires = now + TimeDelta::from_std(until_next_midnight(&now)).unwrap();
        assert_eq!(fires, Santiago.with_ymd_and_hms(2026, 9, 6, 1, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_plain() {
        let day = NaiveDate::from_ymd_opt(2026, 9, 7).unwrap();
        let start = start_of_day(&Santiago, day).unwrap();
        assert_eq!(start.naive_local(), day.and_hms_opt(0, 0, 0).unwrap());
    }
}
