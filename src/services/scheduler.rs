use std::time::Duration as StdDuration;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::info;

use crate::config::DISPLAY_TZ;
use crate::errors::{DigestError, DigestResult};

/// Local wall-clock hour of the daily run
pub const RUN_HOUR: u32 = 8;

/// Next daily trigger at `RUN_HOUR`:00 local time: today's if `now` is
/// still before it, otherwise tomorrow's.
pub fn next_run_time(now: &DateTime<Tz>) -> DigestResult<DateTime<Tz>> {
    let today = now.date_naive();
    let run = run_at_on(today, now.timezone())?;

    if *now < run {
        return Ok(run);
    }

    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| DigestError::Schedule(format!("no day after {}", today)))?;
    run_at_on(tomorrow, now.timezone())
}

fn run_at_on(date: NaiveDate, tz: Tz) -> DigestResult<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(RUN_HOUR, 0, 0)
        .ok_or_else(|| DigestError::Schedule(format!("invalid run hour {}", RUN_HOUR)))?;

    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| {
            DigestError::Schedule(format!("{} {} does not exist in {}", date, time, tz))
        })
}

/// Sleep until each daily trigger and invoke `job`, forever.
///
/// An error from `job` ends the loop and is returned to the caller.
pub fn run_forever<J>(mut job: J) -> DigestResult<()>
where
    J: FnMut() -> DigestResult<()>,
{
    println!(
        "Scheduler started. Daily digest will run at {}:00 AM {}.",
        RUN_HOUR, DISPLAY_TZ
    );

    loop {
        let now = Utc::now().with_timezone(&DISPLAY_TZ);
        let run_at = next_run_time(&now)?;
        let wait = sleep_duration(&now, &run_at);

        println!(
            "Next run at {} ({}s from now).",
            run_at.to_rfc3339(),
            wait.as_secs()
        );
        info!(run_at = %run_at.to_rfc3339(), wait_secs = wait.as_secs(), "Waiting for next run");

        std::thread::sleep(wait);
        job()?;
    }
}

/// Whole seconds until `run_at`, never less than one
pub fn sleep_duration(now: &DateTime<Tz>, run_at: &DateTime<Tz>) -> StdDuration {
    let secs = (*run_at - *now).num_seconds().max(1);
    StdDuration::from_secs(secs as u64)
}
