use std::sync::OnceLock;

use time::{Date, OffsetDateTime, UtcOffset};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Reads the machine's UTC offset. `time` refuses to do this on Unix once
/// other threads exist, so call it first thing in `main`.
pub fn capture_local_offset() {
    match UtcOffset::current_local_offset() {
        Ok(offset) => {
            let _ = LOCAL_OFFSET.set(offset);
        }
        Err(err) => eprintln!("Could not determine local UTC offset, using UTC: {err}"),
    }
}

/// Today's calendar date in the offset captured at startup.
pub fn today() -> Date {
    date_in(OffsetDateTime::now_utc(), LOCAL_OFFSET.get().copied())
}

fn date_in(now: OffsetDateTime, offset: Option<UtcOffset>) -> Date {
    match offset {
        Some(offset) => now.to_offset(offset).date(),
        None => now.date(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset};

    use super::*;

    #[test]
    fn early_morning_in_india_is_already_the_next_day() {
        let now = datetime!(2026-10-17 20:00 UTC);
        assert_eq!(date_in(now, Some(offset!(+5:30))), date!(2026 - 10 - 18));
        assert_eq!(date_in(now, None), date!(2026 - 10 - 17));
    }

    #[test]
    fn negative_offsets_roll_back() {
        let now = datetime!(2026-10-18 02:00 UTC);
        assert_eq!(date_in(now, Some(offset!(-5))), date!(2026 - 10 - 17));
    }
}
