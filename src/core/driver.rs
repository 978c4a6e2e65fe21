use crate::domain::model::GreetingRequest;
use crate::domain::ports::Clock;
use crate::utils::error::{GreeterError, Result};
use chrono::{Days, NaiveDate};

pub const SAMPLE_NAME: &str = "John Doe";
pub const SAMPLE_PLACE: &str = "New York";
pub const SAMPLE_AGE: i64 = 30;
pub const SAMPLE_LOOKBACK_DAYS: u64 = 7;

/// Returns `date` moved back by `days` calendar days.
pub fn days_before(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or(GreeterError::DateOutOfRange { date, days })
}

/// The fixed sample request: a one-week window ending today.
pub fn sample_request(clock: &impl Clock) -> Result<GreetingRequest> {
    let till_date = clock.today();
    let from_date = days_before(till_date, SAMPLE_LOOKBACK_DAYS)?;

    tracing::debug!("Sample window: {} .. {}", from_date, till_date);

    Ok(GreetingRequest::new(
        SAMPLE_NAME,
        SAMPLE_PLACE,
        SAMPLE_AGE,
        from_date,
        till_date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixedClock, SystemClock};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sample_request_values() {
        let request = sample_request(&FixedClock(date(2024, 1, 8))).unwrap();
        assert_eq!(request.name, "John Doe");
        assert_eq!(request.place, "New York");
        assert_eq!(request.age, 30);
        assert_eq!(request.from_date, date(2024, 1, 1));
        assert_eq!(request.till_date, date(2024, 1, 8));
    }

    #[test]
    fn test_from_date_is_seven_days_before_till_date() {
        let todays = [
            date(2024, 1, 3),  // crosses a year
            date(2024, 3, 5),  // crosses a leap day
            date(2023, 3, 5),  // crosses end of a short February
            date(2024, 8, 1),  // crosses a month
            date(2024, 12, 31),
        ];

        for today in todays {
            let request = sample_request(&FixedClock(today)).unwrap();
            assert_eq!(request.till_date, today);
            assert_eq!((request.till_date - request.from_date).num_days(), 7);
        }

        assert_eq!(
            sample_request(&FixedClock(date(2024, 3, 5))).unwrap().from_date,
            date(2024, 2, 27)
        );
    }

    #[test]
    fn test_system_clock_window() {
        let request = sample_request(&SystemClock).unwrap();
        assert_eq!((request.till_date - request.from_date).num_days(), 7);
    }

    #[test]
    fn test_underflow_is_reported() {
        let err = sample_request(&FixedClock(NaiveDate::MIN)).unwrap_err();
        assert!(matches!(
            err,
            GreeterError::DateOutOfRange { days: 7, .. }
        ));
    }
}
