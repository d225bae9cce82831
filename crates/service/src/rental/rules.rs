//! Pure pricing and state decisions for the rental lifecycle.

use chrono::{DateTime, FixedOffset};

use models::rental;

use crate::errors::ServiceError;

pub const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Price locked in at creation: `price_per_day * days_rented`.
pub fn original_price(price_per_day: i64, days_rented: i32) -> Result<i64, ServiceError> {
    price_per_day
        .checked_mul(i64::from(days_rented))
        .ok_or_else(|| ServiceError::invalid("\"daysRented\" is too large for this game's price"))
}

/// Whole days since `rent_date`, any started day counting as a full one.
/// Zero when `now` is not after `rent_date`.
pub fn elapsed_days(rent_date: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> i64 {
    let ms = (now - rent_date).num_milliseconds();
    if ms <= 0 {
        0
    } else {
        (ms - 1) / DAY_MILLIS + 1
    }
}

/// Fee for the days beyond the committed period only.
pub fn delay_fee(elapsed_days: i64, days_rented: i32, price_per_day: i64) -> i64 {
    let overdue = (elapsed_days - i64::from(days_rented)).max(0);
    overdue.saturating_mul(price_per_day)
}

/// Open rentals of a game must stay below its stock.
pub fn ensure_available(open_rentals: u64, stock_total: i32) -> Result<(), ServiceError> {
    let stock = u64::try_from(stock_total).unwrap_or(0);
    if open_rentals >= stock {
        return Err(ServiceError::Unavailable(format!(
            "all {} copies of this game are rented",
            stock
        )));
    }
    Ok(())
}

pub fn ensure_open(rental: &rental::Model) -> Result<(), ServiceError> {
    if rental.is_open() {
        Ok(())
    } else {
        Err(ServiceError::Conflict("rental already returned".into()))
    }
}

/// Values written when a rental is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub return_date: DateTime<FixedOffset>,
    pub elapsed_days: i64,
    pub delay_fee: i64,
}

/// Close-out computation for a rental returned at `now`.
/// Callers check [`ensure_open`] first.
pub fn settle(rental: &rental::Model, price_per_day: i64, now: DateTime<FixedOffset>) -> Settlement {
    let elapsed = elapsed_days(rental.rent_date, now);
    Settlement {
        return_date: now,
        elapsed_days: elapsed,
        delay_fee: delay_fee(elapsed, rental.days_rented, price_per_day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t0() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap().fixed_offset()
    }

    fn open_rental(days_rented: i32, price_per_day: i64) -> rental::Model {
        rental::Model {
            id: 1,
            customer_id: 1,
            game_id: 1,
            rent_date: t0(),
            days_rented,
            return_date: None,
            original_price: price_per_day * i64::from(days_rented),
            delay_fee: None,
        }
    }

    #[test]
    fn original_price_is_price_times_days() {
        assert_eq!(original_price(10, 3).unwrap(), 30);
        assert_eq!(original_price(1500, 1).unwrap(), 1500);
        assert!(matches!(original_price(i64::MAX, 2), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn elapsed_days_rounds_up_started_days() {
        assert_eq!(elapsed_days(t0(), t0()), 0);
        assert_eq!(elapsed_days(t0(), t0() + Duration::seconds(1)), 1);
        assert_eq!(elapsed_days(t0(), t0() + Duration::days(1)), 1);
        assert_eq!(elapsed_days(t0(), t0() + Duration::days(1) + Duration::milliseconds(1)), 2);
        assert_eq!(elapsed_days(t0(), t0() + Duration::days(5)), 5);
    }

    #[test]
    fn clock_skew_counts_as_zero_days() {
        assert_eq!(elapsed_days(t0(), t0() - Duration::hours(3)), 0);
    }

    #[test]
    fn fee_zero_when_on_time_or_early() {
        assert_eq!(delay_fee(0, 3, 10), 0);
        assert_eq!(delay_fee(2, 3, 10), 0);
        assert_eq!(delay_fee(3, 3, 10), 0);
    }

    #[test]
    fn fee_charges_overage_only() {
        assert_eq!(delay_fee(4, 3, 10), 10);
        assert_eq!(delay_fee(5, 3, 10), 20);
        assert_eq!(delay_fee(13, 3, 250), 2500);
    }

    #[test]
    fn settle_late_and_on_time_examples() {
        let r = open_rental(3, 10);

        let late = settle(&r, 10, t0() + Duration::days(5));
        assert_eq!(late.elapsed_days, 5);
        assert_eq!(late.delay_fee, 20);
        assert_eq!(late.return_date, t0() + Duration::days(5));

        let early = settle(&r, 10, t0() + Duration::days(2));
        assert_eq!(early.delay_fee, 0);
    }

    #[test]
    fn settle_uses_supplied_price() {
        // current game price, not the one frozen in original_price
        let r = open_rental(2, 10);
        let s = settle(&r, 40, t0() + Duration::days(3));
        assert_eq!(s.delay_fee, 40);
    }

    #[test]
    fn closed_rental_is_not_open() {
        let mut r = open_rental(3, 10);
        assert!(ensure_open(&r).is_ok());
        r.return_date = Some(t0() + Duration::days(1));
        r.delay_fee = Some(0);
        assert!(matches!(ensure_open(&r), Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn availability_counts_open_rentals_against_stock() {
        assert!(ensure_available(0, 1).is_ok());
        assert!(ensure_available(2, 3).is_ok());
        assert!(matches!(ensure_available(3, 3), Err(ServiceError::Unavailable(_))));
        assert!(ensure_available(0, 0).is_err());
    }
}
