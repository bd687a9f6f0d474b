use chrono::{Days, NaiveDate};

/// Format of the `TRANSACTION_DATE` column, both on input and on display.
pub const TRANSACTION_DATE_FORMAT: &str = "%m/%d/%y %H:%M";

pub fn yesterday_of(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yesterday_crosses_month_and_year() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("date");
        assert_eq!(yesterday_of(date(2024, 6, 11)), date(2024, 6, 10));
        assert_eq!(yesterday_of(date(2024, 3, 1)), date(2024, 2, 29));
        assert_eq!(yesterday_of(date(2024, 1, 1)), date(2023, 12, 31));
    }
}
