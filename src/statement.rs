// ⏰ Statement Math - balance folding and calendar-day filtering
//
// Operations are stamped in UTC. Calendar days are judged in the server's
// local time zone: a day starts at local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::entities::Operation;

// ============================================================================
// BALANCE
// ============================================================================

/// Fold a statement into its balance: credits add, debits subtract.
///
/// `None` when the running total leaves the range of `Decimal`.
pub fn balance(statement: &[Operation]) -> Option<Decimal> {
    statement
        .iter()
        .try_fold(Decimal::ZERO, |acc, op| acc.checked_add(op.signed_amount()))
}

// ============================================================================
// DATE FILTERING
// ============================================================================

/// Formats accepted for the `date` query parameter, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a requested statement date into a calendar day.
///
/// Returns `None` for anything unrecognised; such a date matches no
/// operation.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.with_timezone(&Local).date_naive())
}

/// Local calendar day an operation was recorded on
pub fn local_day(operation: &Operation) -> NaiveDate {
    operation.created_at.with_timezone(&Local).date_naive()
}

/// Operations recorded on `day`, in statement order
pub fn operations_on(statement: &[Operation], day: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| local_day(op) == day)
        .cloned()
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn at_local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_balance_empty_statement() {
        assert_eq!(balance(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_balance_credits_minus_debits() {
        let statement = vec![
            Operation::credit(dec!(100), None),
            Operation::debit(dec!(40)),
            Operation::credit(dec!(2.50), Some("interest".to_string())),
        ];

        assert_eq!(balance(&statement), Some(dec!(62.50)));
    }

    #[test]
    fn test_balance_independent_of_interleaving() {
        let credits = [dec!(100), dec!(35.5), dec!(12)];
        let debits = [dec!(20), dec!(7.25)];
        let expected = credits.iter().sum::<Decimal>() - debits.iter().sum::<Decimal>();

        let credits_first: Vec<Operation> = credits
            .iter()
            .map(|a| Operation::credit(*a, None))
            .chain(debits.iter().map(|a| Operation::debit(*a)))
            .collect();

        let mut interleaved = credits_first.clone();
        interleaved.swap(0, 3);
        interleaved.swap(2, 4);

        let mut reversed = credits_first.clone();
        reversed.reverse();

        assert_eq!(balance(&credits_first), Some(expected));
        assert_eq!(balance(&interleaved), Some(expected));
        assert_eq!(balance(&reversed), Some(expected));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let statement = vec![Operation::debit(dec!(5))];
        assert_eq!(balance(&statement), Some(dec!(-5)));
    }

    #[test]
    fn test_balance_out_of_range_is_none() {
        let statement = vec![
            Operation::credit(Decimal::MAX, None),
            Operation::credit(dec!(1), None),
        ];
        assert_eq!(balance(&statement), None);

        let statement = vec![Operation::debit(Decimal::MAX), Operation::debit(dec!(1))];
        assert_eq!(balance(&statement), None);
    }

    #[test]
    fn test_parse_statement_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);

        assert_eq!(parse_statement_date("2024-01-15"), expected);
        assert_eq!(parse_statement_date(" 2024-01-15 "), expected);
        assert_eq!(parse_statement_date("2024/01/15"), expected);
        assert_eq!(parse_statement_date("2024-01-15 00:00"), expected);
        assert_eq!(parse_statement_date("2024-01-15T08:30:00"), expected);
    }

    #[test]
    fn test_parse_statement_date_rejects_garbage() {
        assert_eq!(parse_statement_date(""), None);
        assert_eq!(parse_statement_date("yesterday"), None);
        assert_eq!(parse_statement_date("2024-13-40"), None);
    }

    #[test]
    fn test_operations_on_same_day_only() {
        let morning = Operation::credit_at(dec!(100), None, at_local(2024, 1, 15, 9, 0));
        let evening = Operation::debit_at(dec!(10), at_local(2024, 1, 15, 23, 30));
        let next_day = Operation::credit_at(dec!(5), None, at_local(2024, 1, 16, 0, 15));
        let statement = vec![morning.clone(), next_day, evening.clone()];

        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(operations_on(&statement, day), vec![morning, evening]);
    }

    #[test]
    fn test_operations_on_no_match_is_empty() {
        let statement = vec![Operation::credit_at(dec!(1), None, at_local(2024, 1, 15, 12, 0))];
        let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

        assert!(operations_on(&statement, day).is_empty());
    }
}
