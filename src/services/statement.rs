//! Monthly statement generation.
//!
//! A statement lists the account's transactions dated in the month, in
//! ledger order, with a running balance that starts at zero. It then adds a
//! single interest row dated on the last day of the month.
//!
//! # Interest
//!
//! For every day of the month the rate effective on that day is looked up.
//! Each day with a rate accrues `balance * rate / 100 / 365`, where
//! `balance` is the closing balance of the month's transactions. The total
//! is rounded once, to cents, half away from zero.
//!
//! The balance basis only covers the month's own transactions; earlier
//! months do not carry over into it.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BankError, Result};
use crate::models::format::{format_period, month_bounds};
use crate::models::statement::{Statement, StatementRow};
use crate::services::interest_rules::InterestRuleTable;
use crate::services::ledger::Ledger;

/// Day-count basis for daily accrual.
pub const DAYS_IN_YEAR: u32 = 365;

/// Builds statements from a ledger and a rule table.
#[derive(Debug, Clone, Copy)]
pub struct StatementGenerator<'a> {
    ledger: &'a Ledger,
    rules: &'a InterestRuleTable,
}

impl<'a> StatementGenerator<'a> {
    pub fn new(ledger: &'a Ledger, rules: &'a InterestRuleTable) -> Self {
        Self { ledger, rules }
    }

    /// Statement for `account_id` in `year`/`month`.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: month is not a valid calendar month
    /// - `UnknownAccount`: the account has no transactions at all
    /// - `Overflow`: the month's balance or interest leaves the `Decimal` range
    pub fn generate(&self, account_id: &str, year: i32, month: u32) -> Result<Statement> {
        let (first_day, last_day) = month_bounds(year, month).ok_or_else(|| {
            BankError::InvalidRequest(format!("Invalid statement month {year}-{month}"))
        })?;

        let transactions = self.ledger.transactions_in_month(account_id, year, month)?;

        let mut balance = Decimal::ZERO;
        let mut rows = Vec::new();
        for transaction in transactions {
            balance = balance
                .checked_add(transaction.signed_amount())
                .ok_or_else(|| overflow("Statement balance", account_id))?;
            rows.push(StatementRow::from_transaction(transaction, balance));
        }

        let interest = self.accrue_interest(balance, first_day, last_day)?;
        if let Some(interest) = interest {
            balance = balance
                .checked_add(interest)
                .ok_or_else(|| overflow("Interest", account_id))?;
            rows.push(StatementRow::interest(last_day, interest, balance));
        }

        tracing::debug!(
            account = account_id,
            period = %format_period(year, month),
            rows = rows.len(),
            interest = ?interest,
            "Statement generated"
        );

        Ok(Statement {
            account: account_id.to_string(),
            year,
            month,
            rows,
            interest,
            closing_balance: balance,
        })
    }

    /// Total interest for the month, or `None` if no rule was effective on
    /// any of its days.
    fn accrue_interest(
        &self,
        balance: Decimal,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Option<Decimal>> {
        let mut accrued: Option<Decimal> = None;

        for day in first_day.iter_days().take_while(|day| *day <= last_day) {
            if let Some(rate) = self.rules.rate_effective_on(day) {
                let total = daily_interest(balance, rate)
                    .and_then(|daily| accrued.unwrap_or(Decimal::ZERO).checked_add(daily))
                    .ok_or_else(|| {
                        BankError::Overflow(format!("Interest on a balance of {balance}"))
                    })?;
                accrued = Some(total);
            }
        }

        Ok(accrued.map(round_interest))
    }
}

/// One day of interest on `balance` at `annual_rate_percent`, or `None` if
/// the product leaves the `Decimal` range.
pub fn daily_interest(balance: Decimal, annual_rate_percent: Decimal) -> Option<Decimal> {
    balance
        .checked_mul(annual_rate_percent)?
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_div(Decimal::from(DAYS_IN_YEAR))
}

fn overflow(what: &str, account_id: &str) -> BankError {
    BankError::Overflow(format!("{what} for {account_id} is out of range"))
}

/// Round to cents, half away from zero.
pub fn round_interest(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::StatementRowKind;
    use crate::models::transaction::TransactionKind;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference_rules() -> InterestRuleTable {
        let mut rules = InterestRuleTable::new();
        rules.set_rule(date(2023, 1, 1), "RULE01", dec!(1.90)).unwrap();
        rules.set_rule(date(2023, 5, 20), "RULE02", dec!(1.95)).unwrap();
        rules.set_rule(date(2023, 6, 15), "RULE03", dec!(2.20)).unwrap();
        rules
    }

    fn reference_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("AC001", date(2023, 5, 5), TransactionKind::Deposit, dec!(100.00))
            .unwrap();
        ledger
            .add_transaction("AC001", date(2023, 6, 1), TransactionKind::Withdrawal, dec!(20.00))
            .unwrap();
        ledger
    }

    #[test]
    fn june_statement_matches_reference_example() {
        let ledger = reference_ledger();
        let rules = reference_rules();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 6)
            .unwrap();

        assert_eq!(statement.rows.len(), 2);

        let withdrawal = &statement.rows[0];
        assert_eq!(withdrawal.id, "20230601-02");
        assert_eq!(withdrawal.kind, StatementRowKind::Withdrawal);
        assert_eq!(withdrawal.amount, dec!(20.00));
        assert_eq!(withdrawal.balance_after, dec!(-20.00));

        // 14 days at 1.95% and 16 days at 2.20% on -20.00
        let interest = &statement.rows[1];
        assert_eq!(interest.date, date(2023, 6, 30));
        assert_eq!(interest.id, "");
        assert_eq!(interest.kind, StatementRowKind::Interest);
        assert_eq!(interest.amount, dec!(-0.03));
        assert_eq!(interest.balance_after, dec!(-20.03));

        assert_eq!(statement.interest, Some(dec!(-0.03)));
        assert_eq!(statement.closing_balance, dec!(-20.03));
    }

    #[test]
    fn may_statement_prorates_across_rule_change() {
        let ledger = reference_ledger();
        let rules = reference_rules();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 5)
            .unwrap();

        // 19 days at 1.90% and 12 days at 1.95% on 100.00 = 0.16301...
        assert_eq!(statement.interest, Some(dec!(0.16)));
        assert_eq!(statement.closing_balance, dec!(100.16));
        assert_eq!(statement.rows.last().map(|r| r.date), Some(date(2023, 5, 31)));
    }

    #[test]
    fn empty_month_without_rules_has_no_rows() {
        let ledger = reference_ledger();
        let rules = InterestRuleTable::new();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 7)
            .unwrap();
        assert!(statement.rows.is_empty());
        assert_eq!(statement.interest, None);
        assert_eq!(statement.closing_balance, Decimal::ZERO);
    }

    #[test]
    fn empty_month_with_rules_has_zero_interest_row() {
        let ledger = reference_ledger();
        let rules = reference_rules();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 7)
            .unwrap();
        assert_eq!(statement.rows.len(), 1);
        assert_eq!(statement.rows[0].kind, StatementRowKind::Interest);
        assert_eq!(statement.rows[0].amount, Decimal::ZERO);
        assert_eq!(statement.rows[0].date, date(2023, 7, 31));
    }

    #[test]
    fn no_interest_row_when_rules_start_after_month() {
        let ledger = reference_ledger();
        let mut rules = InterestRuleTable::new();
        rules.set_rule(date(2023, 7, 1), "LATER", dec!(5.00)).unwrap();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 6)
            .unwrap();
        assert_eq!(statement.rows.len(), 1);
        assert_eq!(statement.interest, None);
        assert_eq!(statement.closing_balance, dec!(-20.00));
    }

    #[test]
    fn rows_follow_ledger_order_not_dates() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("AC001", date(2023, 6, 20), TransactionKind::Deposit, dec!(50.00))
            .unwrap();
        ledger
            .add_transaction("AC001", date(2023, 6, 3), TransactionKind::Withdrawal, dec!(10.00))
            .unwrap();
        let rules = InterestRuleTable::new();
        let statement = StatementGenerator::new(&ledger, &rules)
            .generate("AC001", 2023, 6)
            .unwrap();
        let ids: Vec<&str> = statement.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["20230620-01", "20230603-02"]);
        assert_eq!(statement.rows[1].balance_after, dec!(40.00));
    }

    #[test]
    fn unknown_account_is_an_error() {
        let ledger = Ledger::new();
        let rules = reference_rules();
        let result = StatementGenerator::new(&ledger, &rules).generate("AC404", 2023, 6);
        assert!(matches!(result, Err(BankError::UnknownAccount(_))));
    }

    #[test]
    fn invalid_month_is_an_error() {
        let ledger = reference_ledger();
        let rules = reference_rules();
        let result = StatementGenerator::new(&ledger, &rules).generate("AC001", 2023, 13);
        assert!(matches!(result, Err(BankError::InvalidRequest(_))));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_interest(dec!(0.125)), dec!(0.13));
        assert_eq!(round_interest(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round_interest(dec!(0.135)), dec!(0.14));
        assert_eq!(round_interest(dec!(0.1249999)), dec!(0.12));
        assert_eq!(round_interest(dec!(1.005)), dec!(1.01));
    }

    #[test]
    fn daily_interest_uses_365_day_basis() {
        assert_eq!(daily_interest(dec!(365.00), dec!(10)), Some(dec!(0.1)));
        assert_eq!(daily_interest(Decimal::MAX, dec!(50)), None);
    }

    #[test]
    fn accrued_midpoint_rounds_away_from_zero() {
        // One day at 10% on 18.25 accrues exactly 0.005
        let mut rules = InterestRuleTable::new();
        rules.set_rule(date(2023, 6, 30), "LASTDAY", dec!(10)).unwrap();

        let mut ledger = Ledger::new();
        ledger
            .add_transaction("AC001", date(2023, 6, 5), TransactionKind::Deposit, dec!(18.25))
            .unwrap();
        ledger
            .add_transaction("AC002", date(2023, 5, 5), TransactionKind::Deposit, dec!(18.25))
            .unwrap();
        ledger
            .add_transaction("AC002", date(2023, 6, 5), TransactionKind::Withdrawal, dec!(18.25))
            .unwrap();

        let generator = StatementGenerator::new(&ledger, &rules);

        let positive = generator.generate("AC001", 2023, 6).unwrap();
        assert_eq!(positive.interest, Some(dec!(0.01)));
        assert_eq!(positive.closing_balance, dec!(18.26));

        let negative = generator.generate("AC002", 2023, 6).unwrap();
        assert_eq!(negative.interest, Some(dec!(-0.01)));
        assert_eq!(negative.closing_balance, dec!(-18.26));
    }

    #[test]
    fn interest_overflow_is_an_error() {
        let mut rules = InterestRuleTable::new();
        rules.set_rule(date(2023, 1, 1), "HIGH", dec!(50)).unwrap();

        let mut ledger = Ledger::new();
        ledger
            .add_transaction(
                "AC001",
                date(2023, 6, 1),
                TransactionKind::Deposit,
                dec!(10000000000000000000000000000),
            )
            .unwrap();

        let result = StatementGenerator::new(&ledger, &rules).generate("AC001", 2023, 6);
        assert!(matches!(result, Err(BankError::Overflow(_))));
    }

    #[test]
    fn month_balance_overflow_is_an_error() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction("AC001", date(2023, 1, 10), TransactionKind::Deposit, Decimal::MAX)
            .unwrap();
        ledger
            .add_transaction("AC001", date(2023, 2, 10), TransactionKind::Withdrawal, Decimal::MAX)
            .unwrap();
        // Accepted by the ledger, but January alone now sums past the range
        ledger
            .add_transaction("AC001", date(2023, 1, 20), TransactionKind::Deposit, Decimal::MAX)
            .unwrap();

        let rules = InterestRuleTable::new();
        let generator = StatementGenerator::new(&ledger, &rules);
        assert!(matches!(
            generator.generate("AC001", 2023, 1),
            Err(BankError::Overflow(_))
        ));
        assert_eq!(
            generator.generate("AC001", 2023, 2).unwrap().closing_balance,
            -Decimal::MAX
        );
    }
}
