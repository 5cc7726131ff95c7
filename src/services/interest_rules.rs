//! Interest rule table: the annual rate as a step function of time.
//!
//! Rules are keyed by effective date, so the table is always sorted and the
//! rate on any date is found with a single ordered-map range lookup.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BankError, Result};
use crate::models::format::format_date;
use crate::models::interest_rule::InterestRule;

#[derive(Debug, Clone, Default)]
pub struct InterestRuleTable {
    rules: BTreeMap<NaiveDate, InterestRule>,
}

impl InterestRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the rule effective on `date`, replacing any rule already set
    /// for that exact date.
    ///
    /// Returns the replaced rule, if there was one.
    ///
    /// # Errors
    ///
    /// - `InvalidRule`: rate is not strictly between 0 and 100
    pub fn set_rule(
        &mut self,
        date: NaiveDate,
        rule_id: impl Into<String>,
        rate: Decimal,
    ) -> Result<Option<InterestRule>> {
        if rate <= Decimal::ZERO || rate >= Decimal::ONE_HUNDRED {
            return Err(BankError::InvalidRule(format!(
                "Rate must be greater than 0 and less than 100, got {rate}"
            )));
        }

        let rule = InterestRule {
            effective_date: date,
            rule_id: rule_id.into(),
            annual_rate_percent: rate,
        };
        let rule_id = rule.rule_id.clone();
        let replaced = self.rules.insert(date, rule);

        match &replaced {
            Some(previous) => tracing::info!(
                date = %format_date(date),
                rule_id = %rule_id,
                replaced = %previous.rule_id,
                %rate,
                "Interest rule replaced"
            ),
            None => tracing::info!(
                date = %format_date(date),
                rule_id = %rule_id,
                %rate,
                "Interest rule added"
            ),
        }

        Ok(replaced)
    }

    /// Rate of the latest rule effective on or before `date`.
    pub fn rate_effective_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.rules
            .range(..=date)
            .next_back()
            .map(|(_, rule)| rule.annual_rate_percent)
    }

    /// All rules, earliest effective date first.
    pub fn all_rules_sorted(&self) -> impl Iterator<Item = &InterestRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
