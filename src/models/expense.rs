//! Expense records and their validation
//!
//! An `ExpenseRecord` only comes into existence through
//! `ExpenseDraft::validate`, so every record in the ledger satisfies the
//! field rules below.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::category::{Category, CategoryMode, UnknownCategory};
use super::money::{Money, MoneyParseError};
use super::period::{PeriodParseError, YearMonth};

/// Which amounts are acceptable for a new expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Amount must be greater than zero
    #[default]
    Positive,
    /// Zero is allowed, negatives are not
    NonNegative,
    /// Negative amounts are recorded as refunds
    AllowNegative,
}

impl AmountPolicy {
    /// Check an amount against this policy
    pub fn check(&self, amount: Money) -> Result<(), ValidationError> {
        let ok = match self {
            Self::Positive => amount.is_positive(),
            Self::NonNegative => !amount.is_negative(),
            Self::AllowNegative => true,
        };
        if ok {
            Ok(())
        } else {
            Err(ValidationError::AmountNotAllowed {
                amount,
                policy: *self,
            })
        }
    }
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::NonNegative => write!(f, "non_negative"),
            Self::AllowNegative => write!(f, "allow_negative"),
        }
    }
}

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: YearMonth,
}

impl ExpenseRecord {
    /// Create a record from already-typed fields
    ///
    /// Field rules are not re-checked here; untrusted input should go through
    /// `ExpenseDraft::validate` instead.
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: YearMonth,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            date,
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date, self.description, self.category, self.amount
        )
    }
}

/// Rules applied while validating a draft
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub amount_policy: AmountPolicy,
    pub category_mode: CategoryMode,
}

/// Raw, user-entered fields for a new expense
///
/// Mirrors the add-expense form: everything arrives as text and nothing is
/// trusted until `validate` succeeds.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub year: String,
    pub month: String,
}

impl ExpenseDraft {
    /// Validate the draft into a record
    ///
    /// Required fields are checked for presence first, then amount,
    /// category and date in that order. The first failure wins.
    pub fn validate(&self, rules: &ValidationRules) -> Result<ExpenseRecord, ValidationError> {
        let description = self.description.trim();
        for (field, value) in [
            ("amount", self.amount.as_str()),
            ("description", description),
            ("category", self.category.as_str()),
            ("month", self.month.as_str()),
            ("year", self.year.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }

        let amount = Money::parse(&self.amount)?;
        rules.amount_policy.check(amount)?;

        let category = Category::parse(&self.category, rules.category_mode)?;
        let date = YearMonth::from_parts(&self.year, &self.month)?;

        Ok(ExpenseRecord {
            amount,
            description: description.to_string(),
            category,
            date,
        })
    }
}

/// Why a draft was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("amount: {0}")]
    InvalidAmount(#[from] MoneyParseError),

    #[error("amount {amount} is not allowed under the '{policy}' amount policy")]
    AmountNotAllowed { amount: Money, policy: AmountPolicy },

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("date: {0}")]
    InvalidDate(#[from] PeriodParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(amount: &str, category: &str, year: &str, month: &str) -> ExpenseDraft {
        ExpenseDraft {
            amount: amount.into(),
            description: "Lunch".into(),
            category: category.into(),
            year: year.into(),
            month: month.into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let record = draft("12.50", "food", "2024", "3")
            .validate(&ValidationRules::default())
            .unwrap();
        assert_eq!(record.amount, Money::from_cents(1250));
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.date.to_string(), "2024-03");
        assert_eq!(record.description, "Lunch");
    }

    #[test]
    fn test_description_is_trimmed_and_required() {
        let mut d = draft("1", "Other", "2024", "1");
        d.description = "   ".into();
        assert_eq!(
            d.validate(&ValidationRules::default()),
            Err(ValidationError::EmptyField("description"))
        );

        d.description = "  Bus fare ".into();
        let record = d.validate(&ValidationRules::default()).unwrap();
        assert_eq!(record.description, "Bus fare");
    }

    #[test]
    fn test_missing_fields_reported_before_format_errors() {
        let d = draft("abc", "Other", "2024", "");
        assert_eq!(
            d.validate(&ValidationRules::default()),
            Err(ValidationError::EmptyField("month"))
        );
    }

    #[test]
    fn test_non_numeric_amount() {
        let err = draft("ten", "Other", "2024", "1")
            .validate(&ValidationRules::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAmount(_)));
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let err = draft("50000000000000000", "Other", "2024", "1")
            .validate(&ValidationRules::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidAmount(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_year_beyond_four_digits_rejected() {
        let err = draft("10", "Other", "12345", "1")
            .validate(&ValidationRules::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));
    }

    #[test]
    fn test_non_numeric_month_and_year() {
        let err = draft("10", "Other", "2024", "Jan")
            .validate(&ValidationRules::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));

        let err = draft("10", "Other", "twenty", "1")
            .validate(&ValidationRules::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDate(_)));
    }

    #[test]
    fn test_amount_policies() {
        let positive = ValidationRules::default();
        let non_negative = ValidationRules {
            amount_policy: AmountPolicy::NonNegative,
            ..Default::default()
        };
        let refunds = ValidationRules {
            amount_policy: AmountPolicy::AllowNegative,
            ..Default::default()
        };

        assert!(draft("0", "Other", "2024", "1").validate(&positive).is_err());
        assert!(draft("0", "Other", "2024", "1").validate(&non_negative).is_ok());
        assert!(draft("-5", "Other", "2024", "1").validate(&non_negative).is_err());

        let refund = draft("-5", "Other", "2024", "1").validate(&refunds).unwrap();
        assert_eq!(refund.amount, Money::from_cents(-500));
    }

    #[test]
    fn test_category_mode() {
        let fixed = ValidationRules::default();
        let open = ValidationRules {
            category_mode: CategoryMode::Open,
            ..Default::default()
        };

        let err = draft("5", "Rent", "2024", "1").validate(&fixed).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory(_)));

        let record = draft("5", "Rent", "2024", "1").validate(&open).unwrap();
        assert_eq!(record.category, Category::Custom("Rent".into()));
    }

    #[test]
    fn test_record_json_layout() {
        let record = ExpenseRecord::new(
            Money::from_cents(2400),
            "Snacks",
            Category::Other,
            YearMonth::new(2024, 1).unwrap(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "amount": 24,
                "description": "Snacks",
                "category": "Other",
                "date": "2024-01"
            })
        );
    }
}
