//! What a checkout reports back.

use common::{LineId, SaleId, TeaId};
use domain::Money;
use reports::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::state::CheckoutState;

/// A sale the backend accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedSale {
    pub sale_id: SaleId,
    pub tea_id: TeaId,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_amount: Money,
}

impl From<&SaleRecord> for RecordedSale {
    fn from(record: &SaleRecord) -> Self {
        Self {
            sale_id: record.sale_id,
            tea_id: record.tea_id.clone(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            total_amount: record.total_amount,
        }
    }
}

/// A cart line whose sale could not be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleFailure {
    pub line_id: LineId,
    pub tea_id: TeaId,
    pub quantity: u32,
    pub reason: String,
}

/// What happens to the cart when some sales fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PartialFailurePolicy {
    /// Every line stays in the cart, including those whose sale was recorded.
    #[default]
    KeepCart,

    /// Lines whose sale was recorded are removed; only failed lines remain.
    RetainFailed,
}

impl PartialFailurePolicy {
    /// Parses `keep` or `retain-failed`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "keep" | "keep-cart" => Some(PartialFailurePolicy::KeepCart),
            "retain-failed" => Some(PartialFailurePolicy::RetainFailed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartialFailurePolicy::KeepCart => "keep",
            PartialFailurePolicy::RetainFailed => "retain-failed",
        }
    }
}

/// Result of a submitted checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Every sale was recorded. Figures come from the cart as submitted.
    Completed {
        item_count: u64,
        total: Money,
        sales: Vec<RecordedSale>,
    },

    /// `failed` of `attempted` sales were not recorded. Recorded sales are
    /// not rolled back.
    PartialFailure {
        failed: usize,
        attempted: usize,
        failures: Vec<SaleFailure>,
        recorded: Vec<RecordedSale>,
    },
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutOutcome::Completed { .. })
    }

    /// The terminal state this outcome corresponds to.
    pub fn state(&self) -> CheckoutState {
        match self {
            CheckoutOutcome::Completed { .. } => CheckoutState::Succeeded,
            CheckoutOutcome::PartialFailure { .. } => CheckoutState::PartialFailure,
        }
    }

    /// Sales that were recorded, whatever the outcome.
    pub fn recorded(&self) -> &[RecordedSale] {
        match self {
            CheckoutOutcome::Completed { sales, .. } => sales,
            CheckoutOutcome::PartialFailure { recorded, .. } => recorded,
        }
    }

    /// Message shown to the cashier.
    pub fn message(&self) -> String {
        match self {
            CheckoutOutcome::Completed {
                item_count, total, ..
            } => format!("{item_count} items sold for {total}"),
            CheckoutOutcome::PartialFailure {
                failed, attempted, ..
            } => format!("{failed} out of {attempted} sales failed. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            PartialFailurePolicy::parse("keep"),
            Some(PartialFailurePolicy::KeepCart)
        );
        assert_eq!(
            PartialFailurePolicy::parse(" Retain-Failed "),
            Some(PartialFailurePolicy::RetainFailed)
        );
        assert_eq!(PartialFailurePolicy::parse("rollback"), None);
        assert_eq!(PartialFailurePolicy::default(), PartialFailurePolicy::KeepCart);
    }

    #[test]
    fn test_messages() {
        let completed = CheckoutOutcome::Completed {
            item_count: 5,
            total: Money::from_cents(74_150),
            sales: Vec::new(),
        };
        assert_eq!(completed.message(), "5 items sold for Rs. 741.50");
        assert_eq!(completed.state(), CheckoutState::Succeeded);

        let partial = CheckoutOutcome::PartialFailure {
            failed: 1,
            attempted: 2,
            failures: Vec::new(),
            recorded: Vec::new(),
        };
        assert_eq!(partial.message(), "1 out of 2 sales failed. Please try again.");
        assert_eq!(partial.state(), CheckoutState::PartialFailure);
        assert!(!partial.is_completed());
    }

    #[test]
    fn test_outcome_is_tagged_in_json() {
        let partial = CheckoutOutcome::PartialFailure {
            failed: 1,
            attempted: 2,
            failures: Vec::new(),
            recorded: Vec::new(),
        };
        let json = serde_json::to_value(&partial).unwrap();
        assert_eq!(json["status"], "partial_failure");
        assert_eq!(json["failed"], 1);
        assert_eq!(json["attempted"], 2);
    }
}
