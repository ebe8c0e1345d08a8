use serde::{Deserialize, Serialize};

use crate::utility::{format_won, truncate_chars};

/// Maximum length of the free-text charge message, in characters.
pub const MESSAGE_MAX_CHARS: usize = 24;

/// Raw form fields exactly as the operator typed them. Validation happens in
/// the workflow, not here.
#[derive(Debug, Clone, Default)]
pub struct ChargeInput {
    pub amount: String,
    pub message: Option<String>,
}

/// A validated charge, ready for transmission to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    pub user_id: i64,
    pub amount: i64,
    pub message: Option<String>,
}

impl ChargeRequest {
    /// Invariant: callers pass an amount already range-checked; the message
    /// is cut to [`MESSAGE_MAX_CHARS`] here, before it ever leaves the
    /// process.
    pub fn new(user_id: i64, amount: i64, message: Option<&str>) -> Self {
        Self {
            user_id,
            amount,
            message: message
                .filter(|m| !m.is_empty())
                .map(|m| truncate_chars(m, MESSAGE_MAX_CHARS)),
        }
    }
}

/// `data` payload of a successful transfer response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferData {
    pub total_exchange_amount: i64,
    pub transaction: TransactionData,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub id: String,
    pub transfer_amount: i64,
    pub message: Option<String>,
    pub time: String,
}

/// Confirmation handed to the presentation layer after a completed charge.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChargeReceipt {
    pub total_exchange_amount: i64,
    pub transfer_amount: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_phone_last4: String,
    pub transaction_id: String,
    pub transaction_message: String,
    pub transaction_time: String,
}

impl ChargeReceipt {
    /// The six labeled embed fields, in display order.
    pub fn fields(&self) -> [(&'static str, String); 6] {
        [
            ("시스템유동금", format_won(self.total_exchange_amount)),
            ("충전금액", format_won(self.transfer_amount)),
            (
                "충전자",
                format!("{} {} ({})", self.user_id, self.user_name, self.user_phone_last4),
            ),
            ("트랜잭션고유번호", self.transaction_id.clone()),
            ("충전메시지", self.transaction_message.clone()),
            ("충전시간", self.transaction_time.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_cut_to_24_chars() {
        let long = "가".repeat(30);
        let req = ChargeRequest::new(1, 1000, Some(&long));
        assert_eq!(req.message.as_deref(), Some("가".repeat(24).as_str()));
    }

    #[test]
    fn empty_message_becomes_absent() {
        let req = ChargeRequest::new(1, 1000, Some(""));
        assert_eq!(req.message, None);
    }

    #[test]
    fn receipt_fields_are_labeled_and_formatted() {
        let receipt = ChargeReceipt {
            total_exchange_amount: 1_234_567,
            transfer_amount: 1000,
            user_id: 7,
            user_name: "김철수".to_string(),
            user_phone_last4: "5678".to_string(),
            transaction_id: "TX1".to_string(),
            transaction_message: "test".to_string(),
            transaction_time: "2024-05-01T12:00:00".to_string(),
        };

        let fields = receipt.fields();
        assert_eq!(fields[0], ("시스템유동금", "1,234,567원".to_string()));
        assert_eq!(fields[1], ("충전금액", "1,000원".to_string()));
        assert_eq!(fields[2], ("충전자", "7 김철수 (5678)".to_string()));
        assert_eq!(fields[3].1, "TX1");
    }
}
