use eyre::Report;
use tracing::{error, info, warn};

use crate::clients::ledger::{LedgerClient, TransferApi};
use crate::config::AdminSet;
use crate::error::{ChargeError, LedgerError};
use crate::models::app_state::AppState;
use crate::models::dtos::{ChargeInput, ChargeReceipt, ChargeRequest};
use crate::repositories::user_directory::{DbUserDirectory, UserDirectory};
use crate::services::catalog;
use crate::utility::last4;

pub const MIN_AMOUNT: i64 = 500;
pub const MAX_AMOUNT: i64 = 50_000;

/// Orchestrates one balance charge: validate, authorize, transfer, report.
/// Holds no mutable state; any number of charges may run concurrently.
pub struct ChargeService<L, U> {
    ledger: L,
    users: U,
    admins: AdminSet,
}

impl ChargeService<LedgerClient, DbUserDirectory> {
    pub fn from_state(state: &AppState) -> Result<Self, Report> {
        Ok(Self::new(
            LedgerClient::from_state(state)?,
            DbUserDirectory::new(state.db.clone()),
            state.config.admins.clone(),
        ))
    }
}

impl<L: TransferApi, U: UserDirectory> ChargeService<L, U> {
    pub fn new(ledger: L, users: U, admins: AdminSet) -> Self {
        Self {
            ledger,
            users,
            admins,
        }
    }

    /// Runs the whole charge for one operator action and produces exactly one
    /// outcome. Every `Err` is terminal for this attempt; nothing is retried.
    pub async fn charge(
        &self,
        operator_id: i64,
        target_token: Option<&str>,
        input: &ChargeInput,
    ) -> Result<ChargeReceipt, ChargeError> {
        // Input checks first: parse failure and range violation stay
        // distinguishable, and neither reaches the network.
        let amount = input
            .amount
            .trim()
            .parse::<i64>()
            .map_err(|_| ChargeError::InvalidInput)?;

        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
            return Err(ChargeError::AmountOutOfRange);
        }

        let token = match target_token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ChargeError::InvalidInput),
        };

        if !self.admins.contains(&operator_id) {
            warn!(operator_id, "Charge attempt by non-admin operator");
            return Err(ChargeError::Unauthorized);
        }

        let target_id = parse_target(token)?;

        let req = ChargeRequest::new(target_id, amount, input.message.as_deref());

        info!(operator_id, target_id, amount, "Issuing transfer");

        let data = match self.ledger.transfer(&req).await {
            Ok(data) => data,
            Err(LedgerError::Declined(code)) => {
                return Err(ChargeError::Ledger(catalog::resolve(&code).to_string()))
            }
            Err(LedgerError::Opaque(raw)) => return Err(ChargeError::Ledger(raw)),
            Err(LedgerError::Transport(e)) => return Err(ChargeError::Transport(e)),
        };

        // The transfer has settled; a failed lookup here is an inconsistency
        // with the store, reported as such rather than as a plain DB error.
        let user = match self.users.find_by_id(target_id) {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!(target_id, "Charged user missing from directory");
                return Err(ChargeError::Enrichment { user_id: target_id });
            }
            Err(e) => {
                error!(error = %e, target_id, "User lookup failed after transfer");
                return Err(ChargeError::Enrichment { user_id: target_id });
            }
        };

        info!(
            target_id,
            transaction_id = %data.transaction.id,
            "Charge completed"
        );

        Ok(ChargeReceipt {
            total_exchange_amount: data.total_exchange_amount,
            transfer_amount: data.transaction.transfer_amount,
            user_id: user.id,
            user_name: user.name,
            user_phone_last4: last4(&user.phone).to_string(),
            transaction_id: data.transaction.id,
            transaction_message: data.transaction.message.unwrap_or_default(),
            transaction_time: data.transaction.time,
        })
    }

    /// Choice labels for the target-user autocomplete, one per directory hit.
    pub fn suggest(&self, fragment: &str) -> Result<Vec<String>, ChargeError> {
        Ok(self
            .users
            .search(fragment)?
            .iter()
            .map(|user| user.choice_label())
            .collect())
    }
}

/// Extracts the user id from a `<label>:<id>` selection token. The label may
/// itself contain colons, so the id is taken after the last one.
fn parse_target(token: &str) -> Result<i64, ChargeError> {
    token
        .rsplit_once(':')
        .and_then(|(_, id)| id.parse::<i64>().ok())
        .ok_or(ChargeError::InvalidTarget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_comes_after_the_last_colon() {
        assert_eq!(parse_target("홍길동 (5678):42").unwrap(), 42);
        assert_eq!(parse_target("a:b (1234):7").unwrap(), 7);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            parse_target("no-separator"),
            Err(ChargeError::InvalidTarget)
        ));
        assert!(matches!(
            parse_target("name:notanumber"),
            Err(ChargeError::InvalidTarget)
        ));
        assert!(matches!(parse_target("name:"), Err(ChargeError::InvalidTarget)));
    }
}
