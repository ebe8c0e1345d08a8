use diesel::r2d2;
use std::fmt;

/// Outcome of a ledger transfer call that did not yield a parsed success
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Business-level decline carrying the backend's machine-readable code.
    Declined(String),
    /// Non-2xx response whose body was not a coded JSON object; carries the
    /// raw body text.
    Opaque(String),
    /// Network or response-decoding failure. The transfer outcome is unknown
    /// on our side; never conflated with a business decline.
    Transport(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Declined(code) => write!(f, "Ledger declined transfer: {}", code),
            LedgerError::Opaque(raw) => write!(f, "Ledger rejected transfer: {}", raw),
            LedgerError::Transport(e) => write!(f, "Ledger transport error: {}", e),
        }
    }
}

impl std::error::Error for LedgerError {}

#[derive(Debug)]
pub enum ChargeError {
    /// Amount did not parse as an integer, or no target was selected.
    InvalidInput,
    /// Amount parsed but fell outside the allowed charge range.
    AmountOutOfRange,
    /// Operator is not in the admin set.
    Unauthorized,
    /// Target selection token was not of the form `<label>:<id>`.
    InvalidTarget,
    /// Ledger declined the transfer; carries the resolved display message.
    Ledger(String),
    /// Could not reach the ledger or decode its response.
    Transport(String),
    /// Transfer succeeded but the follow-up user lookup came back empty.
    Enrichment { user_id: i64 },
    Database(String),
}

impl fmt::Display for ChargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeError::InvalidInput => write!(f, "Invalid operator input"),
            ChargeError::AmountOutOfRange => write!(f, "Charge amount out of range"),
            ChargeError::Unauthorized => write!(f, "Operator not authorized"),
            ChargeError::InvalidTarget => write!(f, "Malformed target selection"),
            ChargeError::Ledger(msg) => write!(f, "Ledger error: {}", msg),
            ChargeError::Transport(e) => write!(f, "Transport error: {}", e),
            ChargeError::Enrichment { user_id } => {
                write!(f, "User {} missing after successful transfer", user_id)
            }
            ChargeError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl std::error::Error for ChargeError {}

impl From<r2d2::PoolError> for ChargeError {
    fn from(err: r2d2::PoolError) -> Self {
        ChargeError::Database(err.to_string())
    }
}

impl From<diesel::result::Error> for ChargeError {
    fn from(err: diesel::result::Error) -> Self {
        ChargeError::Database(err.to_string())
    }
}

impl ChargeError {
    /// Short reply text shown to the invoking operator. Every workflow
    /// outcome maps to exactly one of these.
    pub fn operator_message(&self) -> String {
        match self {
            ChargeError::InvalidInput => "잘못된 입력입니다.".to_string(),
            ChargeError::AmountOutOfRange => {
                "충전금액은 500원 ~ 50,000원 사이여야 합니다.".to_string()
            }
            ChargeError::Unauthorized => "권한이 없습니다.".to_string(),
            ChargeError::InvalidTarget => "잘못된 유저입니다.".to_string(),
            ChargeError::Ledger(msg) => format!("충전에 실패했습니다. ({})", msg),
            ChargeError::Transport(_) => {
                "충전에 실패했습니다. (결제 서버와 통신하지 못했습니다.)".to_string()
            }
            ChargeError::Enrichment { user_id } => format!(
                "충전은 완료되었으나 사용자({}) 정보를 불러오지 못했습니다.",
                user_id
            ),
            ChargeError::Database(_) => "사용자 정보를 조회하지 못했습니다.".to_string(),
        }
    }
}
