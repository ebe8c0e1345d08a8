use once_cell::sync::Lazy;
use std::collections::HashMap;

// Display text for the machine-readable decline codes of the exchange
// backend. Data only; adding a code is a one-line change.
static ERROR_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USER_NOT_FOUND", "해당 사용자가 존재하지 않습니다."),
        ("NOT_A_PERSONAL_BALANCE", "해당 잔고는 개인잔고가 아닙니다."),
        ("BOOTH_BALANCE_NOT_FOUND", "부스 잔고가 존재하지 않습니다."),
        (
            "NOT_A_BOOTH_OPERATIONAL_BALANCE",
            "해당 잔고는 부스 잔고가 아닙니다.",
        ),
        ("PAYMENT_RECORD_NOT_FOUND", "해당 결제내역이 존재하지 않습니다."),
        ("PAYMENT_ALREADY_CANCELLED", "이미 결제가 취소되었습니다."),
        (
            "PAYMENT_CANCELLATION_STATUS_NOT_UPDATED",
            "결제 취소 상태를 업데이트하지 못했습니다.",
        ),
        ("SENDER_ID_EQUALS_RECEIVER_ID", "송금자와 수신자가 일치합니다."),
        ("INVALID_TRANSFER_AMOUNT", "송금액이 올바른지 확인하십시오."),
        ("INVALID_SENDER_ID", "송금자ID가 잘못되었습니다."),
        ("INSUFFICIENT_SENDER_BALANCE", "송금자의 잔액이 부족합니다."),
        ("INVALID_RECEIVER_ID", "수신자ID가 잘못되었습니다."),
        (
            "SENDER_BALANCE_NOT_UPDATED",
            "송금자 금액을 업데이트하지 못했습니다.",
        ),
        (
            "RECEIVER_BALANCE_NOT_UPDATED",
            "수신자 금액을 업데이트하지 못했습니다.",
        ),
        ("NOT_ALLOWED", "허용되지 않은 사용자가 환전을 시도했습니다."),
        ("BOOTH_NOT_FOUND", "부스가 존재하지 않음"),
        ("PAYMENT_NOT_FOUND", "결제정보가 존재하지 않음"),
    ])
});

/// Maps a decline code to its display text. Unknown codes pass through
/// unchanged, so this is total and idempotent.
pub fn resolve(code: &str) -> &str {
    ERROR_MESSAGES.get(code).copied().unwrap_or(code)
}
