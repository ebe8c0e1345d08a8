/// Formats an amount with thousands separators and the 원 suffix,
/// e.g. `1000` -> `"1,000원"`.
pub fn format_won(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}

/// Last 4 characters of a phone number, or the whole thing when shorter.
pub fn last4(phone: &str) -> &str {
    let len = phone.chars().count();
    match phone.char_indices().nth(len.saturating_sub(4)) {
        Some((idx, _)) => &phone[idx..],
        None => phone,
    }
}

/// Cuts a string to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
