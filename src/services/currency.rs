pub const CURRENCY_SYMBOL: &str = "₹";
const CARD_MASK: &str = "****";

/// Formats an amount as rupees with en-IN digit grouping and two decimals,
/// e.g. `1234567.5` becomes `₹12,34,567.50`.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", CURRENCY_SYMBOL, sign, group_en_in(integer), fraction)
}

// Last three digits form one group, everything before is grouped in pairs.
fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead > 0 {
        grouped.push_str(&head[..lead]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

pub fn mask_card(last_four: &str) -> String {
    format!("{} {}", CARD_MASK, last_four)
}
