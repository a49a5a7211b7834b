use crate::domain::quote::{LoanQuoteResult, to_money};
use rust_decimal::Decimal;

/// Formats an amount as rupees with Indian digit grouping.
///
/// The last three digits form one group and the rest are grouped in pairs:
/// `123456.789` becomes `₹1,23,456.79`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = to_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (whole, paise) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}₹{}.{paise}", group_indian(whole))
}

/// The line shown under the calculator once a quote has been made.
pub fn emi_message(result: &LoanQuoteResult) -> String {
    format!("Your Monthly EMI: {}", format_inr(result.monthly_installment))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
