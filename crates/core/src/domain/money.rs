// Currency formatting for aggregated prices

/// Render an amount of cents as a two-decimal string ("11.17", "-0.05")
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
