//! Number formatting for metrics and the CSV report.

/// Rounds to an integer and groups thousands with `,`.
///
/// Non-finite values are returned as formatted by `Display`.
///
/// # Examples
///
/// ```
/// use pv_calc::report::format::group_thousands;
///
/// assert_eq!(group_thousands(3600.0), "3,600");
/// assert_eq!(group_thousands(1672.26), "1,672");
/// assert_eq!(group_thousands(-1234567.0), "-1,234,567");
/// ```
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
