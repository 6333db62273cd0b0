//! Display formatting for dollar amounts, counts and percentages.

/// `44967` becomes `"44,967"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

pub fn currency(value: u64) -> String {
    format!("${}", thousands(value))
}

/// Dollars in thousands, rounded: `44967` becomes `"$45k"`.
pub fn currency_k(value: u64) -> String {
    format!("${}k", value / 1000 + u64::from(value % 1000 >= 500))
}

/// `33.0` becomes `"33%"`, `44.2` stays `"44.2%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", decimal(value))
}

/// Shortest rendering with at most one decimal place.
pub fn decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(44_967), "44,967");
        assert_eq!(thousands(229_041), "229,041");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_currency() {
        assert_eq!(currency(3400), "$3,400");
        assert_eq!(currency(104_547), "$104,547");
    }

    #[test]
    fn rounds_to_thousands() {
        assert_eq!(currency_k(44_967), "$45k");
        assert_eq!(currency_k(64_408), "$64k");
        assert_eq!(currency_k(136_913), "$137k");
        assert_eq!(currency_k(499), "$0k");
        assert_eq!(currency_k(500), "$1k");
    }

    #[test]
    fn rounding_to_thousands_handles_the_largest_income() {
        assert_eq!(currency_k(u64::MAX), "$18446744073709552k");
    }

    #[test]
    fn trims_whole_percentages() {
        assert_eq!(percent(33.0), "33%");
        assert_eq!(percent(44.2), "44.2%");
        assert_eq!(percent(59.8), "59.8%");
    }

    #[test]
    fn decimals_keep_one_place() {
        assert_eq!(decimal(33.3), "33.3");
        assert_eq!(decimal(38.0), "38");
        assert_eq!(decimal(30.94), "30.9");
    }
}
