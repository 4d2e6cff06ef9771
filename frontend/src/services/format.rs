//! Display formatting for money, percentages and durations.

/// "$1,234.56", "-$12.00"
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, remainder)
}

/// One decimal place, e.g. "45.5%"
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed growth, e.g. "+12.3%", or "n/a" when there is nothing to compare
pub fn format_growth(growth: Option<f64>) -> String {
    match growth {
        Some(value) if value > 0.0 => format!("+{:.1}%", value),
        Some(value) => format!("{:.1}%", value),
        None => "n/a".to_string(),
    }
}

/// CSS modifier for a growth figure
pub fn growth_class(growth: Option<f64>) -> &'static str {
    match growth {
        Some(value) if value > 0.0 => "kpi-value positive",
        Some(value) if value < 0.0 => "kpi-value negative",
        _ => "kpi-value",
    }
}

/// "45 min", "1 hr 30 min"; services without a session length are billed monthly
pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        None => "Monthly".to_string(),
        Some(minutes) if minutes < 60 => format!("{} min", minutes),
        Some(minutes) if minutes % 60 == 0 => format!("{} hr", minutes / 60),
        Some(minutes) => format!("{} hr {} min", minutes / 60, minutes % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(29.99), "$29.99");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(Some(12.345)), "+12.3%");
        assert_eq!(format_growth(Some(-50.0)), "-50.0%");
        assert_eq!(format_growth(Some(0.0)), "0.0%");
        assert_eq!(format_growth(None), "n/a");
        assert_eq!(growth_class(Some(-1.0)), "kpi-value negative");
        assert_eq!(growth_class(None), "kpi-value");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "Monthly");
        assert_eq!(format_duration(Some(45)), "45 min");
        assert_eq!(format_duration(Some(60)), "1 hr");
        assert_eq!(format_duration(Some(90)), "1 hr 30 min");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(55.555), "55.6%");
    }
}
