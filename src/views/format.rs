//! Display formatting shared by the page views.

use chrono::{DateTime, Utc};

use crate::models::Price;

pub const NOT_POSTED: &str = "Not posted";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search or filter criteria";

/// `Jan 15, 02:30 PM`, in UTC
pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %I:%M %p").to_string()
}

pub fn optional_date(at: Option<&DateTime<Utc>>) -> String {
    at.map(date).unwrap_or_else(|| NOT_POSTED.to_string())
}

/// `1250000` -> `1,250,000`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `HKD 45,000/month`
pub fn price(price: &Price) -> String {
    format!("{} {}/{}", price.currency, thousands(price.amount), price.period)
}

/// Revenue in thousands: `540000` -> `HK$540K`
pub fn currency_k(value: u64) -> String {
    format!("HK${:.0}K", value as f64 / 1000.0)
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `make_automation` -> `Make Automation`
pub fn title_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Horizontal bar scaled so `max` fills `width` cells
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_render_month_day_and_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(date(&at), "Jan 15, 02:30 PM");
        let morning = Utc.with_ymd_and_hms(2024, 1, 5, 9, 5, 0).unwrap();
        assert_eq!(date(&morning), "Jan 5, 09:05 AM");
    }

    #[test]
    fn missing_date_falls_back() {
        assert_eq!(optional_date(None), "Not posted");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(45_000), "45,000");
        assert_eq!(thousands(1_125_000), "1,125,000");
    }

    #[test]
    fn prices_and_money() {
        let rent = Price {
            amount: 85_000,
            currency: "HKD".into(),
            period: "month".into(),
        };
        assert_eq!(price(&rent), "HKD 85,000/month");
        assert_eq!(currency_k(540_000), "HK$540K");
        assert_eq!(currency_k(1_125_000), "HK$1125K");
        assert_eq!(percent(24.5), "24.5%");
        assert_eq!(percent(28.0), "28.0%");
    }

    #[test]
    fn service_keys_become_titles() {
        assert_eq!(title_case("make_automation"), "Make Automation");
        assert_eq!(title_case("crm"), "Crm");
    }

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(0.0, 100.0, 10), "");
        assert_eq!(bar(1.0, 1000.0, 10).chars().count(), 1);
    }
}
