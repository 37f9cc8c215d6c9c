//! Display Formatting
//!
//! Small string helpers shared by the dashboard components.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Zero-padded 1-based rank, e.g. `#01`
pub fn rank_label(index: usize) -> String {
    format!("#{:02}", index + 1)
}

/// Follower style counts: `1.2w`, `3.4k`, or the plain number
pub fn compact_number(num: u64) -> String {
    if num >= 10_000 {
        format!("{:.1}w", num as f64 / 10_000.0)
    } else if num >= 1_000 {
        format!("{:.1}k", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Whole thousands, e.g. likes `12k`
pub fn thousands_whole(num: u64) -> String {
    format!("{:.0}k", num as f64 / 1_000.0)
}

/// Thousands with one decimal, e.g. comments `1.2k`
pub fn thousands_tenths(num: u64) -> String {
    format!("{:.1}k", num as f64 / 1_000.0)
}

/// `N天前`, `N小时前`, or `刚刚`
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    if elapsed.num_days() > 0 {
        format!("{}天前", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}小时前", elapsed.num_hours())
    } else {
        "刚刚".to_string()
    }
}

/// `5/6`
pub fn slash_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// `5月6日`
pub fn month_day(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}

/// `2024.05`
pub fn month_stamp(date: NaiveDate) -> String {
    format!("{}.{:02}", date.year(), date.month())
}

/// `2024年5月6日`
pub fn full_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// `€9.9B`; unknown currency codes are printed as-is
pub fn currency(value: f64, unit: &str, code: &str) -> String {
    let symbol = match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    };
    format!("{}{}{}", symbol, value, unit)
}

/// Price with thousands separators and at most two decimals
pub fn price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{}{}", sign, grouped),
        f if f % 10 == 0 => format!("{}{}.{}", sign, grouped, f / 10),
        f => format!("{}{}.{:02}", sign, grouped, f),
    }
}

/// Direction of a year-over-year change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Rise,
    Fall,
    Steady,
}

impl Change {
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Change::Rise
        } else if value < 0.0 {
            Change::Fall
        } else {
            Change::Steady
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Change::Rise => "↑",
            Change::Fall => "↓",
            Change::Steady => "→",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Change::Rise => "text-emerald-600",
            Change::Fall => "text-rose-500",
            Change::Steady => "text-neutral-500",
        }
    }
}

/// `↑ 3.2%`, `↓ 18.0%`, `→ 0.0%`
pub fn change_label(value: f64) -> String {
    format!("{} {:.1}%", Change::of(value).arrow(), value.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_rank_label() {
        assert_eq!(rank_label(0), "#01");
        assert_eq!(rank_label(9), "#10");
    }

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1_200), "1.2k");
        assert_eq!(compact_number(820_000), "82.0w");
    }

    #[test]
    fn test_engagement_counts() {
        assert_eq!(thousands_whole(312_000), "312k");
        assert_eq!(thousands_tenths(2_400), "2.4k");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 5, 8, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::days(2), now), "2天前");
        assert_eq!(relative_time(now - Duration::hours(5), now), "5小时前");
        assert_eq!(relative_time(now - Duration::minutes(20), now), "刚刚");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(slash_date(date), "5/6");
        assert_eq!(month_day(date), "5月6日");
        assert_eq!(month_stamp(date), "2024.05");
        assert_eq!(full_date(date), "2024年5月6日");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(9.9, "B", "EUR"), "€9.9B");
        assert_eq!(currency(412.0, "M", "USD"), "$412M");
        assert_eq!(currency(3.0, "B", "JPY"), "JPY3B");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(5350.0), "5,350");
        assert_eq!(price(39500.0), "39,500");
        assert_eq!(price(79.0), "79");
        assert_eq!(price(1234567.5), "1,234,567.5");
        assert_eq!(price(19.99), "19.99");
    }

    #[test]
    fn test_change_label() {
        assert_eq!(change_label(3.21), "↑ 3.2%");
        assert_eq!(change_label(-18.0), "↓ 18.0%");
        assert_eq!(change_label(0.0), "→ 0.0%");
    }
}
