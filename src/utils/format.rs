use crate::domain::model::{Eligibility, StatusColor, ELIGIBILITY_WINDOW_DAYS};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// 伺服器以 "None"、"Never" 或空值表示沒有日期
fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "None" && *s != "Never")
}

/// 解析伺服器回傳的日期字串，沒有時區的一律視為 UTC
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // Flask jsonify 的預設日期格式
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// 例如 `15 Jan 2024`
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = present(value) else {
        return "Never".to_string();
    };

    match parse_date(value) {
        Some(dt) => dt.format("%-d %b %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

pub fn stock_status_color(units: i64) -> StatusColor {
    if units < 5 {
        StatusColor::Red
    } else if units < 10 {
        StatusColor::Yellow
    } else {
        StatusColor::Green
    }
}

pub fn eligibility_status(last_donation: Option<&str>, now: DateTime<Utc>) -> Eligibility {
    let Some(value) = present(last_donation) else {
        return Eligibility::Eligible;
    };
    let Some(last) = parse_date(value) else {
        tracing::debug!("Unparseable last donation date: {}", value);
        return Eligibility::Unknown;
    };

    let days_since = (now - last).num_milliseconds().div_euclid(MILLIS_PER_DAY);
    if days_since >= ELIGIBILITY_WINDOW_DAYS {
        Eligibility::Eligible
    } else {
        Eligibility::Wait {
            days: ELIGIBILITY_WINDOW_DAYS - days_since,
        }
    }
}
