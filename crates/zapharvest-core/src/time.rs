use chrono::{DateTime, Local, Utc};

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn format_millis_date(ms: i64) -> String {
    to_local(ms).format("%Y-%m-%d").to_string()
}

fn to_local(ms: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .with_timezone(&Local)
}
