use chrono::{Datelike, NaiveDate};

/// Time since `joined` in its largest calendar unit, e.g. "13 years ago".
///
/// Years and months are counted on the calendar: a year has passed on the
/// anniversary date, not after 365 days. A `joined` date on or after `today`
/// reads as "today".
pub fn joined_ago(joined: NaiveDate, today: NaiveDate) -> String {
    if joined >= today {
        return "today".to_string();
    }

    let mut years = today.year() - joined.year();
    let mut months = today.month() as i32 - joined.month() as i32;
    let mut days = today.day() as i32 - joined.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let (n, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else {
        (days, "day")
    };
    format!("{} {}{} ago", n, unit, if n == 1 { "" } else { "s" })
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
