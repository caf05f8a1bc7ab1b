use chrono::{Local, NaiveDateTime};
use colored::*;

use crate::constants::DATE_TIME_FORMAT;
use crate::models::Score;

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// "1 Survey", "3 Surveys".
pub fn count_label(word: &str, count: usize) -> String {
    let mut label = format!("{} {}", count, word);
    if count != 1 {
        label.push('s');
    }
    label
}

/// The date half of a "YYYY-MM-DD HH:MM:SS" timestamp.
pub fn date_only(date_time: &str) -> &str {
    date_time.split(' ').next().unwrap_or(date_time)
}

pub fn format_relative_time(timestamp: &str) -> String {
    let parsed = match NaiveDateTime::parse_from_str(timestamp, DATE_TIME_FORMAT) {
        Ok(dt) => dt,
        Err(_) => return "unknown".to_string(),
    };
    let now = Local::now().naive_local();
    let duration = now.signed_duration_since(parsed);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 30 {
        format!("{}mo ago", duration.num_days() / 30)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

pub fn score_label(score: &Score) -> String {
    match score {
        Score::NoAnswer => "No Answer".to_string(),
        Score::Unfilled => "-".to_string(),
        Score::Value(v) => v.to_string(),
    }
}

pub fn format_status(published: bool) -> ColoredString {
    if published {
        "Published".green()
    } else {
        "Private".red()
    }
}

pub fn status_icon(published: bool) -> ColoredString {
    if published {
        "✓".green()
    } else {
        "○".dimmed()
    }
}
