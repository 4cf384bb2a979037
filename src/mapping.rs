use crate::types::{ArticleResource, VideoResource};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const SUMMARY_MAX_CHARS: usize = 300;

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL}{video_id}")
}

/// Total seconds of an ISO-8601 duration such as `PT1H2M5S` or `P1DT30M`.
///
/// Year and month designators have no fixed length and are rejected, as is
/// anything that is not a well-formed `P[nW][nD][T[nH][nM][nS]]` value.
pub fn parse_iso8601_duration(s: &str) -> Option<f64> {
    let rest = s.trim().strip_prefix('P')?;
    if rest.is_empty() {
        return None;
    }
    let mut total = 0.0;
    let mut in_time = false;
    let mut saw_component = false;
    let mut num = String::new();
    for c in rest.chars() {
        match c {
            'T' => {
                if in_time || !num.is_empty() { return None; }
                in_time = true;
            }
            '0'..='9' | '.' | ',' => num.push(if c == ',' { '.' } else { c }),
            unit => {
                let value: f64 = num.parse().ok()?;
                num.clear();
                let factor = match (in_time, unit) {
                    (false, 'W') => 7.0 * 86_400.0,
                    (false, 'D') => 86_400.0,
                    (true, 'H') => 3_600.0,
                    (true, 'M') => 60.0,
                    (true, 'S') => 1.0,
                    _ => return None,
                };
                total += value * factor;
                saw_component = true;
            }
        }
    }
    if !num.is_empty() || !saw_component {
        return None;
    }
    Some(total)
}

/// `minutes:seconds` with zero-padded seconds; minutes are not wrapped into hours.
pub fn format_duration(total_seconds: f64) -> String {
    let secs = total_seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Human-readable form of a raw duration. Unparseable input is kept as-is.
pub fn humanize_duration(iso: &str) -> String {
    match parse_iso8601_duration(iso) {
        Some(secs) => format_duration(secs),
        None => {
            tracing::warn!("unrecognised duration '{}', keeping raw value", iso);
            iso.to_string()
        }
    }
}

pub fn video_from_parts(
    video_id: String,
    title: String,
    channel: String,
    published_at: String,
    duration_iso: Option<&str>,
) -> VideoResource {
    let duration = duration_iso
        .filter(|d| !d.is_empty())
        .map(humanize_duration)
        .unwrap_or_default();
    VideoResource {
        url: watch_url(&video_id),
        video_id,
        title,
        channel,
        published_at,
        duration,
    }
}

pub fn article_from_parts(title: &str, url: &str, published: &str, summary: &str) -> ArticleResource {
    ArticleResource {
        title: normalize_whitespace(title),
        url: url.trim().to_string(),
        published: published.trim().to_string(),
        summary: truncate_summary(summary),
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse whitespace and cut at a word boundary, appending an ellipsis when shortened.
pub fn truncate_summary(s: &str) -> String {
    let normalized = normalize_whitespace(s);
    if normalized.chars().count() <= SUMMARY_MAX_CHARS {
        return normalized;
    }
    let head: String = normalized.chars().take(SUMMARY_MAX_CHARS).collect();
    let cut = match head.rfind(' ') {
        Some(idx) if idx > 0 => &head[..idx],
        _ => head.as_str(),
    };
    format!("{}…", cut.trim_end())
}
