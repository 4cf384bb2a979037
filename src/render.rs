use crate::types::{LearningPlan, WeekPlan};

/// GitHub-flavoured markdown table with columns padded to their widest cell.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {}{} ", c, " ".repeat(w - c.chars().count())))
            .collect();
        format!("|{}|", padded.join("|"))
    };
    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push_str(&format!("|{}|", sep.join("|")));
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

fn render_week(out: &mut String, week: &WeekPlan, use_table: bool) {
    out.push_str(&format!("\nWeek {}: {}\n", week.week, week.theme));

    if week.videos.is_empty() {
        out.push_str("  Videos: None\n");
    } else {
        out.push_str("  Videos:\n");
        let rows: Vec<Vec<String>> = week
            .videos
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let duration = if v.duration.is_empty() { "--" } else { v.duration.as_str() };
                vec![(i + 1).to_string(), v.title.clone(), duration.to_string(), v.url.clone()]
            })
            .collect();
        if use_table {
            out.push_str(&format!("{}\n", table(&["#", "Title", "Duration", "URL"], &rows)));
        } else {
            for r in &rows {
                out.push_str(&format!("    {}. {} ({}) – {}\n", r[0], r[1], r[2], r[3]));
            }
        }
    }

    if week.articles.is_empty() {
        out.push_str("  Articles: None\n");
    } else {
        out.push_str("  Articles:\n");
        let rows: Vec<Vec<String>> = week
            .articles
            .iter()
            .enumerate()
            .map(|(i, a)| vec![(i + 1).to_string(), a.title.clone(), a.url.clone()])
            .collect();
        if use_table {
            out.push_str(&format!("{}\n", table(&["#", "Title", "URL"], &rows)));
        } else {
            for r in &rows {
                out.push_str(&format!("    {}. {} – {}\n", r[0], r[1], r[2]));
            }
        }
    }

    out.push_str("  Suggested activities:\n");
    out.push_str(&format!("    {}\n", week.activities));
}

pub fn render_text(plan: &LearningPlan, use_table: bool) -> String {
    let mut out = String::new();
    for week in &plan.weeks {
        render_week(&mut out, week, use_table);
    }
    out
}

pub fn render_json(plan: &LearningPlan) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
