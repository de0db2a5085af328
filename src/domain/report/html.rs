//! HTML report: one day-of-week table per training week

use super::text::week_heading;
use crate::domain::{SessionRecord, TrainingPlan, Week};
use chrono::Weekday;
use quick_xml::escape::escape;
use std::io::{self, Write};

/// Table columns, Monday first
const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Write the HTML report.
///
/// With `day_cells` off, each week table carries only the day header row.
pub fn write_html<W: Write>(plan: &TrainingPlan, day_cells: bool, out: &mut W) -> io::Result<()> {
    let name = escape(plan.name());

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", name)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{}</h2>", name)?;
    writeln!(out, "<p>Number of weeks: {}</p>", plan.week_count())?;

    for (idx, week) in plan.weeks().iter().enumerate() {
        write_week_table(idx, week, day_cells, out)?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_week_table<W: Write>(
    idx: usize,
    week: &Week,
    day_cells: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "<h3>{}</h3>", escape(&week_heading(idx, week)))?;
    writeln!(out, "<table border=\"1\">")?;

    write!(out, "<tr>")?;
    for day in DAYS {
        write!(out, "<th>{}</th>", day_name(day))?;
    }
    writeln!(out, "</tr>")?;

    if day_cells {
        write!(out, "<tr>")?;
        for day in DAYS {
            let entries: Vec<String> = week.sessions_on(day).map(cell_entry).collect();
            write!(out, "<td>{}</td>", entries.join("<br/>"))?;
        }
        writeln!(out, "</tr>")?;
    }

    writeln!(out, "</table>")
}

/// Title, load tags in parentheses when present, check mark when done
fn cell_entry(session: &SessionRecord) -> String {
    let mut entry = escape(session.title()).into_owned();

    if let Some(load) = session.load_tags() {
        entry.push_str(&format!(" ({})", load));
    }
    if session.is_done() {
        entry.push_str(" &#10003;");
    }

    entry
}
