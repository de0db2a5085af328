//! Plain-text reports: weekly summary and detailed session log

use crate::domain::fields::Token;
use crate::domain::{SessionRecord, TrainingPlan, Week};
use chrono::NaiveDate;
use std::io::{self, Write};

/// Kilometers per mile used for the summary conversion
pub const KM_PER_MILE: f64 = 1.609;

/// Format a date as "Weekday, dd-FullMonthName-yyyy"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %d-%B-%Y").to_string()
}

/// Decimal places kept when printing kilometers
const KM_DECIMALS: i32 = 3;

/// Kilometers rounded to three decimals, printed in shortest form with a
/// fractional part ("6.0", "7.25")
pub fn format_km(km: f64) -> String {
    let scale = 10f64.powi(KM_DECIMALS);
    format!("{:?}", (km * scale).round() / scale)
}

/// Kilometers converted to miles, two decimals
pub fn format_miles(km: f64) -> String {
    format!("{:.2}", km / KM_PER_MILE)
}

/// "Week N, load X" header shared by the detailed reports
pub fn week_heading(index: usize, week: &Week) -> String {
    format!("Week {}, load {}", index + 1, first_load(week))
}

fn first_load(week: &Week) -> &'static str {
    week.load_tags().first().map(|l| l.name()).unwrap_or("")
}

/// One line per week, plus a distance line for weeks with completed sessions
pub fn write_summary<W: Write>(plan: &TrainingPlan, out: &mut W) -> io::Result<()> {
    for (idx, week) in plan.weeks().iter().enumerate() {
        match week.first_session_date() {
            Some(date) => writeln!(
                out,
                "Week {}, load {}, date {}, {} sessions.",
                idx + 1,
                first_load(week),
                format_long_date(date),
                week.session_count()
            )?,
            None => writeln!(out, "Week {}, load {}, no sessions.", idx + 1, first_load(week))?,
        }

        if week.completed_count() > 0 {
            let km = week.total_distance_km();
            writeln!(
                out,
                "\tTotal distance: {}k/{}m",
                format_km(km),
                format_miles(km)
            )?;
        }
    }

    Ok(())
}

/// Every week header followed by one block per session
pub fn write_detailed<W: Write>(plan: &TrainingPlan, out: &mut W) -> io::Result<()> {
    for (idx, week) in plan.weeks().iter().enumerate() {
        writeln!(out, "{}", week_heading(idx, week))?;

        for session in week.sessions() {
            write_session_block(session, out)?;
        }
    }

    Ok(())
}

fn write_session_block<W: Write>(session: &SessionRecord, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format_long_date(session.date()))?;
    writeln!(out, "{}", session.title())?;
    writeln!(
        out,
        "Load: {}, emphasis: {}, energy system: {}.",
        session
            .load_tags()
            .map(ToString::to_string)
            .unwrap_or_default(),
        session.emphasis().unwrap_or(""),
        session
            .energy_systems()
            .map(ToString::to_string)
            .unwrap_or_default()
    )
}
