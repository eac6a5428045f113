use crate::domain::model::{OutputFormat, RankedEntry, Standing};
use crate::utils::error::Result;
use std::fmt::Write as _;

/// Assigns competition ranks ("1224") to an already ordered sequence.
///
/// A tied entry repeats the previous rank; the next distinct score takes its
/// 1-based position in the list.
pub fn assign_ranks(entries: &[RankedEntry]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = Vec::with_capacity(entries.len());
    let mut rank = 1;

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 && entry.points != entries[index - 1].points {
            rank = index + 1;
        }
        standings.push(Standing {
            rank,
            team: entry.name.clone(),
            points: entry.points,
        });
    }

    standings
}

fn points_label(points: u64) -> &'static str {
    if points == 1 {
        "pt"
    } else {
        "pts"
    }
}

pub fn render_text(standings: &[Standing]) -> String {
    let mut output = String::new();
    for standing in standings {
        // Writing into a String cannot fail.
        let _ = writeln!(
            output,
            "{}. {}, {} {}",
            standing.rank,
            standing.team,
            standing.points,
            points_label(standing.points)
        );
    }
    output
}

pub fn render_json(standings: &[Standing]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(standings)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(standings: &[Standing]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "team", "points"])?;
    for standing in standings {
        writer.write_record([
            standing.rank.to_string(),
            standing.team.clone(),
            standing.points.to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render(entries: &[RankedEntry], format: OutputFormat) -> Result<String> {
    render_standings(&assign_ranks(entries), format)
}

pub fn render_standings(standings: &[Standing], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(standings)),
        OutputFormat::Json => render_json(standings),
        OutputFormat::Csv => render_csv(standings),
    }
}
