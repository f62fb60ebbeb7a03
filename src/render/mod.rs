use std::io::{self, Write};

use console::{measure_text_width, style, truncate_str};

use crate::domain::StoryRow;

const HEADERS: [&str; 3] = ["No.", "Title", "URL"];

/// Widest a single column is allowed to grow.
const MAX_COL_WIDTH: usize = 72;

/// Render the rank-ordered rows as a bordered table on `out`.
///
/// Fetched titles and urls get their own styles; placeholder rows stay
/// unstyled so failures are visually distinct.
pub fn print_table(out: &mut impl Write, rows: &[StoryRow]) -> io::Result<()> {
    // Unstyled cell text drives the column widths; ANSI codes would
    // inflate them.
    let cells: Vec<[String; 3]> = rows.iter().map(row_cells).collect();

    let mut widths: [usize; 3] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    writeln!(out, "{}", rule(&widths, '\u{250c}', '\u{252c}', '\u{2510}'))?;

    let header_raw = HEADERS.map(String::from);
    let header = HEADERS.map(|h| style(h).magenta().bold().to_string());
    writeln!(out, "{}", line(&widths, &header_raw, &header))?;

    for (row, raw) in rows.iter().zip(&cells) {
        writeln!(out, "{}", rule(&widths, '\u{251c}', '\u{253c}', '\u{2524}'))?;

        let styled = if row.is_fetched() {
            [
                raw[0].clone(),
                style(&raw[1]).yellow().bold().to_string(),
                style(&raw[2]).blue().underlined().to_string(),
            ]
        } else {
            raw.clone()
        };
        writeln!(out, "{}", line(&widths, raw, &styled))?;
    }

    writeln!(out, "{}", rule(&widths, '\u{2514}', '\u{2534}', '\u{2518}'))?;

    Ok(())
}

fn row_cells(row: &StoryRow) -> [String; 3] {
    [
        row.rank.to_string(),
        truncate_str(&row.title(), MAX_COL_WIDTH, "...").into_owned(),
        truncate_str(&row.url(), MAX_COL_WIDTH, "...").into_owned(),
    ]
}

fn rule(widths: &[usize; 3], left: char, mid: char, right: char) -> String {
    let spans: Vec<String> = widths
        .iter()
        .map(|width| "\u{2500}".repeat(width + 2))
        .collect();
    format!("{left}{}{right}", spans.join(&mid.to_string()))
}

/// One table line. `raw` supplies the visible widths, `styled` the text
/// actually written. The rank column is right-justified, the rest left.
fn line(widths: &[usize; 3], raw: &[String; 3], styled: &[String; 3]) -> String {
    let mut out = String::new();
    for column in 0..3 {
        let pad = " ".repeat(widths[column].saturating_sub(measure_text_width(&raw[column])));
        if column == 0 {
            out.push_str(&format!("\u{2502} {pad}{} ", styled[column]));
        } else {
            out.push_str(&format!("\u{2502} {}{pad} ", styled[column]));
        }
    }
    out.push('\u{2502}');
    out
}
