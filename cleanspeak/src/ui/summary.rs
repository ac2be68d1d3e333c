// cleanspeak/src/ui/summary.rs
//! Renders a `StatisticsSnapshot` as a table.

use comfy_table::{presets, Cell, CellAlignment, Color, Table};
use std::io::{self, Write};

use cleanspeak_core::{Severity, StatisticsSnapshot};

use super::output_format::styled;
use super::theme::{ThemeEntry, ThemeMap};

fn table_color(entry: ThemeEntry, theme: &ThemeMap) -> Option<Color> {
    let name = theme.get(&entry)?.fg.as_ref()?.name().to_string();
    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "white" => Color::Grey,
        "brightblack" => Color::DarkGrey,
        "brightred" => Color::Red,
        "brightgreen" => Color::Green,
        "brightyellow" => Color::Yellow,
        "brightblue" => Color::Blue,
        "brightmagenta" => Color::Magenta,
        "brightcyan" => Color::Cyan,
        _ => Color::White,
    };
    Some(color)
}

fn cell(text: impl ToString, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> Cell {
    let cell = Cell::new(text);
    match table_color(entry, theme) {
        Some(color) if supports_color => cell.fg(color),
        _ => cell,
    }
}

/// Builds the summary table.
pub fn build_summary_table(snapshot: &StatisticsSnapshot, theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    if !supports_color {
        table.force_no_tty();
    }
    table.set_header(vec![
        cell("Metric", ThemeEntry::Header, theme, supports_color),
        cell("Value", ThemeEntry::Header, theme, supports_color),
    ]);

    let count = |value: String| {
        cell(value, ThemeEntry::SummaryCount, theme, supports_color).set_alignment(CellAlignment::Right)
    };

    table.add_row(vec![
        cell("Words processed", ThemeEntry::SummaryLabel, theme, supports_color),
        count(snapshot.words_processed.to_string()),
    ]);
    table.add_row(vec![
        cell("Words filtered", ThemeEntry::SummaryLabel, theme, supports_color),
        count(snapshot.words_filtered.to_string()),
    ]);
    table.add_row(vec![
        cell("Filter rate", ThemeEntry::SummaryLabel, theme, supports_color),
        count(format!("{:.2}%", snapshot.filter_rate_percent)),
    ]);
    for severity in Severity::ALL {
        table.add_row(vec![
            cell(severity, ThemeEntry::for_severity(severity), theme, supports_color),
            count(snapshot.by_severity.get(severity).to_string()),
        ]);
    }
    table.add_row(vec![
        cell("Words in lexicon", ThemeEntry::SummaryLabel, theme, supports_color),
        count(snapshot.trie_word_count.to_string()),
    ]);
    table
}

/// Writes the summary heading and table to `writer`.
pub fn print_summary<W: Write>(
    snapshot: &StatisticsSnapshot,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled("Filter Summary:", ThemeEntry::Header, theme, supports_color))?;
    writeln!(writer, "{}", build_summary_table(snapshot, theme, supports_color))
}
