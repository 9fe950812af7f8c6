use dnsee_application::services::RecordRow;
use dnsee_domain::RecordType;
use nu_ansi_term::Color;
use std::io::{self, Write};

const COLUMN_GAP: &str = "  ";

/// Renders record rows as a left-aligned table.
///
/// Column widths are measured on the plain text, so coloring never shifts
/// alignment.
pub struct TableRenderer {
    color: bool,
}

impl TableRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, rows: &[RecordRow]) -> String {
        let widths = column_widths(rows);
        let mut out = String::new();

        for row in rows {
            let cells = row.cells();
            let last = cells.len().saturating_sub(1);

            for (index, cell) in cells.iter().enumerate() {
                if index > 0 {
                    out.push_str(COLUMN_GAP);
                }

                if self.color {
                    out.push_str(&cell_color(row.record_type, index).paint(*cell).to_string());
                } else {
                    out.push_str(cell);
                }

                if index < last {
                    let pad = widths[index] - cell.chars().count();
                    out.extend(std::iter::repeat(' ').take(pad));
                }
            }
            out.push('\n');
        }

        out
    }

    pub fn write_to<W: Write>(&self, rows: &[RecordRow], out: &mut W) -> io::Result<()> {
        out.write_all(self.render(rows).as_bytes())?;
        out.flush()
    }
}

fn column_widths(rows: &[RecordRow]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (index, cell) in row.cells().iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(index) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

fn cell_color(record_type: RecordType, index: usize) -> Color {
    match (index, record_type) {
        (0, _) => Color::LightYellow,
        (1, _) => Color::LightBlue,
        (2, _) => Color::LightPurple,
        (3, RecordType::MX) => Color::LightRed,
        (4, RecordType::SOA) => Color::Green,
        _ => Color::White,
    }
}
