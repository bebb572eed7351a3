use comfy_table::{Cell, Table};
use std::io::Write;

use crate::ec2::InstanceRow;

pub const NO_MATCHES: &str = "no matching instances found";

/// Plain ASCII borders with a single rule under the header and none between rows.
const TABLE_STYLE: &str = "||--+-++|    ++++++";

pub fn write_no_matches<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", NO_MATCHES)
}

pub fn write_private_ips<W: Write>(
    out: &mut W,
    ips: &[String],
    one_per_line: bool,
    delimiter: &str,
) -> std::io::Result<()> {
    if one_per_line {
        for ip in ips {
            writeln!(out, "{}", ip)?;
        }
        Ok(())
    } else {
        writeln!(out, "{}", ips.join(delimiter))
    }
}

/// Normalises a header cell: underscores become spaces, then trimmed and uppercased.
pub fn format_header(header: &str) -> String {
    header.replace('_', " ").trim().to_uppercase()
}

pub fn build_table(rows: &[InstanceRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(TABLE_STYLE);
    table.set_header(
        InstanceRow::HEADERS
            .iter()
            .map(|h| Cell::new(format_header(h))),
    );
    for row in rows {
        table.add_row(row.cells());
    }
    table
}

pub fn write_table<W: Write>(out: &mut W, rows: &[InstanceRow]) -> std::io::Result<()> {
    writeln!(out, "{}", build_table(rows))
}
