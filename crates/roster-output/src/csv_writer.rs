//! CSV serialization of output tables.

use std::io::Write;

use roster_model::{Cell, Table};

use crate::error::Result;

/// Writes the header row followed by every row of `table`.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        csv.write_record(row.iter().map(Cell::display_string))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn table_to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    Ok(buffer)
}
