//! Projection of the source export onto a destination template.

use roster_model::{Cell, FieldMapping, RequiredDefaults, Table, Template};
use tracing::{debug, warn};

use crate::error::Result;

/// Builds a destination-shaped table from `source`.
///
/// Columns are exactly `template`'s, in order; the row count is the source's.
/// Columns mapped to a source column that exists are copied row for row,
/// everything else is `""`.
pub fn project(template: &Template, mapping: &FieldMapping, source: &Table) -> Result<Table> {
    let positions: Vec<Option<usize>> = template
        .columns()
        .iter()
        .map(|destination| {
            let column = mapping.source_for(destination)?;
            let position = source.column_index(column);
            if position.is_none() {
                warn!(
                    destination = %destination,
                    column,
                    "mapped column not in source; filling with empty values"
                );
            }
            position
        })
        .collect();

    let rows = source
        .rows()
        .iter()
        .map(|row| {
            positions
                .iter()
                .map(|position| position.map_or_else(Cell::empty, |index| row[index].clone()))
                .collect()
        })
        .collect();

    Ok(Table::from_rows(template.columns().to_vec(), rows)?)
}

/// Replaces blank cells of the configured fields with their fallback value.
///
/// A cell is blank when it is missing or its normalized string is empty.
/// Fields not present in `table` are ignored. Returns the number of cells filled.
pub fn apply_required_defaults(table: &mut Table, defaults: &RequiredDefaults) -> usize {
    let mut filled = 0;
    for (field, value) in defaults.iter() {
        let mut count = 0;
        table.update_column(field, |cell| {
            if cell.is_blank() {
                *cell = Cell::text(value);
                count += 1;
            }
        });
        if count > 0 {
            debug!(field, count, "applied required-field default");
        }
        filled += count;
    }
    filled
}
