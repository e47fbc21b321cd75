//! String normalization at the output boundary.

use roster_model::{Cell, Table};

/// Output text for one cell: missing values and missing tokens become "".
pub fn stringify_cell(cell: Cell) -> Cell {
    match cell {
        Cell::Text(value) if roster_model::is_missing_token(&value) => Cell::empty(),
        Cell::Text(value) => Cell::Text(value),
        other => Cell::Text(other.to_normalized_string()),
    }
}

/// Converts every cell of `table` to [`Cell::Text`]. Idempotent.
pub fn stringify(table: Table) -> Table {
    table.map_cells(stringify_cell)
}
