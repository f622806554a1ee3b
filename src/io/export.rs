//! Export comparison tables to CSV.
//!
//! One row per temperature, one column per source; cells outside a source's
//! validity range are left empty.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::report::ComparisonTable;

/// Write a comparison table to a CSV file.
pub fn write_comparison_csv(path: &Path, table: &ComparisonTable) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_comparison(&mut file, table)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}

fn write_comparison(out: &mut impl Write, table: &ComparisonTable) -> std::io::Result<()> {
    let ids: Vec<&str> = table.columns.iter().map(|c| c.id).collect();
    writeln!(out, "temperature_k,{}", ids.join(","))?;

    for (row, t) in table.temperatures.iter().enumerate() {
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|c| {
                c.values
                    .get(row)
                    .copied()
                    .flatten()
                    .map(|v| format!("{v:.10e}"))
                    .unwrap_or_default()
            })
            .collect();
        writeln!(out, "{t:.3},{}", cells.join(","))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyKind;
    use crate::report::ComparisonColumn;

    #[test]
    fn csv_leaves_masked_cells_empty() {
        let table = ComparisonTable {
            property: PropertyKind::SelfDiffusion,
            temperatures: vec![700.0, 1300.0],
            columns: vec![
                ComparisonColumn {
                    id: "fialho-1993-d11",
                    label: "Fialho",
                    values: vec![Some(2.5e-4), None],
                },
                ComparisonColumn {
                    id: "other",
                    label: "Other",
                    values: vec![Some(1.0), Some(2.0)],
                },
            ],
        };
        let mut buf = Vec::new();
        write_comparison(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            concat!(
                "temperature_k,fialho-1993-d11,other\n",
                "700.000,2.5000000000e-4,1.0000000000e0\n",
                "1300.000,,2.0000000000e0\n",
            )
        );
    }
}
