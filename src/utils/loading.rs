//! Grid and options loading (feature `data-loading`)
//!
//! Grids come in as JSON (a serialized [`CellGrid`]) or as CSV of plain
//! text. Options come from TOML files whose tables mirror
//! [`ConvertOptions`]; missing keys keep their defaults.

use std::path::Path;

use crate::core::grid::{CellGrid, SheetCell};
use crate::core::options::ConvertOptions;
use crate::utils::error::{ConversionError, ConversionResult};

impl CellGrid {
    /// Parse a JSON grid: `{"rows": [[{"text": "A", "font_size": 18.0}, ...], ...]}`
    pub fn from_json(input: &str) -> ConversionResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ConversionError::invalid(format!("grid JSON: {}", e)))
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> ConversionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::invalid(format!("grid JSON: {}", e)))
    }

    /// Parse CSV into an unstyled grid; rows may have different lengths
    pub fn from_csv(input: &str) -> ConversionResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_bytes());

        let mut grid = CellGrid::new();
        for record in reader.records() {
            let record = record.map_err(|e| ConversionError::invalid(format!("grid CSV: {}", e)))?;
            grid.push_row(record.iter().map(SheetCell::new).collect());
        }
        Ok(grid)
    }
}

impl ConvertOptions {
    /// Parse options from TOML
    ///
    /// ```toml
    /// [classify]
    /// heading1_min_size = 20.0
    ///
    /// [markdown]
    /// pad_cells = true
    /// ```
    pub fn from_toml(input: &str) -> ConversionResult<Self> {
        toml::from_str(input).map_err(|e| ConversionError::invalid(format!("options TOML: {}", e)))
    }

    /// Read options from a TOML file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> ConversionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConversionError::IoError {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> ConversionResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConversionError::invalid(format!("options TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_from_json() {
        let grid = CellGrid::from_json(
            r#"{"rows": [[{"text": "Title", "font_size": 20.0}], [{"text": "A", "alignment": -4108}, {"text": "B"}]]}"#,
        )
        .unwrap();

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.rows[0][0].font_size, Some(20.0));
        assert_eq!(grid.rows[0][0].bold, None);
        assert_eq!(grid.rows[1][0].alignment, Some(-4108));
        assert_eq!(grid.rows[1][1].indent_level, 0);
    }

    #[test]
    fn test_grid_json_roundtrip() {
        let grid = CellGrid::from_rows(vec![vec![
            SheetCell::new("x").with_bold(true).with_indent(1),
        ]]);
        let json = grid.to_json().unwrap();
        assert_eq!(CellGrid::from_json(&json).unwrap(), grid);
    }

    #[test]
    fn test_bad_json() {
        let err = CellGrid::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
    }

    #[test]
    fn test_grid_from_csv() {
        let grid = CellGrid::from_csv("Name,Qty\napple,3\n\"a, b\"\n").unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.rows[0][1].text, "Qty");
        assert_eq!(grid.rows[2].len(), 1);
        assert_eq!(grid.rows[2][0].text, "a, b");
    }

    #[test]
    fn test_options_from_toml() {
        let options = ConvertOptions::from_toml(
            "[classify]\nheading1_min_size = 24.0\n\n[markdown]\npad_cells = true\n",
        )
        .unwrap();

        assert_eq!(options.classify.heading1_min_size, 24.0);
        assert_eq!(options.classify.heading2_min_size, 14.0);
        assert!(options.markdown.pad_cells);
    }

    #[test]
    fn test_options_toml_roundtrip() {
        let options = ConvertOptions::readable();
        let text = options.to_toml().unwrap();
        assert_eq!(ConvertOptions::from_toml(&text).unwrap(), options);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ConvertOptions::from_toml("").unwrap(), ConvertOptions::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = ConvertOptions::from_toml("[markdown]\npad_cells = \"yes\"").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
    }
}
