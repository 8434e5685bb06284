//! The two end-user commands: copy a selection as Markdown, paste Markdown into a sheet

use log::{debug, info};

use crate::core::grid2md::grid_to_markdown;
use crate::core::md2grid::{parse_document, write_blocks};
use crate::core::options::ConvertOptions;
use crate::utils::error::ConversionResult;
use crate::utils::host::{ClipboardProvider, SelectionReader, SheetWriter};

/// Convert the current selection to Markdown and put it on the clipboard
///
/// Fails with a host error when nothing is selected. The clipboard is only
/// written when the selection produced some Markdown. Returns the Markdown.
pub fn copy_to_markdown<R, C>(
    reader: &R,
    clipboard: &mut C,
    options: &ConvertOptions,
) -> ConversionResult<String>
where
    R: SelectionReader + ?Sized,
    C: ClipboardProvider + ?Sized,
{
    let grid = reader.read_selection()?;
    let markdown = grid_to_markdown(&grid, options);

    if markdown.is_empty() {
        debug!("selection is empty, clipboard left untouched");
    } else {
        clipboard.write_text(&markdown)?;
        info!(
            "copied {} row(s) as {} byte(s) of Markdown",
            grid.row_count(),
            markdown.len()
        );
    }

    Ok(markdown)
}

/// Parse the clipboard as Markdown and write it into the sheet at the origin
///
/// An empty clipboard writes nothing. Returns the number of rows written.
pub fn paste_from_markdown<C, W>(
    clipboard: &C,
    sheet: &mut W,
    origin_row: usize,
    origin_column: usize,
) -> ConversionResult<usize>
where
    C: ClipboardProvider + ?Sized,
    W: SheetWriter + ?Sized,
{
    let text = clipboard.read_text()?;
    if text.is_empty() {
        debug!("clipboard is empty, nothing to paste");
        return Ok(0);
    }

    let blocks = parse_document(&text);
    let rows = write_blocks(&blocks, sheet, origin_row, origin_column)?;
    info!("pasted {} block(s) into {} row(s)", blocks.len(), rows);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::SheetCell;
    use crate::utils::error::ConversionError;
    use crate::utils::host::{MemoryClipboard, MemorySheet};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_without_selection() {
        let sheet = MemorySheet::new();
        let mut clipboard = MemoryClipboard::new();
        let err = copy_to_markdown(&sheet, &mut clipboard, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConversionError::Host { .. }));
        assert_eq!(clipboard.text(), None);
    }

    #[test]
    fn test_copy_empty_selection_leaves_clipboard() {
        let mut sheet = MemorySheet::new();
        sheet.select(0, 0, 2, 2);
        let mut clipboard = MemoryClipboard::with_text("previous");

        let markdown = copy_to_markdown(&sheet, &mut clipboard, &ConvertOptions::default()).unwrap();
        assert_eq!(markdown, "");
        assert_eq!(clipboard.text(), Some("previous"));
    }

    #[test]
    fn test_copy_selection() {
        let mut sheet = MemorySheet::new();
        sheet.put(0, 0, SheetCell::new("Title").with_font_size(20.0));
        sheet.put(1, 0, SheetCell::new("A"));
        sheet.put(1, 1, SheetCell::new("B"));
        sheet.select_used_range();
        let mut clipboard = MemoryClipboard::new();

        let markdown = copy_to_markdown(&sheet, &mut clipboard, &ConvertOptions::default()).unwrap();
        assert_eq!(markdown, "# Title\n\n|A|B|\n|---|---|\n");
        assert_eq!(clipboard.text(), Some(markdown.as_str()));
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let clipboard = MemoryClipboard::new();
        let mut sheet = MemorySheet::new();
        assert_eq!(paste_from_markdown(&clipboard, &mut sheet, 0, 0).unwrap(), 0);
        assert_eq!(sheet.cells().count(), 0);
    }

    #[test]
    fn test_paste_at_origin() {
        let clipboard = MemoryClipboard::with_text("**Total**\n| A | B |\n|---|--:|\n| 1 | 2 |");
        let mut sheet = MemorySheet::new();

        let rows = paste_from_markdown(&clipboard, &mut sheet, 3, 1).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(sheet.value(3, 1), "Total");
        assert_eq!(sheet.cell(3, 1).and_then(|c| c.bold()), Some(true));
        assert_eq!(sheet.value(4, 2), "B");
        assert_eq!(sheet.value(5, 1), "1");
        assert_eq!(sheet.cell(5, 2).and_then(|c| c.alignment), Some(-4152));
    }
}
