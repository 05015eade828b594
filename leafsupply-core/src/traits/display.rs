//! Character display port

/// Text-mode display addressed by character cell
///
/// Writes do not clear anything: text already on the row outside the
/// new string's extent stays visible. Text running past the last column
/// is clipped by the implementation.
pub trait TextDisplay {
    /// Write `text` starting at `row`, `col` (both 0-based)
    fn write_text(&mut self, row: u8, col: u8, text: &str);
}
