//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], a plain string buffer of text and ANSI
//! escape sequences that the renderer prints in one go. Keeping output in a
//! buffer lets tests inspect exactly what would reach the pane.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::ui::helpers::Canvas;
//! use staffdesk::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut canvas = Canvas::new();
//! canvas.move_to(2, 1);
//! canvas.highlighted("Engineering", &[(0, 3)], &theme, false);
//! assert!(canvas.plain_text().contains("Engineering"));
//! ```

use crate::ui::theme::Theme;

#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a 1-indexed row and column.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Pushes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Pushes `text` cut or space-padded to exactly `width` characters.
    pub fn cell(&mut self, text: &str, width: usize) {
        let len = text.chars().count();
        if len > width {
            self.buf.extend(text.chars().take(width));
        } else {
            self.buf.push_str(text);
            self.pad(width - len);
        }
    }

    /// Pushes text with highlighted character ranges for search matches.
    ///
    /// Ranges are `(start, end)` character indices, exclusive end. When the
    /// row is selected the highlight is skipped so the selection colors stay
    /// intact.
    pub fn highlighted(&mut self, text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
        if ranges.is_empty() || is_selected {
            self.push(text);
            return;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut current_pos = 0;

        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start < current_pos || start >= end {
                continue;
            }

            self.buf.extend(&chars[current_pos..start]);

            self.push(&Theme::fg(&theme.colors.match_highlight_fg));
            self.push(&Theme::bg(&theme.colors.match_highlight_bg));
            self.buf.extend(&chars[start..end]);
            self.push(Theme::reset());
            self.push(&Theme::fg(&theme.colors.text_normal));

            current_pos = end;
        }

        self.buf.extend(&chars[current_pos..]);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Buffer contents with all escape sequences removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        strip_ansi(&self.buf)
    }
}

/// Removes CSI escape sequences (`ESC [ ... final-byte`).
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.next() == Some('[') {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
