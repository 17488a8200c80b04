//! Footer component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at `row`.
///
/// Hints wider than the pane are cut to fit.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text_len = footer.keybindings.chars().count().min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(padding);
    canvas.cell(&footer.keybindings, text_len);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.push(Theme::reset());
    row + 1
}
