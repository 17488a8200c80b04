//! Header component renderer.
//!
//! Title centered across the pane; sort and sync details right-aligned and
//! dimmed when there is room for them.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at `row` and returns the next free row.
///
/// ```text
/// [padding] Employees (3) [padding]   sorted by SALARY  synced 10:42:07
/// ```
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.move_to(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.push(&header.title);

    let used = padding + title_len;
    let detail = header
        .detail
        .as_deref()
        .map(|d| format!("{d} "))
        .filter(|d| used + d.chars().count() < cols);

    match detail {
        Some(detail) => {
            let detail_len = detail.chars().count();
            canvas.pad(cols - used - detail_len);
            canvas.push(Theme::reset());
            canvas.push(&Theme::fg(&theme.colors.text_dim));
            canvas.push(&detail);
        }
        None => canvas.pad(cols.saturating_sub(used)),
    }

    canvas.push(Theme::reset());
    row + 1
}
