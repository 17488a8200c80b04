//! Empty state component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message at `row` and `row + 1`.
///
/// Shown in place of the table when the cache is empty or the search hides
/// every record.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.pad(msg_padding);
    canvas.push(&empty.message);
    canvas.pad(cols.saturating_sub(msg_padding + msg_len));
    canvas.push(Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    canvas.move_to(row + 1, 1);
    canvas.push(Theme::dim());
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(sub_padding);
    canvas.push(&empty.subtitle);
    canvas.pad(cols.saturating_sub(sub_padding + sub_len));
    canvas.push(Theme::reset());

    row + 2
}
