//! Notice banner renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

/// Renders the notice on a single line at `row`.
pub fn render_notice(canvas: &mut Canvas, row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) -> usize {
    let color = if notice.is_error { &theme.colors.notice_error_fg } else { &theme.colors.notice_info_fg };

    canvas.move_to(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(color));
    canvas.cell(&format!(" {}", notice.message), cols);
    canvas.push(Theme::reset());
    row + 1
}
