//! Search bar component renderer.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row`.
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: eng█    │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// A block cursor follows the query while it has typing focus.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.move_to(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    let cursor = if search.is_typing { "█" } else { "" };
    let search_text = format!(" Search: {}{cursor}", search.query);

    canvas.move_to(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push("│");
    canvas.push(&Theme::fg(&theme.colors.text_normal));
    canvas.cell(&search_text, inner_width);
    canvas.push(&border);
    canvas.push("│");
    canvas.push(Theme::reset());

    canvas.move_to(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 3
}
