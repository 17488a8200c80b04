//! Modal overlays: the add/edit form and the delete prompt.
//!
//! Both are drawn last, centered over whatever the table shows.

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmInfo, ModalInfo};

const MODAL_MAX_WIDTH: usize = 56;
const LABEL_WIDTH: usize = 12;

/// Draws one frame line `│ content │` of the given inner width.
fn frame_line(canvas: &mut Canvas, row: usize, left: usize, inner: usize, border: &str, content: impl FnOnce(&mut Canvas)) {
    canvas.move_to(row, left);
    canvas.push(border);
    canvas.push("│");
    canvas.push(Theme::reset());
    content(canvas);
    canvas.move_to(row, left + inner + 1);
    canvas.push(border);
    canvas.push("│");
    canvas.push(Theme::reset());
}

fn blank(canvas: &mut Canvas, inner: usize) {
    canvas.pad(inner);
}

/// Renders the add/edit modal.
///
/// ```text
/// ┌─ Add New Employee ─────────────────┐
/// │                                    │
/// │ › Name        Bo█                  │
/// │   Position                         │
/// │   Department                       │
/// │   Salary                           │
/// │                                    │
/// │ Enter: save  Esc: cancel           │
/// └────────────────────────────────────┘
/// ```
pub fn render_modal(canvas: &mut Canvas, modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MODAL_MAX_WIDTH);
    if width < 20 {
        return;
    }
    let inner = width - 2;
    let height = modal.fields.len() + 5;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = (cols - width) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    canvas.move_to(top, left);
    canvas.push(&border);
    let title: String = format!("─ {} ", modal.title).chars().take(inner).collect();
    let title_len = title.chars().count();
    canvas.push(&format!("┌{title}{}┐", "─".repeat(inner - title_len)));
    canvas.push(Theme::reset());

    let mut row = top + 1;
    frame_line(canvas, row, left, inner, &border, |c| blank(c, inner));
    row += 1;

    let value_width = inner.saturating_sub(LABEL_WIDTH + 4);
    for field in &modal.fields {
        frame_line(canvas, row, left, inner, &border, |c| {
            if field.is_focused {
                c.push(&Theme::fg(&theme.colors.input_focus));
                c.push(" › ");
            } else {
                c.push(&Theme::fg(&theme.colors.text_dim));
                c.push("   ");
            }
            c.cell(&field.label, LABEL_WIDTH);
            c.push(&Theme::fg(&theme.colors.text_normal));
            let value = if field.is_focused { format!("{}█", field.value) } else { field.value.clone() };
            // keep the tail of long values in view while typing
            let shown: String = if value.chars().count() > value_width {
                value.chars().skip(value.chars().count() - value_width).collect()
            } else {
                value
            };
            c.cell(&shown, value_width + 1);
            c.push(Theme::reset());
        });
        row += 1;
    }

    frame_line(canvas, row, left, inner, &border, |c| blank(c, inner));
    row += 1;

    let hint = if modal.is_saving { format!(" Saving…  {}", modal.hint) } else { format!(" {}", modal.hint) };
    frame_line(canvas, row, left, inner, &border, |c| {
        c.push(&Theme::fg(&theme.colors.text_dim));
        c.cell(&hint, inner);
        c.push(Theme::reset());
    });
    row += 1;

    canvas.move_to(row, left);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner)));
    canvas.push(Theme::reset());
}

/// Renders the single-line delete confirmation box.
pub fn render_confirm(canvas: &mut Canvas, confirm: &ConfirmInfo, theme: &Theme, rows: usize, cols: usize) {
    let text = format!(" {} ", confirm.prompt);
    let inner = text.chars().count().min(cols.saturating_sub(2));
    if inner == 0 {
        return;
    }
    let top = rows.saturating_sub(3) / 2 + 1;
    let left = cols.saturating_sub(inner + 2) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    canvas.move_to(top, left);
    canvas.push(&border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner)));

    canvas.move_to(top + 1, left);
    canvas.push("│");
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.notice_error_fg));
    canvas.cell(&text, inner);
    canvas.push(Theme::reset());
    canvas.push(&border);
    canvas.push("│");

    canvas.move_to(top + 2, left);
    canvas.push(&format!("└{}┘", "─".repeat(inner)));
    canvas.push(Theme::reset());
}
