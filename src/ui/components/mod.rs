//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar with count, sort and sync details
//! - `footer`: Keybinding hints for the current mode
//! - `search`: Search input box
//! - `table`: Employee rows with edit and delete triggers
//! - `empty`: Message shown instead of an empty table
//! - `modal`: Add/edit form and delete confirmation overlays
//! - `notice`: Alert line above the footer
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Notice, when present]
//! [Border]
//! [Footer]
//! ```
//!
//! The modal or delete prompt is drawn last, on top of the layout.

mod empty;
mod footer;
mod header;
mod modal;
mod notice;
mod search;
mod table;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::{render_confirm, render_modal};
use notice::render_notice;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Draws the full screen for a view model.
pub fn render_screen(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(canvas, current_row, search, theme, cols);
    }
    current_row = render_table_headers(canvas, current_row, vm.id_width, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, current_row + 2, empty, theme, cols);
    } else {
        render_table_rows(canvas, current_row, &vm.rows, vm.id_width, theme, cols);
    }

    let footer_row = rows.max(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(notice) = &vm.notice {
        render_notice(canvas, border_row.saturating_sub(1), notice, theme, cols);
    }
    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(canvas, modal, theme, rows, cols);
    }
    if let Some(confirm) = &vm.confirm {
        render_confirm(canvas, confirm, theme, rows, cols);
    }
}
