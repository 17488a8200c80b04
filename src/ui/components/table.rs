//! Table component renderer.
//!
//! One row per employee: id, name, position, department, salary, and the
//! row's edit and delete triggers. Search matches are highlighted inside the
//! three searchable cells. Every line is clipped to the pane width.

use crate::domain::SortColumn;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, DEPARTMENT_WIDTH, NAME_WIDTH, POSITION_WIDTH, SALARY_WIDTH};

/// Renders the column headings at `row`.
pub fn render_table_headers(canvas: &mut Canvas, row: usize, id_width: usize, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));

    let line = format!(
        "{:<id$}{:<name$}{:<position$}{:<department$}{:>salary$}  ACTIONS",
        "ID",
        SortColumn::Name.label(),
        SortColumn::Position.label(),
        SortColumn::Department.label(),
        SortColumn::Salary.label(),
        id = id_width,
        name = NAME_WIDTH,
        position = POSITION_WIDTH,
        department = DEPARTMENT_WIDTH,
        salary = SALARY_WIDTH,
    );
    canvas.cell(&line, cols);

    canvas.push(Theme::reset());
    row + 1
}

/// Renders every row starting at `row` and returns the next free row.
pub fn render_table_rows(
    canvas: &mut Canvas,
    row: usize,
    rows: &[DisplayRow],
    id_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for display_row in rows {
        canvas.move_to(current_row, 1);
        render_table_row(&mut ClippedLine { canvas: &mut *canvas, remaining: cols }, display_row, id_width, theme);
        current_row += 1;
    }
    current_row
}

/// Renders one employee row.
///
/// Styling precedence: selection colors, then match highlights, then normal
/// text. The row is padded to the full width so the selection background
/// spans the pane.
fn render_table_row(line: &mut ClippedLine<'_>, item: &DisplayRow, id_width: usize, theme: &Theme) {
    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    line.style(&base);

    line.cell(&item.id.to_string(), id_width);
    line.highlighted(&item.name, &item.highlights.name, NAME_WIDTH, theme, item.is_selected);
    line.highlighted(&item.position, &item.highlights.position, POSITION_WIDTH, theme, item.is_selected);
    line.highlighted(&item.department, &item.highlights.department, DEPARTMENT_WIDTH, theme, item.is_selected);
    line.cell(&format!("{:>SALARY_WIDTH$}  ", item.salary), SALARY_WIDTH + 2);

    let triggers = item
        .triggers
        .iter()
        .map(|t| format!("[{}] {}", t.key, t.label()))
        .collect::<Vec<_>>()
        .join(" ");
    if !item.is_selected {
        line.style(&Theme::fg(&theme.colors.text_dim));
    }
    let width = triggers.chars().count();
    line.cell(&triggers, width);
    line.fill();

    line.style(Theme::reset());
}

/// Writes one line into a canvas without exceeding a column budget.
struct ClippedLine<'a> {
    canvas: &'a mut Canvas,
    remaining: usize,
}

impl ClippedLine<'_> {
    /// Escape sequences take no columns.
    fn style(&mut self, escape: &str) {
        self.canvas.push(escape);
    }

    /// Writes `text` padded to `width`, cut at the end of the line.
    fn cell(&mut self, text: &str, width: usize) {
        let width = width.min(self.remaining);
        self.canvas.cell(text, width);
        self.remaining -= width;
    }

    fn highlighted(&mut self, text: &str, ranges: &[(usize, usize)], width: usize, theme: &Theme, is_selected: bool) {
        let width = width.min(self.remaining);
        let shown: String = text.chars().take(width).collect();
        let len = shown.chars().count();
        self.canvas.highlighted(&shown, ranges, theme, is_selected);
        self.canvas.pad(width - len);
        self.remaining -= width;
    }

    fn fill(&mut self) {
        self.canvas.pad(self.remaining);
        self.remaining = 0;
    }
}
