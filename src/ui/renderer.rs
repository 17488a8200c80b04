//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from state, then draw
//! it into a [`Canvas`] that is printed to the pane in a single write.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::app::AppState;
//! use staffdesk::ui::{render_to_string, Theme};
//!
//! let state = AppState::new("http://localhost:5000", Theme::default());
//! let screen = render_to_string(&state, 24, 100);
//! assert!(staffdesk::ui::helpers::strip_ansi(&screen).contains("No employees"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of text and ANSI sequences.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut canvas = Canvas::new();
    components::render_screen(&mut canvas, &viewmodel, &state.theme, rows, cols);
    canvas.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        let mut state = AppState::new("http://localhost:5000", Theme::default());
        state.cache.load(vec![
            Employee::new(1, "John Doe", "Software Engineer", "Engineering", 85_000),
            Employee::new(2, "Jane Smith", "Product Manager", "Product", 95_000),
        ]);
        state.apply_search_filter();
        state
    }

    #[test]
    fn table_shows_every_field_and_both_triggers() {
        let screen = strip_ansi(&render_to_string(&state(), 24, 120));

        assert!(screen.contains("Employees (2)"));
        assert!(screen.contains("John Doe"));
        assert!(screen.contains("Software Engineer"));
        assert!(screen.contains("Engineering"));
        assert!(screen.contains("$85,000"));
        assert!(screen.contains("[e] edit [d] delete"));
    }

    #[test]
    fn modal_is_drawn_over_the_table() {
        let mut state = state();
        state.begin_create();

        let screen = strip_ansi(&render_to_string(&state, 24, 120));

        assert!(screen.contains("Add New Employee"));
        assert!(screen.contains("Department"));
        assert!(screen.contains("Enter: save  Esc: cancel"));
    }

    #[test]
    fn notice_is_shown_above_footer() {
        let mut state = state();
        state.notice = Some(crate::app::Notice::error("Please fill in all fields"));

        let screen = strip_ansi(&render_to_string(&state, 24, 120));
        assert!(screen.contains("Please fill in all fields"));
    }

    #[test]
    fn long_ids_are_shown_in_full() {
        let mut state = AppState::new("http://localhost:5000", Theme::default());
        state.cache.load(vec![Employee::new(123_456, "Ann", "Eng", "R&D", 50_000)]);
        state.apply_search_filter();

        let screen = strip_ansi(&render_to_string(&state, 24, 120));

        assert!(screen.contains("123456 Ann"), "{screen}");
    }

    #[test]
    fn tiny_panes_do_not_panic() {
        let mut state = state();
        state.begin_edit(1);
        let _ = render_to_string(&state, 1, 1);
        let _ = render_to_string(&state, 0, 0);
    }
}
