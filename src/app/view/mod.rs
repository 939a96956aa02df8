mod form;
mod results;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::{Stylize, palette::tailwind},
    text::Line,
};

use crate::app::{
    model::Model,
    view::{
        form::{FORM_HEIGHT, FormState, FormView},
        results::Results,
    },
};

const HELP: &str = "Tab/↑↓ field · ←→ preference · Enter submit · PgUp/PgDn scroll · Esc quit";

pub fn render_ui(model: &mut Model, frame: &mut Frame) {
    let [form_area, results_area, help_area] = Layout::vertical([
        Constraint::Length(FORM_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let form_state = &mut FormState::default();
    frame.render_stateful_widget(
        FormView {
            form: &model.form,
            focused: model.focused,
            is_loading: model.controller.state().is_loading(),
        },
        form_area,
        form_state,
    );

    frame.render_stateful_widget(
        Results::new(model.controller.state()),
        results_area,
        &mut model.results_scroll,
    );

    frame.render_widget(
        Line::from(HELP).fg(tailwind::GRAY.c500).centered(),
        help_area,
    );

    if let Some((x, y)) = form_state.cursor_position {
        frame.set_cursor_position(Position::new(x, y));
    }
}
