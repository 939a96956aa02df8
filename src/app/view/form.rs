use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize, palette::tailwind},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::app::model::{editor::Editor, focus::Focused, form::FormInput};

/// Rows plus top and bottom border.
pub const FORM_HEIGHT: u16 = 6;
const LABEL_WIDTH: u16 = 14;

const FOCUSED_LABEL_STYLE: Style = Style::new()
    .fg(tailwind::AMBER.c400)
    .add_modifier(Modifier::BOLD);
const PLACEHOLDER_STYLE: Style = Style::new().fg(tailwind::GRAY.c500);
const GHOST_STYLE: Style = Style::new().fg(tailwind::GRAY.c600);

#[derive(Default)]
pub struct FormState {
    pub cursor_position: Option<(u16, u16)>,
}

pub struct FormView<'a> {
    pub form: &'a FormInput,
    pub focused: Focused,
    pub is_loading: bool,
}

impl StatefulWidget for FormView<'_> {
    type State = FormState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut FormState) {
        let title = Line::from(" Food Recommendation ".bold());
        let block = Block::bordered()
            .title(title.centered())
            .border_set(border::THICK);
        let inner = block.inner(area);
        block.render(area, buf);

        let [city_row, preference_row, cuisine_row, submit_row] =
            Layout::vertical([Constraint::Length(1); 4]).areas(inner);

        // city, with the completion greyed out after the cursor
        let value_area = self.render_label(city_row, buf, "City", Focused::City);
        let mut city_line = self.text_line(&self.form.city, "Enter city");
        if self.focused == Focused::City && self.form.city.is_cursor_at_end() {
            if let Some(rest) = self
                .form
                .city_suggestion()
                .and_then(|s| s.get(self.form.city().len()..))
            {
                city_line.push_span(Span::styled(rest, GHOST_STYLE));
            }
        }
        city_line.render(value_area, buf);
        self.place_cursor(state, value_area, &self.form.city, Focused::City);

        let value_area =
            self.render_label(preference_row, buf, "Preference", Focused::Preference);
        let preference = self.form.preference().display_name();
        let preference_line = if self.focused == Focused::Preference {
            Line::from(vec![
                Span::raw("‹ "),
                Span::styled(preference, Style::new().fg(tailwind::EMERALD.c400).bold()),
                Span::raw(" ›"),
            ])
        } else {
            Line::from(format!("  {preference}"))
        };
        preference_line.render(value_area, buf);

        let value_area = self.render_label(cuisine_row, buf, "Cuisine", Focused::CuisineType);
        self.text_line(&self.form.cuisine_type, "Enter cuisine type (any)")
            .render(value_area, buf);
        self.place_cursor(
            state,
            value_area,
            &self.form.cuisine_type,
            Focused::CuisineType,
        );

        let [_, button_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)])
                .areas(submit_row);
        let label = if self.is_loading {
            " Loading... "
        } else {
            " Get Recommendations "
        };
        let button = if self.focused == Focused::Submit {
            Span::styled(label, Style::new().bg(tailwind::AMBER.c400).fg(tailwind::GRAY.c900))
        } else {
            Span::styled(label, Style::new().add_modifier(Modifier::REVERSED))
        };
        Line::from(button).render(button_area, buf);
    }
}

impl FormView<'_> {
    /// Renders a field label and returns the area left for its value.
    fn render_label(&self, row: Rect, buf: &mut Buffer, label: &str, field: Focused) -> Rect {
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)]).areas(row);
        let style = if self.focused == field {
            FOCUSED_LABEL_STYLE
        } else {
            Style::new()
        };
        Line::styled(format!(" {label}"), style).render(label_area, buf);
        value_area
    }

    fn text_line<'a>(&self, editor: &'a Editor, placeholder: &'a str) -> Line<'a> {
        if editor.input().is_empty() {
            Line::from(Span::styled(placeholder, PLACEHOLDER_STYLE))
        } else {
            Line::from(editor.input())
        }
    }

    fn place_cursor(&self, state: &mut FormState, area: Rect, editor: &Editor, field: Focused) {
        if self.focused != field || area.width == 0 {
            return;
        }
        let x = area.x + editor.cursor_column().min(area.width - 1);
        state.cursor_position = Some((x, area.y));
    }
}
