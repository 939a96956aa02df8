use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{
    Message,
    model::{Model, focus::Focused},
    update::Update,
};

/// Handles keys the focused field consumes.
pub fn handle_key_event(
    model: &mut Model,
    KeyEvent {
        code,
        modifiers,
        kind: _,
        state: _,
    }: KeyEvent,
) -> Update {
    let form = &mut model.form;
    match model.focused {
        Focused::Preference => match code {
            KeyCode::Left => form.set_preference(form.preference().prev()),
            KeyCode::Right | KeyCode::Char(' ') => form.set_preference(form.preference().next()),
            _ => {}
        },
        Focused::Submit => {
            if code == KeyCode::Char(' ') {
                return (Some(Message::Submit), None);
            }
        }
        Focused::City | Focused::CuisineType => {
            let is_city = model.focused == Focused::City;
            if is_city
                && code == KeyCode::Right
                && form.city.is_cursor_at_end()
                && form.accept_city_suggestion()
            {
                return (None, None);
            }

            let Some(editor) = form.editor_mut(model.focused) else {
                return (None, None);
            };
            match (code, modifiers) {
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => editor.clear(),
                (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => {}
                (KeyCode::Char(c), _) => editor.enter_char(c),
                (KeyCode::Backspace, _) => editor.delete_char(),
                (KeyCode::Left, _) => editor.move_cursor_left(),
                (KeyCode::Right, _) => editor.move_cursor_right(),
                (KeyCode::Home, _) => editor.move_cursor_home(),
                (KeyCode::End, _) => editor.move_cursor_end(),
                _ => {}
            }
        }
    }
    (None, None)
}
