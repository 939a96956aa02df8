mod form;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{Command, Message, model::Model},
    models::ServiceResp,
};

pub type Update = (Option<Message>, Option<Command>);

/// Updates model with message and optionally create next message for chained update and command
/// for side effect.
pub fn update(model: &mut Model, msg: Message) -> Update {
    match msg {
        Message::Key(evt) => return handle_key_event(model, evt),
        Message::ServiceResp(resp) => handle_service_resp(model, resp),
        Message::Submit => {
            let maybe_req = model.controller.submit(&model.form);
            model.results_scroll.reset();
            if let Some(req) = maybe_req {
                return (None, Some(Command::ServiceReq(req)));
            }
        }
        Message::CrosstermClose => model.quit(),
    }
    (None, None)
}

fn handle_service_resp(model: &mut Model, resp: ServiceResp) {
    match resp {
        ServiceResp::Recommendations { seq, fetched } => {
            if model.controller.settle(seq, fetched) {
                model.results_scroll.reset();
            }
        }
    }
}

fn handle_key_event(model: &mut Model, evt: KeyEvent) -> Update {
    match (evt.code, evt.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => model.quit(),
        (KeyCode::Enter, _) => return (Some(Message::Submit), None),
        (KeyCode::Tab | KeyCode::Down, _) => model.shift_focus(),
        (KeyCode::BackTab | KeyCode::Up, _) => model.shift_focus_back(),
        (KeyCode::PageDown, _) => model.scroll_results_down(),
        (KeyCode::PageUp, _) => model.scroll_results_up(),
        _ => return form::handle_key_event(model, evt),
    }
    (None, None)
}
