pub mod controller;
pub mod editor;
pub mod focus;
pub mod form;

use crate::{
    app::model::{controller::RequestController, focus::Focused, form::FormInput},
    models::configs::FormConfig,
};

pub struct Model {
    pub form: FormInput,
    pub controller: RequestController,
    pub focused: Focused,
    /// Reset whenever the call state is replaced.
    pub results_scroll: ResultsScroll,
    pub should_quit: bool,
}

impl Model {
    pub fn new(configs: FormConfig) -> Self {
        Self {
            form: FormInput::new(configs.cities),
            controller: RequestController::default(),
            focused: Focused::default(),
            results_scroll: ResultsScroll::default(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn scroll_results_down(&mut self) {
        self.results_scroll.down();
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll.up();
    }
}

/// Vertical scroll of the results panel. `max_offset` is recorded by the view on every frame from
/// the number of body lines that do not fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultsScroll {
    pub offset: u16,
    pub max_offset: u16,
}

impl ResultsScroll {
    pub fn down(&mut self) {
        self.offset = self.offset.saturating_add(1).min(self.max_offset);
    }

    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Records how far the body can scroll and pulls the offset back inside it.
    pub fn fit(&mut self, body_lines: usize, viewport_height: u16) {
        self.max_offset = u16::try_from(body_lines)
            .unwrap_or(u16::MAX)
            .saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }
}
