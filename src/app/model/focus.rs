use crate::app::model::Model;

/// Form field holding keyboard focus, in tab order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Focused {
    #[default]
    City,
    Preference,
    CuisineType,
    Submit,
}

const FOCUS_ORDER: [Focused; 4] = [
    Focused::City,
    Focused::Preference,
    Focused::CuisineType,
    Focused::Submit,
];

impl Focused {
    fn idx(self) -> usize {
        FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl Model {
    /// Cycles to the next field in `FOCUS_ORDER`.
    pub fn shift_focus(&mut self) {
        let new_idx = (self.focused.idx() + 1) % FOCUS_ORDER.len();
        self.shift_focus_to(FOCUS_ORDER[new_idx]);
    }

    /// Cycles to the previous field in `FOCUS_ORDER`.
    pub fn shift_focus_back(&mut self) {
        let new_idx = (self.focused.idx() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
        self.shift_focus_to(FOCUS_ORDER[new_idx]);
    }

    pub fn shift_focus_to(&mut self, new: Focused) {
        tracing::debug!("shift focus to {new:?}");
        self.focused = new;
    }
}
