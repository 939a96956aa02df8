use crate::{
    app::model::form::FormInput,
    models::{
        Fetched, RecommendationItem, RequestParams, ServiceReq,
        constants::{ANY_CUISINE, CITY_REQUIRED, FETCH_FAILED, NO_RECOMMENDATIONS},
    },
};

/// State of the one request the form cares about. Replaced wholesale, never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CallState {
    #[default]
    Idle,
    Loading,
    Success(Vec<RecommendationItem>),
    Error(String),
}

impl CallState {
    /// State entered on submit: `Loading` with the params to send, or a validation error.
    pub fn on_submit(form: &FormInput) -> (CallState, Option<RequestParams>) {
        match request_params(form) {
            Some(params) => (CallState::Loading, Some(params)),
            None => (CallState::Error(CITY_REQUIRED.to_string()), None),
        }
    }

    /// State entered once a call settles.
    pub fn on_settled(fetched: Fetched) -> CallState {
        match fetched {
            Fetched::Recommendations(items) if !items.is_empty() => CallState::Success(items),
            Fetched::Recommendations(_) | Fetched::Empty => {
                CallState::Error(NO_RECOMMENDATIONS.to_string())
            }
            Fetched::Failed => CallState::Error(FETCH_FAILED.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CallState::Loading)
    }
}

/// Derives the outbound params. `None` when city is blank.
fn request_params(form: &FormInput) -> Option<RequestParams> {
    if form.city().trim().is_empty() {
        return None;
    }

    let cuisine_type = match form.cuisine_type().trim() {
        "" => ANY_CUISINE,
        trimmed => trimmed,
    };
    Some(RequestParams {
        city: form.city().to_string(),
        preference: form.preference(),
        cuisine_type: cuisine_type.to_string(),
    })
}

/// Owns `CallState` and tags each issued request with a sequence number so that only the
/// settlement of the latest submit is applied.
#[derive(Debug, Default)]
pub struct RequestController {
    state: CallState,
    latest_seq: u64,
}

impl RequestController {
    pub fn state(&self) -> &CallState {
        &self.state
    }

    /// Validates the form and, if valid, enters `Loading` and returns the request to send.
    pub fn submit(&mut self, form: &FormInput) -> Option<ServiceReq> {
        let (state, params) = CallState::on_submit(form);
        self.state = state;

        let params = params?;
        self.latest_seq += 1;
        tracing::debug!(seq = self.latest_seq, ?params, "submit");
        Some(ServiceReq::Recommend {
            seq: self.latest_seq,
            params,
        })
    }

    /// Applies a settlement. Returns false when it was discarded as stale.
    pub fn settle(&mut self, seq: u64, fetched: Fetched) -> bool {
        if seq != self.latest_seq || !self.state.is_loading() {
            tracing::debug!(seq, latest_seq = self.latest_seq, "discard stale settlement");
            return false;
        }
        self.state = CallState::on_settled(fetched);
        true
    }
}
