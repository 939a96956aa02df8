pub mod configs;
pub mod constants;

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ServiceReq {
    Recommend { seq: u64, params: RequestParams },
}

#[derive(Debug)]
pub enum ServiceResp {
    /// Settled outcome of the `Recommend` request carrying the same `seq`.
    Recommendations { seq: u64, fetched: Fetched },
}

/// Dietary filter applied to a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preference {
    #[default]
    Any,
    Veg,
    NonVeg,
}

pub const PREFERENCES: [Preference; 3] = [Preference::Any, Preference::Veg, Preference::NonVeg];

impl Preference {
    pub fn display_name(&self) -> &'static str {
        match self {
            Preference::Any => "Any",
            Preference::Veg => "Vegetarian",
            Preference::NonVeg => "Non-Vegetarian",
        }
    }

    pub fn next(self) -> Self {
        let idx = PREFERENCES.iter().position(|p| *p == self).unwrap_or(0);
        PREFERENCES[(idx + 1) % PREFERENCES.len()]
    }

    pub fn prev(self) -> Self {
        let idx = PREFERENCES.iter().position(|p| *p == self).unwrap_or(0);
        PREFERENCES[(idx + PREFERENCES.len() - 1) % PREFERENCES.len()]
    }
}

/// Query parameters of one `/prefrecommend` call. Field names are the wire names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestParams {
    pub city: String,
    pub preference: Preference,
    pub cuisine_type: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationItem {
    pub name: String,
    pub description: String,
    pub restaurants: Vec<String>,
}

/// What a settled call produced, before it is turned into user-facing state.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched {
    Recommendations(Vec<RecommendationItem>),
    /// The service answered but carried no recommendations.
    Empty,
    /// Transport failure, non-2xx status or a payload of the wrong shape.
    Failed,
}

impl From<Vec<RecommendationItem>> for Fetched {
    fn from(items: Vec<RecommendationItem>) -> Self {
        if items.is_empty() {
            Fetched::Empty
        } else {
            Fetched::Recommendations(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_cycles() {
        assert_eq!(Preference::Any.next(), Preference::Veg);
        assert_eq!(Preference::NonVeg.next(), Preference::Any);
        assert_eq!(Preference::Any.prev(), Preference::NonVeg);
        assert_eq!(Preference::Veg.prev(), Preference::Any);
    }

    #[test]
    fn preference_wire_values() {
        for (preference, expected) in [
            (Preference::Any, "\"any\""),
            (Preference::Veg, "\"veg\""),
            (Preference::NonVeg, "\"non-veg\""),
        ] {
            assert_eq!(serde_json::to_string(&preference).unwrap(), expected);
        }
    }

    #[test]
    fn empty_items_are_empty_outcome() {
        assert_eq!(Fetched::from(Vec::new()), Fetched::Empty);
    }
}
