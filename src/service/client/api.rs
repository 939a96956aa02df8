use serde::Deserialize;

use crate::models::{Fetched, RecommendationItem};

/// Body of a `/prefrecommend` answer. Only `recommendations` drives the outcome; a missing, null
/// or empty list means the service had nothing to suggest. `status` and `message` are kept for
/// logging and accepted in any shape.
#[derive(Deserialize, Debug, Default)]
pub struct PrefRecommendResp {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

#[derive(Deserialize, Debug)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    pub restaurants: Vec<String>,
}

impl From<Recommendation> for RecommendationItem {
    fn from(value: Recommendation) -> Self {
        Self {
            name: value.name,
            description: value.description,
            restaurants: value.restaurants,
        }
    }
}

impl From<PrefRecommendResp> for Fetched {
    fn from(resp: PrefRecommendResp) -> Self {
        resp.recommendations
            .map(|recs| recs.into_iter().map(RecommendationItem::from).collect::<Vec<_>>())
            .unwrap_or_default()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_outcomes() {
        struct Case {
            description: &'static str,
            body: &'static str,
            expect: Option<Fetched>,
        }
        let pizza = RecommendationItem {
            name: "Pizza".to_string(),
            description: "Cheesy".to_string(),
            restaurants: vec!["Tony's".to_string(), "Luigi's".to_string()],
        };
        let cases = vec![
            Case {
                description: "recommendations present",
                body: r#"{"status":"success","recommendations":[{"name":"Pizza","description":"Cheesy","restaurants":["Tony's","Luigi's"]}]}"#,
                expect: Some(Fetched::Recommendations(vec![pizza])),
            },
            Case {
                description: "non-string status and message are ignored",
                body: r#"{"status":200,"message":{"detail":"ok"},"recommendations":[{"name":"Pizza","description":"Cheesy","restaurants":["Tony's"]}]}"#,
                expect: Some(Fetched::Recommendations(vec![RecommendationItem {
                    name: "Pizza".to_string(),
                    description: "Cheesy".to_string(),
                    restaurants: vec!["Tony's".to_string()],
                }])),
            },
            Case {
                description: "no recommendations key",
                body: "{}",
                expect: Some(Fetched::Empty),
            },
            Case {
                description: "null recommendations",
                body: r#"{"recommendations":null}"#,
                expect: Some(Fetched::Empty),
            },
            Case {
                description: "empty recommendations",
                body: r#"{"recommendations":[]}"#,
                expect: Some(Fetched::Empty),
            },
            Case {
                description: "recommendations of the wrong type",
                body: r#"{"recommendations":"pizza"}"#,
                expect: None,
            },
            Case {
                description: "item missing restaurants",
                body: r#"{"recommendations":[{"name":"Pizza","description":"Cheesy"}]}"#,
                expect: None,
            },
            Case {
                description: "not an object",
                body: "[1, 2]",
                expect: None,
            },
        ];
        for case in cases {
            let fetched = serde_json::from_str::<PrefRecommendResp>(case.body)
                .ok()
                .map(Fetched::from);
            assert_eq!(fetched, case.expect, "{}", case.description);
        }
    }
}
