use std::time::Duration;

use async_trait::async_trait;
use color_eyre::{Result, eyre::bail};

use crate::{
    models::{Fetched, Preference, RecommendationItem, RequestParams},
    service::client::RecommendationClient,
};

/// Mock recommendation service.
///
/// City "nowhere" answers with no recommendations, city "offline" fails, anything else gets a
/// canned list shaped by the request.
#[cfg(debug_assertions)]
pub struct MockClientImpl {
    pub latency: Duration,
}

#[async_trait]
#[cfg(debug_assertions)]
impl RecommendationClient for MockClientImpl {
    async fn recommend(&self, params: &RequestParams) -> Result<Fetched> {
        tokio::time::sleep(self.latency).await;

        match params.city.trim().to_lowercase().as_str() {
            "nowhere" => Ok(Fetched::Empty),
            "offline" => bail!("mock connection refused"),
            _ => Ok(Fetched::Recommendations(canned(params))),
        }
    }
}

fn canned(params: &RequestParams) -> Vec<RecommendationItem> {
    let dishes: &[(&str, &str)] = match params.preference {
        Preference::Veg => &[
            ("Margherita Pizza", "Tomato, mozzarella and basil on a thin crust."),
            ("Paneer Tikka", "Chargrilled cottage cheese marinated in spiced yoghurt."),
        ],
        Preference::NonVeg => &[
            ("Chicken Ramen", "Rich broth with noodles, chashu and a soft egg."),
            ("Beef Tacos", "Slow cooked beef with salsa verde in corn tortillas."),
        ],
        Preference::Any => &[
            ("Falafel Wrap", "Crispy chickpea fritters with tahini and pickles."),
            ("Fish and Chips", "Beer battered cod with thick cut fries."),
            ("Pad Thai", "Stir fried rice noodles with peanuts and lime."),
        ],
    };

    dishes
        .iter()
        .map(|(name, description)| RecommendationItem {
            name: name.to_string(),
            description: format!("{description} ({} cuisine)", params.cuisine_type),
            restaurants: vec![
                format!("{} Kitchen", params.city),
                format!("The {} Table", params.city),
            ],
        })
        .collect()
}
