pub const CITY_REQUIRED: &str = "City is required.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations found.";
pub const FETCH_FAILED: &str = "Error fetching recommendations.";
pub const NO_RESULTS_PLACEHOLDER: &str = "No food recommendations to display.";

/// Wire value sent for `cuisine_type` when the field is left blank.
pub const ANY_CUISINE: &str = "any";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/prefrecommend";
pub const DEFAULT_CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];
