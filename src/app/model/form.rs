use crate::{
    app::model::{editor::Editor, focus::Focused},
    models::Preference,
};

/// Current values of the form fields. Nothing is validated here; blank cuisine type is left
/// blank and only resolved when a request is derived.
#[derive(Debug, Default)]
pub struct FormInput {
    pub city: Editor,
    pub preference: Preference,
    pub cuisine_type: Editor,
    /// Completions offered for the city field.
    cities: Vec<String>,
}

impl FormInput {
    pub fn new(cities: Vec<String>) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }

    pub fn city(&self) -> &str {
        self.city.input()
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn cuisine_type(&self) -> &str {
        self.cuisine_type.input()
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city.set_input(city.into());
    }

    pub fn set_preference(&mut self, preference: Preference) {
        self.preference = preference;
    }

    pub fn set_cuisine_type(&mut self, cuisine_type: impl Into<String>) {
        self.cuisine_type.set_input(cuisine_type.into());
    }

    /// Text editor behind a focused field, if the field is a text field.
    pub fn editor_mut(&mut self, focused: Focused) -> Option<&mut Editor> {
        match focused {
            Focused::City => Some(&mut self.city),
            Focused::CuisineType => Some(&mut self.cuisine_type),
            Focused::Preference | Focused::Submit => None,
        }
    }

    /// First configured city that the typed city is a strict, case-insensitive prefix of.
    pub fn city_suggestion(&self) -> Option<&str> {
        let typed = self.city().to_lowercase();
        if typed.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .map(String::as_str)
            .find(|c| c.to_lowercase().starts_with(&typed) && c.len() > typed.len())
    }

    /// Replaces city with its suggestion. Returns whether there was one.
    pub fn accept_city_suggestion(&mut self) -> bool {
        match self.city_suggestion().map(str::to_string) {
            Some(city) => {
                tracing::debug!(%city, "accept city suggestion");
                self.set_city(city);
                true
            }
            None => false,
        }
    }
}
