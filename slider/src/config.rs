//! Slider configuration.

use serde::{Deserialize, Serialize};

/// Class names a [`Slider`](crate::Slider) uses to find its parts and to
/// mark state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderOptions {
    /// Class of the track element inside the container. Default `"inner"`.
    pub inner_class: String,
    /// Class of each slide inside the track. Default `"slide"`.
    pub slide_class: String,
    /// Marker added to the container while a gesture is in progress and to
    /// the selected slide. Default `"active"`.
    pub active_class: String,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            inner_class: "inner".to_string(),
            slide_class: "slide".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_class(mut self, class: impl Into<String>) -> Self {
        self.inner_class = class.into();
        self
    }

    pub fn slide_class(mut self, class: impl Into<String>) -> Self {
        self.slide_class = class.into();
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_markup_conventions() {
        let options = SliderOptions::default();
        assert_eq!(options.inner_class, "inner");
        assert_eq!(options.slide_class, "slide");
        assert_eq!(options.active_class, "active");
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let options: SliderOptions = serde_json::from_str(r#"{ "slide_class": "card" }"#).unwrap();
        assert_eq!(options.slide_class, "card");
        assert_eq!(options.inner_class, "inner");
        assert_eq!(options.active_class, "active");
    }

    #[test]
    fn builder_overrides() {
        let options = SliderOptions::new().inner_class("track").active_class("is-current");
        assert_eq!(options.inner_class, "track");
        assert_eq!(options.slide_class, "slide");
        assert_eq!(options.active_class, "is-current");
    }
}
