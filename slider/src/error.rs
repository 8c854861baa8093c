//! Error types

use thiserror::Error;

/// The part of a slider's markup that could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingPart {
    Container,
    /// More than one element carries the container ID.
    DuplicateContainer { count: usize },
    /// No descendant of the container carries the track class.
    Track { class: String },
    /// The track has no descendant carrying the slide class.
    Slides { class: String },
}

impl std::fmt::Display for MissingPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Container => write!(f, "container element not found"),
            Self::DuplicateContainer { count } => {
                write!(f, "container id is shared by {count} elements")
            }
            Self::Track { class } => write!(f, "no track element with class `{class}`"),
            Self::Slides { class } => write!(f, "no slide elements with class `{class}`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// The container could not be resolved to exactly one element, or its
    /// track or slides are missing.
    #[error("invalid slider structure in #{container}: {missing}")]
    InvalidStructure { container: String, missing: MissingPart },
}

impl SliderError {
    pub(crate) fn missing(container: &str, missing: MissingPart) -> Self {
        Self::InvalidStructure {
            container: container.to_string(),
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_container_and_part() {
        let err = SliderError::missing(
            "gallery",
            MissingPart::Slides {
                class: "slide".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "invalid slider structure in #gallery: no slide elements with class `slide`"
        );
    }

    #[test]
    fn message_reports_duplicate_count() {
        let err = SliderError::missing("gallery", MissingPart::DuplicateContainer { count: 2 });
        assert_eq!(
            err.to_string(),
            "invalid slider structure in #gallery: container id is shared by 2 elements"
        );
    }
}
