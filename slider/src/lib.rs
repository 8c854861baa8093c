//! Drag/swipe slide carousel.
//!
//! A [`Slider`] binds to a container element holding a track of slides. While
//! the user drags, the track follows the pointer; on release the slide nearest
//! the container's centre is snapped into the middle. Window resizes keep the
//! current selection centred.
//!
//! # Example
//!
//! ```ignore
//! let slider = Slider::new(&doc, "gallery", SliderOptions::default());
//! slider.bind(&mut dispatcher);
//! slider.move_to_slide(&mut doc, 2);
//! ```

mod config;
mod error;
mod events;
mod gesture;
mod slider;

pub use config::SliderOptions;
pub use error::{MissingPart, SliderError};
pub use events::GestureHandler;
pub use gesture::{DragSession, GestureState};
pub use slider::{Slider, SliderId};
