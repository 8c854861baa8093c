//! A small retained element tree for hosting interactive widgets.
//!
//! Elements carry class lists and an inline horizontal offset, layout is
//! recomputed on demand so geometry reads are always live, and widgets hook
//! into input through [`Listener`] registration on a [`Dispatcher`].

pub mod buffer;
pub mod dispatch;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use dispatch::{Dispatch, Dispatcher, EventResult, Listener, ListenerId};
pub use document::Document;
pub use element::Element;
pub use event::{Event, MouseButton, Touch};
pub use hit::{hit_path, hit_test_any};
pub use input::InputTranslator;
pub use layout::{LayoutResult, Rect};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
