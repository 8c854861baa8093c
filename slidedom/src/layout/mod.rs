mod flow;
mod rect;

pub(crate) use flow::content_box;
pub use flow::{layout, LayoutResult};
pub use rect::Rect;
