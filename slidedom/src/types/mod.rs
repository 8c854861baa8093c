mod color;
mod edges;
mod enums;
mod style;

pub use color::Rgb;
pub use edges::Edges;
pub use enums::{Border, Direction, Overflow, Size, TextAlign, TextStyle};
pub use style::{Style, StyleSheet};
