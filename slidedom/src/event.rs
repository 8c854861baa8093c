/// A single touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub page_x: f64,
    pub page_y: f64,
}

impl Touch {
    pub const fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer button pressed
    PointerDown {
        target: Option<String>,
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// Pointer moved (with or without a button held)
    PointerMove {
        target: Option<String>,
        x: f64,
        y: f64,
    },
    /// Pointer button released
    PointerUp {
        target: Option<String>,
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// Pointer left the bounds of `target`
    PointerLeave { target: String },
    /// Touch began; `touches` lists the active touch points
    TouchStart {
        target: Option<String>,
        touches: Vec<Touch>,
    },
    TouchMove {
        target: Option<String>,
        touches: Vec<Touch>,
    },
    /// Touch ended; `touches` lists the points still down (often none)
    TouchEnd {
        target: Option<String>,
        touches: Vec<Touch>,
    },
    /// Window resized
    Resize { width: f64, height: f64 },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::PointerDown { target, .. }
            | Event::PointerMove { target, .. }
            | Event::PointerUp { target, .. }
            | Event::TouchStart { target, .. }
            | Event::TouchMove { target, .. }
            | Event::TouchEnd { target, .. } => target.as_deref(),
            Event::PointerLeave { target } => Some(target),
            Event::Resize { .. } => None,
        }
    }

    /// Horizontal page coordinate, read from the device-specific field:
    /// the pointer position for pointer events, the first touch point for
    /// touch events. `None` for touch events without touch points and for
    /// events that carry no position.
    pub fn page_x(&self) -> Option<f64> {
        match self {
            Event::PointerDown { x, .. }
            | Event::PointerMove { x, .. }
            | Event::PointerUp { x, .. } => Some(*x),
            Event::TouchStart { touches, .. }
            | Event::TouchMove { touches, .. }
            | Event::TouchEnd { touches, .. } => touches.first().map(|t| t.page_x),
            Event::PointerLeave { .. } | Event::Resize { .. } => None,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
