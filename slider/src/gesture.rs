//! Gesture state machine.

/// Transient state of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at the previous start/move event. Deltas are incremental.
    pub last_x: f64,
    /// Active index when the gesture started.
    pub start_index: Option<usize>,
}

/// `Idle -> Engaged` on gesture start, `Engaged -> Engaged` on move,
/// `Engaged -> Idle` on end. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Engaged(DragSession),
}

impl GestureState {
    pub fn is_engaged(&self) -> bool {
        matches!(self, GestureState::Engaged(_))
    }
}
