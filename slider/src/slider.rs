//! The slider controller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace, warn};
use slidedom::{Dispatcher, Document, Event, EventResult, ListenerId};

use crate::config::SliderOptions;
use crate::error::{MissingPart, SliderError};
use crate::gesture::{DragSession, GestureState};

/// Unique identifier for a Slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(usize);

impl SliderId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SliderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slider-{}", self.0)
    }
}

/// Element IDs resolved at construction. Never changes afterwards.
#[derive(Debug, Clone)]
struct Structure {
    container: String,
    track: String,
    slides: Vec<String>,
}

impl Structure {
    fn resolve(doc: &Document, container: &str, options: &SliderOptions) -> Result<Self, SliderError> {
        match doc.count_by_id(container) {
            0 => return Err(SliderError::missing(container, MissingPart::Container)),
            1 => {}
            count => {
                return Err(SliderError::missing(
                    container,
                    MissingPart::DuplicateContainer { count },
                ));
            }
        }

        let track = doc
            .query_class(container, &options.inner_class)
            .into_iter()
            .next()
            .ok_or_else(|| {
                SliderError::missing(
                    container,
                    MissingPart::Track {
                        class: options.inner_class.clone(),
                    },
                )
            })?;

        let slides = doc.query_class(&track, &options.slide_class);
        if slides.is_empty() {
            return Err(SliderError::missing(
                container,
                MissingPart::Slides {
                    class: options.slide_class.clone(),
                },
            ));
        }

        Ok(Self {
            container: container.to_string(),
            track,
            slides,
        })
    }

    fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    fn clamp(&self, index: isize) -> usize {
        usize::try_from(index).unwrap_or(0).min(self.last_index())
    }
}

/// Internal state for the Slider.
#[derive(Debug)]
struct SliderInner {
    id: SliderId,
    container_id: String,
    options: SliderOptions,
    /// `None` when construction failed; the slider is then inert.
    structure: Option<Structure>,
    /// `None` until first computed.
    active: Option<usize>,
    gesture: GestureState,
}

impl SliderInner {
    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    fn active_slide(&self, doc: &Document) -> Option<usize> {
        let structure = self.structure.as_ref()?;
        let layout = doc.layout();
        let center = layout.get(&structure.container)?.center_x();

        let mut best: Option<(usize, f64)> = None;
        for (index, id) in structure.slides.iter().enumerate() {
            let Some(rect) = layout.get(id) else {
                continue;
            };
            let distance = (rect.center_x() - center).abs();
            // Strict improvement only: the lower index wins a tie
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }

        best.map(|(index, _)| index)
    }

    fn slide_offset(&self, doc: &Document, index: usize) -> Option<f64> {
        let structure = self.structure.as_ref()?;
        let slide = structure.slides.get(index)?;
        let layout = doc.layout();
        let container = layout.get(&structure.container)?;
        let slide = layout.get(slide)?;
        Some(slide.center_x() - container.center_x())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn set_active_slide(&mut self, doc: &mut Document, index: isize) -> Option<usize> {
        let structure = self.structure.as_ref()?;
        let index = structure.clamp(index);

        for (i, id) in structure.slides.iter().enumerate() {
            doc.toggle_class(id, &self.options.active_class, i == index);
        }
        self.active = Some(index);

        Some(index)
    }

    fn move_to_slide(&mut self, doc: &mut Document, index: isize) -> Option<usize> {
        let index = self.set_active_slide(doc, index)?;
        let offset = self.slide_offset(doc, index)?;

        let track = &self.structure.as_ref()?.track;
        let left = doc.left(track)?;
        doc.set_left(track, left - offset);

        debug!(
            "[{}] #{} centred slide {index} (track {left} -> {})",
            self.id,
            self.container_id,
            left - offset
        );
        Some(index)
    }

    fn move_to_active_slide(&mut self, doc: &mut Document) -> Option<usize> {
        // Unset means nothing was selected yet: start from the first slide
        let index = self.active.unwrap_or(0);
        self.move_to_slide(doc, isize::try_from(index).unwrap_or(isize::MAX))
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    fn on_start(&mut self, doc: &mut Document, x: f64) -> EventResult {
        let Some(structure) = &self.structure else {
            return EventResult::Ignored;
        };

        doc.add_class(&structure.container, &self.options.active_class);
        self.gesture = GestureState::Engaged(DragSession {
            last_x: x,
            start_index: self.active,
        });

        debug!("[{}] #{} engaged at x={x}", self.id, self.container_id);
        EventResult::StartDrag
    }

    fn on_move(&mut self, doc: &mut Document, x: f64) -> EventResult {
        let GestureState::Engaged(session) = &mut self.gesture else {
            return EventResult::Ignored;
        };
        let delta = x - session.last_x;
        session.last_x = x;

        let Some(structure) = &self.structure else {
            return EventResult::Ignored;
        };
        let left = doc.left(&structure.track).unwrap_or(0.0);
        doc.set_left(&structure.track, left + delta);

        self.active = self.active_slide(doc);

        trace!(
            "[{}] #{} drag delta={delta} track={} active={:?}",
            self.id,
            self.container_id,
            left + delta,
            self.active
        );
        EventResult::Consumed
    }

    fn on_end(&mut self, doc: &mut Document) -> EventResult {
        let GestureState::Engaged(session) = std::mem::take(&mut self.gesture) else {
            return EventResult::Ignored;
        };
        let Some(structure) = &self.structure else {
            return EventResult::Ignored;
        };

        doc.remove_class(&structure.container, &self.options.active_class);

        let last = structure.last_index();
        let changed = self.active != session.start_index;
        let at_boundary = matches!(self.active, Some(index) if index == 0 || index == last);

        // Releasing inside the starting slide, away from either end, leaves the
        // track where the drag put it
        if changed || at_boundary {
            self.move_to_active_slide(doc);
        } else {
            debug!(
                "[{}] #{} released on slide {:?} without snapping",
                self.id, self.container_id, self.active
            );
        }

        EventResult::Handled
    }

    fn on_resize(&mut self, doc: &mut Document) -> EventResult {
        match self.move_to_active_slide(doc) {
            Some(_) => EventResult::Handled,
            None => EventResult::Ignored,
        }
    }

    /// Route a host event to the matching gesture operation.
    fn handle_event(&mut self, event: &Event, doc: &mut Document) -> EventResult {
        let Some(structure) = &self.structure else {
            return EventResult::Ignored;
        };

        let inside = event
            .target()
            .is_some_and(|target| doc.contains(&structure.container, target));
        let on_container = event.target() == Some(structure.container.as_str());

        match event {
            Event::PointerDown { .. } | Event::TouchStart { .. } if inside => {
                match self.pointer_x(event) {
                    Some(x) => self.on_start(doc, x),
                    None => EventResult::Ignored,
                }
            }
            Event::PointerMove { .. } | Event::TouchMove { .. } if inside => {
                match self.pointer_x(event) {
                    Some(x) => self.on_move(doc, x),
                    None => EventResult::Ignored,
                }
            }
            Event::PointerUp { .. } | Event::TouchEnd { .. } if inside => self.on_end(doc),
            Event::PointerLeave { .. } if on_container => self.on_end(doc),
            Event::Resize { .. } => self.on_resize(doc),
            _ => EventResult::Ignored,
        }
    }

    fn pointer_x(&self, event: &Event) -> Option<f64> {
        let x = event.page_x();
        if x.is_none() {
            debug!(
                "[{}] #{} ignoring event without a pointer position: {event:?}",
                self.id, self.container_id
            );
        }
        x
    }
}

/// A drag/swipe carousel bound to one container element.
///
/// `Slider` is a cheap handle: clones share the same state, so the host can
/// keep one while a [`Dispatcher`] owns another.
///
/// The container must hold a track (first descendant with
/// [`SliderOptions::inner_class`]) which holds the slides (descendants with
/// [`SliderOptions::slide_class`]). If any of these is missing, construction
/// logs a warning and yields an inert slider that never binds and ignores
/// every call.
#[derive(Debug, Clone)]
pub struct Slider {
    /// Unique identifier for this slider instance.
    id: SliderId,
    inner: Arc<RwLock<SliderInner>>,
}

impl Slider {
    /// Bind to the container with the given ID.
    ///
    /// Never fails: invalid markup produces a warning and an inert slider.
    pub fn new(doc: &Document, container_id: &str, options: SliderOptions) -> Self {
        match Self::try_new(doc, container_id, options.clone()) {
            Ok(slider) => slider,
            Err(err) => {
                let slider = Self::from_parts(container_id, options, None);
                warn!("[{}] {err}; slider disabled", slider.id);
                slider
            }
        }
    }

    /// Bind to the container with the given ID, returning the structural
    /// error instead of degrading to an inert slider.
    pub fn try_new(
        doc: &Document,
        container_id: &str,
        options: SliderOptions,
    ) -> Result<Self, SliderError> {
        let structure = Structure::resolve(doc, container_id, &options)?;
        let (track, count) = (structure.track.clone(), structure.slides.len());
        let slider = Self::from_parts(container_id, options, Some(structure));
        debug!(
            "[{}] #{container_id} resolved: track #{track} with {count} slides",
            slider.id
        );
        Ok(slider)
    }

    fn from_parts(container_id: &str, options: SliderOptions, structure: Option<Structure>) -> Self {
        let id = SliderId::new();
        Self {
            id,
            inner: Arc::new(RwLock::new(SliderInner {
                id,
                container_id: container_id.to_string(),
                options,
                structure,
                active: None,
                gesture: GestureState::Idle,
            })),
        }
    }

    /// Register this slider's event handling with `dispatcher`.
    ///
    /// Inert sliders register nothing and return `None`.
    pub fn bind(&self, dispatcher: &mut Dispatcher) -> Option<ListenerId> {
        if self.is_inert() {
            return None;
        }
        let listener = dispatcher.register(self.clone());
        debug!("[{}] bound as {listener}", self.id);
        Some(listener)
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut SliderInner) -> R) -> Option<R> {
        self.inner.write().ok().map(|mut guard| f(&mut guard))
    }

    pub(crate) fn dispatch(&self, event: &Event, doc: &mut Document) -> EventResult {
        self.with_inner(|inner| inner.handle_event(event, doc))
            .unwrap_or(EventResult::Ignored)
    }

    pub(crate) fn start(&self, doc: &mut Document, x: f64) -> EventResult {
        self.with_inner(|inner| inner.on_start(doc, x))
            .unwrap_or(EventResult::Ignored)
    }

    pub(crate) fn drag(&self, doc: &mut Document, x: f64) -> EventResult {
        self.with_inner(|inner| inner.on_move(doc, x))
            .unwrap_or(EventResult::Ignored)
    }

    pub(crate) fn end(&self, doc: &mut Document) -> EventResult {
        self.with_inner(|inner| inner.on_end(doc))
            .unwrap_or(EventResult::Ignored)
    }

    pub(crate) fn resize(&self, doc: &mut Document) -> EventResult {
        self.with_inner(|inner| inner.on_resize(doc))
            .unwrap_or(EventResult::Ignored)
    }

    // -------------------------------------------------------------------------
    // Identity and structure
    // -------------------------------------------------------------------------

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn container_id(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.container_id.clone())
            .unwrap_or_default()
    }

    /// True when construction could not resolve the markup.
    pub fn is_inert(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.structure.is_none())
            .unwrap_or(true)
    }

    pub fn options(&self) -> SliderOptions {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    pub fn track_id(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.structure.as_ref().map(|s| s.track.clone()))
    }

    /// Slide IDs in display order.
    pub fn slide_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.structure.as_ref().map(|s| s.slides.clone()))
            .unwrap_or_default()
    }

    pub fn slide_count(&self) -> usize {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.structure.as_ref().map(|s| s.slides.len()))
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// The stored active index. `None` until first computed.
    pub fn active_index(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.active)
    }

    pub fn gesture(&self) -> GestureState {
        self.inner
            .read()
            .map(|guard| guard.gesture)
            .unwrap_or_default()
    }

    pub fn is_engaged(&self) -> bool {
        self.gesture().is_engaged()
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Index of the slide whose centre is nearest the container's centre.
    /// Ties go to the lower index. `None` only for inert sliders.
    pub fn active_slide(&self, doc: &Document) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.active_slide(doc))
    }

    /// Signed distance in pixels from the container's centre to the centre
    /// of slide `index`, from the current layout.
    pub fn slide_offset(&self, doc: &Document, index: usize) -> Option<f64> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.slide_offset(doc, index))
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Mark the slide at `index` (clamped into range) as active without
    /// moving the track. Returns the index used.
    pub fn set_active_slide(&self, doc: &mut Document, index: isize) -> Option<usize> {
        self.with_inner(|inner| inner.set_active_slide(doc, index))
            .flatten()
    }

    /// Activate the slide at `index` (clamped into range) and move the track
    /// so it is exactly centred. Returns the index used.
    pub fn move_to_slide(&self, doc: &mut Document, index: isize) -> Option<usize> {
        self.with_inner(|inner| inner.move_to_slide(doc, index))
            .flatten()
    }

    /// Re-centre the active slide, or the first slide if none is active yet.
    pub fn move_to_active_slide(&self, doc: &mut Document) -> Option<usize> {
        self.with_inner(|inner| inner.move_to_active_slide(doc))
            .flatten()
    }

    /// Move to the slide after the active one, stopping at the last.
    pub fn next(&self, doc: &mut Document) -> Option<usize> {
        self.step(doc, 1)
    }

    /// Move to the slide before the active one, stopping at the first.
    pub fn previous(&self, doc: &mut Document) -> Option<usize> {
        self.step(doc, -1)
    }

    fn step(&self, doc: &mut Document, delta: isize) -> Option<usize> {
        self.with_inner(|inner| {
            let current = inner.active.unwrap_or(0);
            let target = isize::try_from(current).unwrap_or(isize::MAX).saturating_add(delta);
            inner.move_to_slide(doc, target)
        })
        .flatten()
    }
}
