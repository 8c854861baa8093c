use super::{Border, Rgb, TextStyle};
use crate::element::Element;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Layer `other` on top of `self`: set fields in `other` win.
    pub fn merge(&mut self, other: &Style) {
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground;
        }
        if other.border != Border::None {
            self.border = other.border;
        }
        self.text_style = self.text_style.union(other.text_style);
    }
}

#[derive(Debug, Clone)]
struct Rule {
    classes: Vec<String>,
    style: Style,
}

impl Rule {
    fn matches(&self, element: &Element) -> bool {
        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// Class-selector rules applied in declaration order.
///
/// Selectors are compound class selectors only (`.slide`, `.slide.active`).
/// An element's inline [`Style`] is layered last and wins over every rule.
/// Borders take part in layout, so only the inline border is ever used.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: &str, style: Style) -> Self {
        let classes: Vec<String> = selector
            .split('.')
            .map(str::trim)
            .filter(|class| !class.is_empty())
            .map(String::from)
            .collect();

        if classes.is_empty() {
            log::warn!("[style] ignoring rule with empty selector {selector:?}");
            return self;
        }

        self.rules.push(Rule { classes, style });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the style an element renders with.
    pub fn computed(&self, element: &Element) -> Style {
        let mut style = Style::default();
        for rule in self.rules.iter().filter(|rule| rule.matches(element)) {
            style.merge(&rule.style);
        }
        style.merge(&element.style);
        style.border = element.style.border;
        style
    }
}
