use serde::{Deserialize, Serialize};

use crate::types::{ElementId, SlideId};

/// Rendering primitive of an element. The store treats all kinds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Text box; `content` holds the text.
    Text,
    /// Picture; `src` holds the URL.
    Image,
    /// Filled box or circle.
    Shape,
}

impl ElementType {
    /// Lowercase name as used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Shape => "shape",
        }
    }
}

/// Top-left corner in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the left edge.
    pub x: f64,
    /// Distance from the top edge.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This position moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Box dimensions in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// CSS font weight, either `700` or `"bold"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    /// Numeric weight such as `400` or `700`.
    Numeric(u16),
    /// Keyword weight such as `"bold"`.
    Named(String),
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centred.
    Center,
    /// Flush right.
    Right,
}

/// Presentational attributes; every key is independently optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// CSS font stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Font size in canvas units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Line height multiplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Extra spacing between letters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Text colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fill colour or gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Inner padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// CSS box shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// Opacity from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl ElementStyle {
    /// Overlay every key set in `patch`; keys absent from `patch` are kept.
    pub fn merge(&mut self, patch: &Self) {
        fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        overlay(&mut self.font_family, &patch.font_family);
        overlay(&mut self.font_weight, &patch.font_weight);
        overlay(&mut self.font_size, &patch.font_size);
        overlay(&mut self.line_height, &patch.line_height);
        overlay(&mut self.letter_spacing, &patch.letter_spacing);
        overlay(&mut self.color, &patch.color);
        overlay(&mut self.background_color, &patch.background_color);
        overlay(&mut self.border_radius, &patch.border_radius);
        overlay(&mut self.padding, &patch.padding);
        overlay(&mut self.text_align, &patch.text_align);
        overlay(&mut self.box_shadow, &patch.box_shadow);
        overlay(&mut self.opacity, &patch.opacity);
    }
}

/// A positioned, styled visual primitive on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideElement {
    /// Unique within the slide.
    pub id: ElementId,
    /// Serialized as `type`.
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Top-left corner.
    pub position: Position,
    /// Box dimensions.
    pub size: Size,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Paint-order hint. Actual paint order is the element's position in
    /// `SlideData::elements`.
    pub z_index: i32,
    /// Locked elements are still editable through the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Presentational attributes.
    #[serde(default)]
    pub style: ElementStyle,
    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl SlideElement {
    fn new(id: impl Into<ElementId>, element_type: ElementType, position: Position, size: Size, z_index: i32) -> Self {
        Self {
            id: id.into(),
            element_type,
            position,
            size,
            rotation: None,
            z_index,
            locked: None,
            style: ElementStyle::default(),
            content: None,
            src: None,
        }
    }

    /// Text block with content.
    pub fn text(
        id: impl Into<ElementId>,
        position: Position,
        size: Size,
        z_index: i32,
        content: impl Into<String>,
    ) -> Self {
        Self::new(id, ElementType::Text, position, size, z_index).with_content(content)
    }

    /// Plain shape without content.
    pub fn shape(id: impl Into<ElementId>, position: Position, size: Size, z_index: i32) -> Self {
        Self::new(id, ElementType::Shape, position, size, z_index)
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// One editable slide: canvas metadata plus elements in back-to-front order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    /// Slide identifier.
    pub id: SlideId,
    /// Display name.
    pub name: String,
    /// CSS gradient string.
    pub background: String,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Elements in paint order, back to front.
    pub elements: Vec<SlideElement>,
}

impl SlideData {
    /// Index of the element with `id`, if any.
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Element with `id`, if any.
    pub fn element(&self, id: &ElementId) -> Option<&SlideElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Whether an element with `id` exists.
    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Whether every element id is distinct.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.elements.iter().all(|e| seen.insert(&e.id))
    }
}
