use serde::{Deserialize, Serialize};

use super::model::{ElementStyle, ElementType, Position, Size, SlideElement};

/// Partial update for one element.
///
/// `style` is merged key by key; `position` and `size` replace the whole
/// value; every other field overwrites when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    /// Replacement element kind.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<ElementType>,
    /// Replacement position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Replacement size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Replacement rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Replacement paint-order hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Replacement lock flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Style keys to merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    /// Replacement text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replacement image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl ElementPatch {
    /// Patch that only moves the element.
    pub fn position(position: Position) -> Self {
        Self { position: Some(position), ..Self::default() }
    }

    /// Patch that only resizes the element.
    pub fn size(size: Size) -> Self {
        Self { size: Some(size), ..Self::default() }
    }

    /// Patch that only touches style keys.
    pub fn style(style: ElementStyle) -> Self {
        Self { style: Some(style), ..Self::default() }
    }

    /// Patch that only replaces the text content.
    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Self::default() }
    }

    /// True when applying this patch can't change anything.
    pub const fn is_empty(&self) -> bool {
        self.element_type.is_none()
            && self.position.is_none()
            && self.size.is_none()
            && self.rotation.is_none()
            && self.z_index.is_none()
            && self.locked.is_none()
            && self.style.is_none()
            && self.content.is_none()
            && self.src.is_none()
    }

    /// Apply onto `element` in place. The id is never patched.
    pub fn apply_to(&self, element: &mut SlideElement) {
        if let Some(element_type) = self.element_type {
            element.element_type = element_type;
        }
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = Some(rotation);
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
        if let Some(locked) = self.locked {
            element.locked = Some(locked);
        }
        if let Some(style) = &self.style {
            element.style.merge(style);
        }
        if let Some(content) = &self.content {
            element.content = Some(content.clone());
        }
        if let Some(src) = &self.src {
            element.src = Some(src.clone());
        }
    }
}
