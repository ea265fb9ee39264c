//! Slide data model.
//!
//! Field names serialize in camelCase so a slide round-trips through the
//! generation endpoint's JSON unchanged.

mod model;
mod patch;

pub use model::{
    ElementStyle, ElementType, FontWeight, Position, Size, SlideData, SlideElement, TextAlign,
};
pub use patch::ElementPatch;

use crate::constants::canvas;
use crate::types::SlideId;

/// The slide the editor starts with.
pub fn default_slide() -> SlideData {
    SlideData {
        id: SlideId::new("mock-slide"),
        name: "AI Generated Concept".to_string(),
        background: "linear-gradient(135deg, #0f172a, #1d4ed8)".to_string(),
        width: canvas::WIDTH,
        height: canvas::HEIGHT,
        elements: vec![
            SlideElement::text(
                "title",
                Position::new(160.0, 160.0),
                Size::new(1200.0, 160.0),
                2,
                "Creative Media Vision 2025",
            )
            .with_style(ElementStyle {
                font_family: Some("Space Grotesk, sans-serif".to_string()),
                font_weight: Some(FontWeight::Numeric(700)),
                font_size: Some(96.0),
                color: Some("#ffffff".to_string()),
                text_align: Some(TextAlign::Left),
                ..ElementStyle::default()
            }),
            SlideElement::text(
                "subtitle",
                Position::new(160.0, 320.0),
                Size::new(960.0, 120.0),
                2,
                "AI-enhanced storytelling, immersive visuals, and bold creative strategy.",
            )
            .with_style(ElementStyle {
                font_family: Some("Inter, sans-serif".to_string()),
                font_weight: Some(FontWeight::Numeric(400)),
                font_size: Some(36.0),
                color: Some("#c7d2fe".to_string()),
                line_height: Some(1.4),
                ..ElementStyle::default()
            }),
            SlideElement::shape("accent", Position::new(1400.0, 140.0), Size::new(320.0, 320.0), 1)
                .with_style(ElementStyle {
                    background_color: Some("rgba(248, 113, 113, 0.25)".to_string()),
                    border_radius: Some(160.0),
                    box_shadow: Some("0 20px 60px rgba(248, 113, 113, 0.35)".to_string()),
                    ..ElementStyle::default()
                }),
            SlideElement::shape("card-1", Position::new(160.0, 520.0), Size::new(520.0, 340.0), 2)
                .with_content(
                    "Story Beats\n• Concept Co-Creation\n• AI-assisted Editing\n• Immersive Delivery",
                )
                .with_style(ElementStyle {
                    background_color: Some("rgba(15, 23, 42, 0.75)".to_string()),
                    border_radius: Some(32.0),
                    box_shadow: Some("0 16px 40px rgba(15, 23, 42, 0.6)".to_string()),
                    padding: Some(32.0),
                    ..ElementStyle::default()
                }),
        ],
    }
}
