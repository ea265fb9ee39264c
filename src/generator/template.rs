use async_trait::async_trait;
use chrono::Utc;

use super::palette::{Palette, PaletteSelector, PALETTES};
use super::{GenerateRequest, GenerateResponse, SlideGenerator};
use crate::constants::{canvas, generation};
use crate::error::Result;
use crate::slide::{ElementStyle, FontWeight, Position, Size, SlideData, SlideElement};
use crate::types::SlideId;

const CARD_LABELS: [&str; 3] = ["Strategy", "Design", "Delivery"];
const CARD_BASE_X: f64 = 160.0;
const CARD_STRIDE: f64 = 380.0;
const CARD_BASE_Y: f64 = 580.0;

/// In-process stand-in for the AI generation endpoint.
///
/// Every slide has the same layout; only the palette and prompt text vary.
pub struct TemplateSlideGenerator {
    selector: Box<dyn PaletteSelector>,
}

impl TemplateSlideGenerator {
    /// Generator choosing palettes with `selector`.
    pub fn new(selector: Box<dyn PaletteSelector>) -> Self {
        Self { selector }
    }

    /// Answer one endpoint request.
    pub fn respond(&self, request: &GenerateRequest) -> GenerateResponse {
        let palette = &PALETTES[self.selector.pick(PALETTES.len())];
        let slide_id = SlideId::new(format!("slide-{}", Utc::now().timestamp_millis()));
        GenerateResponse {
            slide: fabricate_slide(request.prompt.as_deref(), palette, slide_id),
        }
    }
}

#[async_trait]
impl SlideGenerator for TemplateSlideGenerator {
    async fn generate(&self, prompt: &str) -> Result<SlideData> {
        Ok(self.respond(&GenerateRequest::new(prompt)).slide)
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

/// Assemble the templated slide for `prompt` in `palette`.
///
/// An empty or missing prompt names the slide with the fallback name. A
/// missing prompt also builds the elements from a stock phrase, while an
/// empty one falls through to the fallback title.
pub fn fabricate_slide(prompt: Option<&str>, palette: &Palette, id: SlideId) -> SlideData {
    // Counts chars, not UTF-16 units, so the cut never splits a character.
    let name: String = prompt
        .unwrap_or_default()
        .chars()
        .take(generation::NAME_MAX_CHARS)
        .collect();
    SlideData {
        id,
        name: if name.is_empty() { generation::FALLBACK_NAME.to_string() } else { name },
        background: palette.background.to_string(),
        width: canvas::WIDTH,
        height: canvas::HEIGHT,
        elements: build_elements(prompt.unwrap_or(generation::MISSING_PROMPT_TEXT), palette),
    }
}

fn build_elements(prompt: &str, palette: &Palette) -> Vec<SlideElement> {
    let title_text = if prompt.is_empty() { generation::FALLBACK_TITLE } else { prompt };

    let title = SlideElement::text("ai-title", Position::new(160.0, 140.0), Size::new(1400.0, 150.0), 2, title_text)
        .with_style(ElementStyle {
            font_family: Some("Space Grotesk, sans-serif".to_string()),
            font_weight: Some(FontWeight::Numeric(700)),
            font_size: Some(88.0),
            color: Some(palette.text.to_string()),
            letter_spacing: Some(1.0),
            ..ElementStyle::default()
        });

    let description = SlideElement::text(
        "ai-description",
        Position::new(160.0, 320.0),
        Size::new(900.0, 200.0),
        2,
        "• Key opportunity  • Creative direction  • Impact highlight\n\
         Design cue: bold typography, soft gradients, glassmorphism cards.",
    )
    .with_style(ElementStyle {
        font_family: Some("Inter, sans-serif".to_string()),
        font_weight: Some(FontWeight::Numeric(400)),
        font_size: Some(34.0),
        line_height: Some(1.4),
        color: Some("rgba(248, 250, 252, 0.85)".to_string()),
        ..ElementStyle::default()
    });

    let accent = SlideElement::shape("ai-accent", Position::new(1340.0, 160.0), Size::new(420.0, 420.0), 1)
        .with_style(ElementStyle {
            background_color: Some(palette.accent.to_string()),
            border_radius: Some(210.0),
            opacity: Some(0.25),
            box_shadow: Some("0 30px 80px rgba(56, 189, 248, 0.45)".to_string()),
            ..ElementStyle::default()
        });

    let cards = CARD_LABELS.iter().enumerate().map(|(index, label)| {
        #[allow(clippy::cast_precision_loss)]
        let x = CARD_BASE_X + index as f64 * CARD_STRIDE;
        SlideElement::shape(format!("ai-card-{index}"), Position::new(x, CARD_BASE_Y), Size::new(320.0, 320.0), 2)
            .with_content(format!("{label}\n• Insight\n• Action\n• Metric"))
            .with_style(ElementStyle {
                background_color: Some("rgba(15, 23, 42, 0.65)".to_string()),
                border_radius: Some(32.0),
                box_shadow: Some("0 20px 40px rgba(15, 23, 42, 0.45)".to_string()),
                padding: Some(32.0),
                ..ElementStyle::default()
            })
    });

    let mut elements = vec![title, description, accent];
    elements.extend(cards);
    elements
}
