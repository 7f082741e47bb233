/// Role of a slide within the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    /// Opening slide: article title, excerpt, feature image.
    Cover,
    /// Body slide produced from a section draft.
    Content,
    /// Closing call-to-action slide.
    Cta,
}

/// A finalized, numbered, typed slide record ready for rendering.
///
/// Exactly one cover slide (first) and one CTA slide (last) bracket the
/// content slides; the generator never mutates a slide after creation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Stable, deterministic identifier (index-derived).
    pub id: String,
    /// Slide role.
    pub kind: SlideKind,
    /// Title text, within the title budget.
    pub title: String,
    /// Body text, within the content budget.
    pub content: String,
    /// Bullet rows, each within the bullet budget.
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
    /// 1-based position among content slides; `None` on cover and CTA.
    #[serde(default)]
    pub number: Option<u32>,
    /// Image URL for the renderer's image layout, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Video URL attached by the export pipeline, if any.
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Reassign 1-based numbers to the content slides in place.
///
/// Callers apply this after editing the deck (inserting, removing or
/// reordering slides); cover and CTA slides keep `number: None`.
pub fn renumber_content_slides(slides: &mut [Slide]) {
    let mut next = 1u32;
    for slide in slides {
        if slide.kind == SlideKind::Content {
            slide.number = Some(next);
            next += 1;
        } else {
            slide.number = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
