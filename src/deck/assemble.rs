//! Deck assembly: the full extract -> expand -> allocate pipeline, bracketed
//! by cover and CTA slides.

use crate::allocate::plan::allocate_slides;
use crate::article::extract::extract_sections;
use crate::article::model::Article;
use crate::budget::limits::{BudgetLimits, Density};
use crate::deck::model::{Slide, SlideKind, renumber_content_slides};
use crate::expand::strategies::{SlideDraft, expand_section};
use crate::foundation::text::{condense, normalize_ws, truncate_at_word};

/// Default CTA slide title.
const DEFAULT_CTA_TITLE: &str = "Enjoyed this?";
/// Default CTA slide body.
const DEFAULT_CTA_CONTENT: &str = "Follow for more breakdowns like this one.";

/// Options controlling one generation pass.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct GenerateOptions {
    /// Verbosity preset selecting the active budget constants.
    #[serde(default)]
    pub density: Density,
    /// Override for the CTA slide title.
    #[serde(default)]
    pub cta_title: Option<String>,
    /// Override for the CTA slide body.
    #[serde(default)]
    pub cta_content: Option<String>,
}

/// Generate the full slide deck for `article` under `options`.
///
/// Deterministic: identical inputs yield structurally identical output.
/// An article whose body yields no sections falls back to a single slide
/// built from the excerpt, or to cover + CTA alone when no excerpt exists.
#[tracing::instrument(skip(article), fields(title = %article.title))]
pub fn generate(article: &Article, options: &GenerateOptions) -> Vec<Slide> {
    let limits = BudgetLimits::for_density(options.density);

    let sections = extract_sections(article, &limits);
    let section_drafts: Vec<Vec<SlideDraft>> = sections
        .iter()
        .map(|section| expand_section(section, &limits))
        .collect();
    let mut chosen = allocate_slides(&section_drafts, limits.max_content_slides());

    if chosen.is_empty() {
        tracing::debug!("no sections extracted, falling back to excerpt");
        chosen.extend(excerpt_fallback(article, &limits));
    }

    let mut slides = Vec::with_capacity(chosen.len() + 2);
    slides.push(cover_slide(article, &limits));
    for draft in chosen {
        slides.push(Slide {
            id: format!("slide-{}", slides.len()),
            kind: SlideKind::Content,
            title: draft.title,
            content: draft.content,
            bullets: draft.bullets,
            number: None,
            image: draft.image,
            video_url: None,
        });
    }
    slides.push(cta_slide(options, slides.len()));
    renumber_content_slides(&mut slides);
    slides
}

/// One content slide condensed from the article excerpt, when present.
fn excerpt_fallback(article: &Article, limits: &BudgetLimits) -> Option<SlideDraft> {
    let excerpt = normalize_ws(article.excerpt.as_deref()?);
    if excerpt.is_empty() {
        return None;
    }
    Some(SlideDraft {
        title: truncate_at_word(&normalize_ws(&article.title), limits.max_title_len),
        content: condense(&excerpt, limits.content_char_limit),
        bullets: None,
        image_slide: false,
        image: None,
    })
}

fn cover_slide(article: &Article, limits: &BudgetLimits) -> Slide {
    let excerpt = article
        .excerpt
        .as_deref()
        .map(|e| condense(&normalize_ws(e), limits.content_char_limit))
        .unwrap_or_default();
    Slide {
        id: "slide-0".to_string(),
        kind: SlideKind::Cover,
        title: truncate_at_word(&normalize_ws(&article.title), limits.max_title_len),
        content: excerpt,
        bullets: None,
        number: None,
        image: article.feature_image.clone(),
        video_url: None,
    }
}

fn cta_slide(options: &GenerateOptions, index: usize) -> Slide {
    Slide {
        id: format!("slide-{index}"),
        kind: SlideKind::Cta,
        title: options
            .cta_title
            .clone()
            .unwrap_or_else(|| DEFAULT_CTA_TITLE.to_string()),
        content: options
            .cta_content
            .clone()
            .unwrap_or_else(|| DEFAULT_CTA_CONTENT.to_string()),
        bullets: None,
        number: None,
        image: None,
        video_url: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/assemble.rs"]
mod tests;
