//! Per-section expansion strategies.
//!
//! [`expand_section`] turns one [`Section`] into an ordered list of drafts:
//! the first draft is always the densest summary of the section, so topic
//! coverage is maximized when the allocator grants only one slide. Strategy
//! selection is first-match-wins: FAQ/myth pairing, bulleted overview,
//! hierarchical sub-headings, sentence-packing paragraph split, then the
//! lone-bullet fallback.

use crate::article::model::Section;
use crate::budget::limits::BudgetLimits;
use crate::foundation::text::{char_len, condense, split_sentences, truncate_at_word};

/// Section titles that always select the FAQ/myth strategy.
const FAQ_TITLES: &[&str] = &["faq", "faqs", "myths", "common misconceptions", "common questions"];

/// Sub-heading bodies shorter than this are treated as empty answers.
const MIN_SUB_BODY_CHARS: usize = 20;

/// Suffix appended to continuation slide titles.
const CONT_SUFFIX: &str = " (cont.)";

/// An un-numbered, un-typed candidate slide produced from one section.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideDraft {
    /// Draft title, within the title budget.
    pub title: String,
    /// Body text, within the content budget (may be empty on bullet slides).
    pub content: String,
    /// Bullet rows, each within the bullet budget.
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
    /// Whether the renderer should use the image layout for this draft.
    #[serde(default)]
    pub image_slide: bool,
    /// Image URL riding on this draft, if the section had one.
    #[serde(default)]
    pub image: Option<String>,
}

impl SlideDraft {
    fn text(title: String, content: String) -> Self {
        Self {
            title,
            content,
            bullets: None,
            image_slide: false,
            image: None,
        }
    }

    fn bulleted(title: String, content: String, bullets: Vec<String>) -> Self {
        Self {
            title,
            content,
            bullets: Some(bullets),
            image_slide: false,
            image: None,
        }
    }
}

/// Expand one section into ordered slide drafts under the active budget.
pub fn expand_section(section: &Section, limits: &BudgetLimits) -> Vec<SlideDraft> {
    let mut drafts = if faq_applies(section) {
        expand_faq(section, limits)
    } else if section.bullets.len() >= 2 {
        expand_bulleted(section, limits)
    } else if hierarchy_applies(section) {
        expand_hierarchy(section, limits)
    } else if !section.paragraphs.is_empty() {
        expand_paragraphs(section, limits)
    } else if section.bullets.len() == 1 {
        vec![SlideDraft::text(
            section.title.clone(),
            condense(&section.bullets[0], limits.content_char_limit),
        )]
    } else {
        Vec::new()
    };

    if let Some(image) = &section.image
        && let Some(first) = drafts.first_mut()
    {
        first.image = Some(image.clone());
        first.image_slide = true;
    }
    drafts
}

fn faq_applies(section: &Section) -> bool {
    if section.sub_headings.len() < 2 {
        return false;
    }
    let lowered = section.title.to_lowercase();
    FAQ_TITLES.contains(&lowered.as_str())
        || lowered.contains("faq")
        || lowered.contains("myth")
        || lowered.contains("misconception")
}

fn hierarchy_applies(section: &Section) -> bool {
    if section.sub_headings.len() < 2 {
        return false;
    }
    let non_trivial = section
        .sub_heading_bodies
        .iter()
        .filter(|(_, body)| char_len(&body.join(" ")) >= MIN_SUB_BODY_CHARS)
        .count();
    non_trivial >= 2
}

/// FAQ/myth pairing: an overview slide of bulleted questions, then one Q&A
/// slide per sub-heading with a non-trivial answer.
fn expand_faq(section: &Section, limits: &BudgetLimits) -> Vec<SlideDraft> {
    let intro = section
        .section_intro
        .as_deref()
        .map(|t| condense(t, limits.bullet_intro_char_limit))
        .unwrap_or_default();
    let questions: Vec<String> = section
        .sub_headings
        .iter()
        .take(limits.max_bullets_no_intro)
        .map(|h| as_question(h, limits.bullet_char_limit))
        .collect();

    let mut drafts = vec![SlideDraft::bulleted(
        section.title.clone(),
        intro,
        questions,
    )];

    for (heading, body) in section.sub_heading_bodies.iter() {
        let answer = body.join(" ");
        if char_len(&answer) < MIN_SUB_BODY_CHARS {
            continue;
        }
        drafts.push(SlideDraft::text(
            as_question(heading, limits.max_title_len),
            condense(&answer, limits.content_char_limit),
        ));
    }
    drafts
}

/// Bulleted overview: intro + first bullets, then `(cont.)` drafts holding
/// the remainder. Continuations never carry an intro.
fn expand_bulleted(section: &Section, limits: &BudgetLimits) -> Vec<SlideDraft> {
    let (first_cap, content) = match &section.bullet_intro {
        Some(intro) => (
            limits.max_bullets_with_intro,
            condense(intro, limits.bullet_intro_char_limit),
        ),
        None => (limits.max_bullets_no_intro, String::new()),
    };

    let first_cap = first_cap.min(section.bullets.len());
    let mut drafts = vec![SlideDraft::bulleted(
        section.title.clone(),
        content,
        section.bullets[..first_cap].to_vec(),
    )];

    for chunk in section.bullets[first_cap..].chunks(limits.max_bullets_no_intro) {
        drafts.push(SlideDraft::bulleted(
            cont_title(&section.title, limits),
            String::new(),
            chunk.to_vec(),
        ));
    }
    drafts
}

/// Hierarchical sub-headings: one combined slide when everything fits,
/// otherwise one titled slide per sub-heading, preceded by a dedicated
/// intro draft when the section has one.
fn expand_hierarchy(section: &Section, limits: &BudgetLimits) -> Vec<SlideDraft> {
    let parts: Vec<(String, String)> = section
        .sub_heading_bodies
        .iter()
        .map(|(heading, body)| (heading.to_string(), body.join(" ")))
        .filter(|(_, body)| char_len(body) >= MIN_SUB_BODY_CHARS)
        .collect();

    let combined = parts
        .iter()
        .map(|(heading, body)| format!("{heading}: {body}"))
        .collect::<Vec<_>>()
        .join(" ");
    if char_len(&combined) <= limits.content_char_limit {
        return vec![SlideDraft::text(section.title.clone(), combined)];
    }

    let mut drafts = Vec::new();
    if let Some(intro) = &section.section_intro {
        drafts.push(SlideDraft::text(
            section.title.clone(),
            condense(intro, limits.content_char_limit),
        ));
    }
    for (heading, body) in parts {
        drafts.push(SlideDraft::text(
            truncate_at_word(&heading, limits.max_title_len),
            condense(&body, limits.content_char_limit),
        ));
    }
    drafts
}

/// Default path: greedy sentence packing of the concatenated paragraphs.
fn expand_paragraphs(section: &Section, limits: &BudgetLimits) -> Vec<SlideDraft> {
    let all = section.paragraphs.join(" ");
    let mut drafts = Vec::new();

    if char_len(&all) <= limits.content_char_limit {
        drafts.push(SlideDraft::text(section.title.clone(), all));
    } else {
        let mut current = String::new();
        for sentence in split_sentences(&all) {
            let sentence = if char_len(&sentence) > limits.content_char_limit {
                condense(&sentence, limits.content_char_limit)
            } else {
                sentence
            };
            let packed = char_len(&current) + 1 + char_len(&sentence);
            if !current.is_empty() && packed > limits.content_char_limit {
                drafts.push(packed_draft(section, drafts.len(), current, limits));
                current = String::new();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&sentence);
        }
        if !current.is_empty() {
            drafts.push(packed_draft(section, drafts.len(), current, limits));
        }
    }

    // Exactly one leftover bullet joins the final draft instead of spawning
    // its own slide.
    if section.bullets.len() == 1
        && let Some(last) = drafts.last_mut()
    {
        last.bullets = Some(vec![section.bullets[0].clone()]);
    }
    drafts
}

fn packed_draft(
    section: &Section,
    index: usize,
    content: String,
    limits: &BudgetLimits,
) -> SlideDraft {
    let title = if index == 0 {
        section.title.clone()
    } else {
        cont_title(&section.title, limits)
    };
    SlideDraft::text(title, content)
}

/// `"<title> (cont.)"`, shortened at a word boundary when the suffix would
/// overflow the title budget.
fn cont_title(title: &str, limits: &BudgetLimits) -> String {
    let suffix_len = char_len(CONT_SUFFIX);
    if char_len(title) + suffix_len <= limits.max_title_len {
        return format!("{title}{CONT_SUFFIX}");
    }
    let base = truncate_at_word(title, limits.max_title_len.saturating_sub(suffix_len));
    format!("{base}{CONT_SUFFIX}")
}

/// Render a heading as a question within `max_chars`: any terminal
/// punctuation is replaced by a single `?`.
fn as_question(heading: &str, max_chars: usize) -> String {
    let stripped = heading.trim_end_matches(['?', '.', '!', ':']).trim_end();
    let mut out = condense(stripped, max_chars.saturating_sub(1).max(1));
    out.push('?');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/expand/strategies.rs"]
mod tests;
