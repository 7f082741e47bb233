//! Markup structure extraction.
//!
//! Walks the article body's block-level events in document order and emits
//! [`Section`] records: H1/H2-equivalent headings open sections, deeper
//! headings open named sub-sections, list items flatten into bullets, and
//! only the first image per section is kept. Code blocks and raw HTML do
//! not contribute slide text; inline markup is flattened to plain text.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::article::model::{Article, Section};
use crate::budget::limits::BudgetLimits;
use crate::foundation::text::{condense, normalize_ws, truncate_at_word};

/// Footer-style headings dropped when they collected no paragraph text.
const STOPLIST: &[&str] = &[
    "related links",
    "related posts",
    "related articles",
    "further reading",
    "read more",
    "references",
    "see also",
    "sources",
];

/// Walk the article body and return its sections in document order.
///
/// Text preceding the first primary heading becomes a lede section titled
/// from the article title. The article's feature image is excluded from
/// per-section image selection. Sections with no extractable text are
/// dropped silently.
pub fn extract_sections(article: &Article, limits: &BudgetLimits) -> Vec<Section> {
    let mut walker = Walker::new(article, limits);
    for event in Parser::new(&article.body) {
        walker.handle(event);
    }
    walker.finish()
}

struct SectionBuilder {
    section: Section,
    active_sub: Option<String>,
    intro_parts: Vec<String>,
    last_paragraph: Option<String>,
    seen_list: bool,
}

impl SectionBuilder {
    fn new(title: String) -> Self {
        Self {
            section: Section {
                title,
                ..Section::default()
            },
            active_sub: None,
            intro_parts: Vec::new(),
            last_paragraph: None,
            seen_list: false,
        }
    }

    fn push_paragraph(&mut self, text: String) {
        if let Some(sub) = &self.active_sub {
            self.section.sub_heading_bodies.push(sub, text.clone());
        } else {
            self.intro_parts.push(text.clone());
        }
        self.last_paragraph = Some(text.clone());
        self.section.paragraphs.push(text);
    }
}

struct Walker<'a> {
    article: &'a Article,
    limits: &'a BudgetLimits,
    sections: Vec<Section>,
    current: Option<SectionBuilder>,
    text: String,
    item_stack: Vec<String>,
    image_depth: usize,
    in_code_block: bool,
    in_heading: bool,
}

impl<'a> Walker<'a> {
    fn new(article: &'a Article, limits: &'a BudgetLimits) -> Self {
        Self {
            article,
            limits,
            sections: Vec::new(),
            current: None,
            text: String::new(),
            item_stack: Vec::new(),
            image_depth: 0,
            in_code_block: false,
            in_heading: false,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.in_heading = true;
                self.text.clear();
            }
            Event::End(TagEnd::Heading(level)) => {
                self.in_heading = false;
                let title = normalize_ws(&self.text);
                self.text.clear();
                if title.is_empty() {
                    return;
                }
                if is_primary(level) {
                    self.finalize_current();
                    self.current = Some(SectionBuilder::new(truncate_at_word(
                        &title,
                        self.limits.max_title_len,
                    )));
                } else {
                    let cur = self.ensure_current();
                    cur.section.sub_headings.push(title.clone());
                    cur.section.sub_heading_bodies.ensure(&title);
                    cur.active_sub = Some(title);
                }
            }
            Event::Start(Tag::Paragraph) => {
                if let Some(item) = self.item_stack.last_mut() {
                    if !item.is_empty() {
                        item.push(' ');
                    }
                } else {
                    self.text.clear();
                }
            }
            Event::End(TagEnd::Paragraph) => {
                if !self.item_stack.is_empty() {
                    return;
                }
                let text = normalize_ws(&self.text);
                self.text.clear();
                if text.is_empty() {
                    return;
                }
                self.ensure_current().push_paragraph(text);
            }
            Event::Start(Tag::List(_)) => {
                if self.item_stack.is_empty() {
                    let cur = self.ensure_current();
                    if !cur.seen_list {
                        cur.seen_list = true;
                        cur.section.bullet_intro = cur.last_paragraph.clone();
                    }
                }
            }
            Event::Start(Tag::Item) => {
                self.item_stack.push(String::new());
            }
            Event::End(TagEnd::Item) => {
                let raw = self.item_stack.pop().unwrap_or_default();
                let text = normalize_ws(&raw);
                if text.is_empty() {
                    return;
                }
                let bullet = condense(&text, self.limits.bullet_char_limit);
                self.ensure_current().section.bullets.push(bullet);
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                self.image_depth += 1;
                let url = dest_url.to_string();
                if self.article.feature_image.as_deref() == Some(url.as_str()) {
                    return;
                }
                let cur = self.ensure_current();
                if cur.section.image.is_none() {
                    cur.section.image = Some(url);
                }
            }
            Event::End(TagEnd::Image) => {
                self.image_depth = self.image_depth.saturating_sub(1);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.text.clear();
            }
            Event::Text(t) | Event::Code(t) => self.push_text(&t),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            _ => {}
        }
    }

    fn push_text(&mut self, t: &str) {
        if self.image_depth > 0 || self.in_code_block {
            return;
        }
        if self.in_heading {
            self.text.push_str(t);
        } else if let Some(item) = self.item_stack.last_mut() {
            item.push_str(t);
        } else {
            self.text.push_str(t);
        }
    }

    fn ensure_current(&mut self) -> &mut SectionBuilder {
        let article = self.article;
        let limits = self.limits;
        // Lede content before the first heading: a section of its own,
        // titled from the article.
        self.current.get_or_insert_with(|| {
            let title = truncate_at_word(&normalize_ws(&article.title), limits.max_title_len);
            SectionBuilder::new(title)
        })
    }

    fn finalize_current(&mut self) {
        let Some(builder) = self.current.take() else {
            return;
        };
        let mut section = builder.section;
        if !section.sub_headings.is_empty() && !builder.intro_parts.is_empty() {
            section.section_intro = Some(builder.intro_parts.join(" "));
        }
        if !section.has_text() {
            tracing::debug!(title = %section.title, "dropping section with no extractable text");
            return;
        }
        let lowered = section.title.to_lowercase();
        if STOPLIST.contains(&lowered.as_str()) && section.paragraphs.is_empty() {
            tracing::debug!(title = %section.title, "dropping stoplist section");
            return;
        }
        self.sections.push(section);
    }

    fn finish(mut self) -> Vec<Section> {
        self.finalize_current();
        self.sections
    }
}

fn is_primary(level: HeadingLevel) -> bool {
    matches!(level, HeadingLevel::H1 | HeadingLevel::H2)
}

#[cfg(test)]
#[path = "../../tests/unit/article/extract.rs"]
mod tests;
