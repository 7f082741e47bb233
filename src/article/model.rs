/// Inbound article record handed to [`crate::generate`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Article {
    /// Article title; becomes the cover slide title.
    pub title: String,
    /// Article body as markdown markup.
    pub body: String,
    /// Optional short summary; the fallback slide source when the body
    /// yields no sections.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Feature image URL; rides on the cover slide and is excluded from
    /// per-section image selection.
    #[serde(default)]
    pub feature_image: Option<String>,
    /// Article tags (consumed by downstream caption surfaces, not by the
    /// pagination core).
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One heading-delimited block of the source article.
///
/// Retained by extraction only when it has at least one paragraph or bullet.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Section title, cut at a word boundary within the title budget.
    pub title: String,
    /// Paragraph texts in document order.
    pub paragraphs: Vec<String>,
    /// Flattened list items, each truncated at the bullet budget.
    pub bullets: Vec<String>,
    /// Paragraph immediately preceding the section's first list, if any.
    #[serde(default)]
    pub bullet_intro: Option<String>,
    /// Secondary heading texts in document order.
    pub sub_headings: Vec<String>,
    /// Paragraphs collected under each secondary heading, in first-seen order.
    pub sub_heading_bodies: SubHeadingBodies,
    /// Text preceding the first secondary heading, when sub-headings exist.
    #[serde(default)]
    pub section_intro: Option<String>,
    /// First image URL encountered in the section, feature image excluded.
    #[serde(default)]
    pub image: Option<String>,
}

impl Section {
    /// Whether extraction keeps this section at all.
    pub fn has_text(&self) -> bool {
        !self.paragraphs.is_empty() || !self.bullets.is_empty()
    }
}

/// Insertion-ordered association of sub-heading -> collected paragraphs.
///
/// The FAQ and hierarchy strategies depend on first-seen document order, so
/// this is an explicit association list, never an unordered map.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SubHeadingBodies(Vec<(String, Vec<String>)>);

impl SubHeadingBodies {
    /// Append `text` to the body of `heading`, inserting the heading at the
    /// end on first sight.
    pub fn push(&mut self, heading: &str, text: String) {
        match self.0.iter_mut().find(|(k, _)| k == heading) {
            Some((_, body)) => body.push(text),
            None => self.0.push((heading.to_string(), vec![text])),
        }
    }

    /// Register `heading` with an empty body if unseen.
    pub fn ensure(&mut self, heading: &str) {
        if !self.0.iter().any(|(k, _)| k == heading) {
            self.0.push((heading.to_string(), Vec::new()));
        }
    }

    /// Body paragraphs for `heading`, if seen.
    pub fn get(&self, heading: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(k, _)| k == heading)
            .map(|(_, body)| body.as_slice())
    }

    /// Iterate `(heading, body)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct sub-headings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no sub-heading was seen.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
