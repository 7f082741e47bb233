use super::*;

use crate::budget::limits::{BudgetLimits, Density};

fn article(body: &str) -> Article {
    Article {
        title: "How Budgets Work".to_string(),
        body: body.to_string(),
        excerpt: None,
        feature_image: None,
        tags: Vec::new(),
    }
}

fn balanced() -> BudgetLimits {
    BudgetLimits::for_density(Density::Balanced)
}

const BODY: &str = "\
Lede paragraph before any heading.

## First Section

Opening paragraph of the section. It has two sentences.

### Sub One

Body text under sub one.

### Sub Two

Body text under sub two.

## Ways to Win

Here are the ways:

- First way to win
- Second way to win
- Third way to win

## Related Links

- [one](https://example.com/a)
- [two](https://example.com/b)

## Gallery

![scenery](https://img.example/scenery.png)
";

#[test]
fn sections_come_out_in_document_order() {
    let sections = extract_sections(&article(BODY), &balanced());
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["How Budgets Work", "First Section", "Ways to Win"]);
}

#[test]
fn lede_becomes_a_section_titled_from_the_article() {
    let sections = extract_sections(&article(BODY), &balanced());
    assert_eq!(sections[0].title, "How Budgets Work");
    assert_eq!(sections[0].paragraphs, vec!["Lede paragraph before any heading."]);
}

#[test]
fn sub_headings_keep_first_seen_order_and_bodies() {
    let sections = extract_sections(&article(BODY), &balanced());
    let section = &sections[1];
    assert_eq!(section.sub_headings, vec!["Sub One", "Sub Two"]);
    let pairs: Vec<(&str, &[String])> = section.sub_heading_bodies.iter().collect();
    assert_eq!(pairs[0].0, "Sub One");
    assert_eq!(pairs[0].1, ["Body text under sub one.".to_string()]);
    assert_eq!(pairs[1].0, "Sub Two");
}

#[test]
fn section_intro_is_text_before_first_sub_heading() {
    let sections = extract_sections(&article(BODY), &balanced());
    let section = &sections[1];
    assert_eq!(
        section.section_intro.as_deref(),
        Some("Opening paragraph of the section. It has two sentences.")
    );
}

#[test]
fn list_items_flatten_into_bullets_with_intro() {
    let sections = extract_sections(&article(BODY), &balanced());
    let section = &sections[2];
    assert_eq!(section.bullets.len(), 3);
    assert_eq!(section.bullets[0], "First way to win");
    assert_eq!(section.bullet_intro.as_deref(), Some("Here are the ways:"));
}

#[test]
fn stoplist_heading_with_only_links_is_dropped() {
    let sections = extract_sections(&article(BODY), &balanced());
    assert!(sections.iter().all(|s| s.title != "Related Links"));
}

#[test]
fn textless_sections_are_dropped() {
    let sections = extract_sections(&article(BODY), &balanced());
    assert!(sections.iter().all(|s| s.title != "Gallery"));
}

#[test]
fn only_first_image_is_kept_per_section() {
    let body = "## Pics\n\nSome text.\n\n\
                ![a](https://img.example/a.png)\n\n\
                ![b](https://img.example/b.png)\n";
    let sections = extract_sections(&article(body), &balanced());
    assert_eq!(sections[0].image.as_deref(), Some("https://img.example/a.png"));
}

#[test]
fn feature_image_is_excluded_from_section_selection() {
    let body = "## Pics\n\nSome text.\n\n\
                ![a](https://img.example/feature.png)\n\n\
                ![b](https://img.example/b.png)\n";
    let mut art = article(body);
    art.feature_image = Some("https://img.example/feature.png".to_string());
    let sections = extract_sections(&art, &balanced());
    assert_eq!(sections[0].image.as_deref(), Some("https://img.example/b.png"));
}

#[test]
fn long_titles_are_cut_at_a_word_boundary() {
    let limits = balanced();
    let long = "word ".repeat(30);
    let body = format!("## {long}\n\nBody text.\n");
    let sections = extract_sections(&article(&body), &limits);
    let title = &sections[0].title;
    assert!(title.chars().count() <= limits.max_title_len);
    assert!(title.ends_with("word"), "got {title:?}");
}

#[test]
fn long_bullets_are_truncated_to_the_bullet_budget() {
    let limits = balanced();
    let item = "clause with some words, ".repeat(12);
    let body = format!("## List\n\nIntro.\n\n- {item}\n- second item\n");
    let sections = extract_sections(&article(&body), &limits);
    for bullet in &sections[0].bullets {
        assert!(bullet.chars().count() <= limits.bullet_char_limit);
    }
}

#[test]
fn inline_markup_is_flattened_to_plain_text() {
    let body = "## Styled\n\nText with **bold**, *italics* and a [link](https://x.example).\n";
    let sections = extract_sections(&article(body), &balanced());
    assert_eq!(
        sections[0].paragraphs,
        vec!["Text with bold, italics and a link."]
    );
}

#[test]
fn code_blocks_contribute_no_slide_text() {
    let body = "## Code\n\nReal paragraph.\n\n```\nlet x = 1;\n```\n";
    let sections = extract_sections(&article(body), &balanced());
    assert_eq!(sections[0].paragraphs, vec!["Real paragraph."]);
}

#[test]
fn empty_body_yields_no_sections() {
    assert!(extract_sections(&article(""), &balanced()).is_empty());
    assert!(extract_sections(&article("   \n\n"), &balanced()).is_empty());
}
