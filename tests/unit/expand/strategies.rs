use super::*;

use crate::article::model::Section;
use crate::budget::limits::Density;

fn balanced() -> BudgetLimits {
    BudgetLimits::for_density(Density::Balanced)
}

fn section(title: &str) -> Section {
    Section {
        title: title.to_string(),
        ..Section::default()
    }
}

fn faq_section(answers: usize) -> Section {
    let mut s = section("FAQs");
    for i in 0..answers {
        let q = format!("What about topic number {i}");
        let body = format!("A complete answer about topic number {i} with enough detail.");
        s.sub_headings.push(q.clone());
        s.sub_heading_bodies.push(&q, body.clone());
        s.paragraphs.push(body);
    }
    s
}

#[test]
fn faq_section_yields_overview_plus_qa_drafts() {
    let limits = balanced();
    let drafts = expand_section(&faq_section(3), &limits);
    assert_eq!(drafts.len(), 4);

    let overview = &drafts[0];
    assert_eq!(overview.title, "FAQs");
    let questions = overview.bullets.as_ref().unwrap();
    assert_eq!(questions.len(), 3);
    for q in questions {
        assert!(q.ends_with('?'), "got {q:?}");
        assert!(q.chars().count() <= limits.bullet_char_limit);
    }

    for qa in &drafts[1..] {
        assert!(qa.title.ends_with('?'));
        assert!(qa.title.chars().count() <= limits.max_title_len);
        assert!(qa.content.chars().count() <= limits.content_char_limit);
        assert!(qa.bullets.is_none());
    }
}

#[test]
fn faq_overview_questions_are_capped_at_the_bullet_budget() {
    let limits = balanced();
    let drafts = expand_section(&faq_section(limits.max_bullets_no_intro + 3), &limits);
    let questions = drafts[0].bullets.as_ref().unwrap();
    assert_eq!(questions.len(), limits.max_bullets_no_intro);
}

#[test]
fn faq_skips_sub_headings_with_trivial_answers() {
    let limits = balanced();
    let mut s = faq_section(2);
    s.sub_headings.push("Short one".to_string());
    s.sub_heading_bodies.push("Short one", "Tiny.".to_string());
    let drafts = expand_section(&s, &limits);
    // Overview plus the two substantial answers; the trivial one is skipped.
    assert_eq!(drafts.len(), 3);
}

#[test]
fn myth_titles_select_the_faq_strategy() {
    let mut s = faq_section(2);
    s.title = "Myths about sleep".to_string();
    let drafts = expand_section(&s, &balanced());
    assert!(drafts[0].bullets.is_some());
}

#[test]
fn bulleted_overview_without_intro_packs_more_bullets() {
    let limits = balanced();
    let mut s = section("Checklist");
    s.bullets = (0..limits.max_bullets_no_intro + 3)
        .map(|i| format!("Item number {i}"))
        .collect();
    let drafts = expand_section(&s, &limits);

    assert_eq!(drafts.len(), 2);
    assert_eq!(
        drafts[0].bullets.as_ref().unwrap().len(),
        limits.max_bullets_no_intro
    );
    assert!(drafts[0].content.is_empty());
    assert_eq!(drafts[1].bullets.as_ref().unwrap().len(), 3);
    assert!(drafts[1].title.ends_with("(cont.)"));
    assert!(drafts[1].content.is_empty());
}

#[test]
fn bulleted_overview_with_intro_reserves_rows_for_it() {
    let limits = balanced();
    let mut s = section("Checklist");
    s.bullet_intro = Some("These are the essentials:".to_string());
    s.bullets = (0..limits.max_bullets_no_intro)
        .map(|i| format!("Item number {i}"))
        .collect();
    let drafts = expand_section(&s, &limits);

    assert_eq!(drafts[0].bullets.as_ref().unwrap().len(), limits.max_bullets_with_intro);
    assert_eq!(drafts[0].content, "These are the essentials:");
    // Continuations never carry the intro.
    assert!(drafts[1].content.is_empty());
}

#[test]
fn hierarchy_collapses_to_one_draft_when_everything_fits() {
    let limits = balanced();
    let mut s = section("Training");
    for name in ["Warmup", "Cooldown"] {
        s.sub_headings.push(name.to_string());
        s.sub_heading_bodies
            .push(name, format!("{name} routine described in one sentence."));
        s.paragraphs.push(format!("{name} routine described in one sentence."));
    }
    let drafts = expand_section(&s, &limits);
    assert_eq!(drafts.len(), 1);
    assert!(drafts[0].content.starts_with("Warmup: "));
    assert!(drafts[0].content.contains("Cooldown: "));
}

#[test]
fn hierarchy_splits_into_titled_drafts_when_combined_overflows() {
    let limits = balanced();
    let long_body = "This body sentence is repeated to overflow the slide budget. ".repeat(8);
    let mut s = section("Training");
    s.section_intro = Some("Two phases matter most.".to_string());
    for name in ["Warmup", "Cooldown"] {
        s.sub_headings.push(name.to_string());
        s.sub_heading_bodies.push(name, long_body.trim().to_string());
        s.paragraphs.push(long_body.trim().to_string());
    }
    let drafts = expand_section(&s, &limits);

    assert_eq!(drafts.len(), 3);
    assert_eq!(drafts[0].title, "Training");
    assert_eq!(drafts[0].content, "Two phases matter most.");
    assert_eq!(drafts[1].title, "Warmup");
    assert_eq!(drafts[2].title, "Cooldown");
    for d in &drafts {
        assert!(d.content.chars().count() <= limits.content_char_limit);
    }
}

#[test]
fn long_paragraph_splits_at_sentence_boundaries() {
    let limits = balanced();
    let sentence = "This sentence pads the paragraph with a steady boring rhythm. ";
    let mut s = section("Deep Dive");
    s.paragraphs.push(sentence.repeat(20).trim().to_string());
    let drafts = expand_section(&s, &limits);

    assert!(drafts.len() >= 3, "got {} drafts", drafts.len());
    for d in &drafts {
        assert!(d.content.chars().count() <= limits.content_char_limit);
        assert!(d.content.ends_with('.'), "draft ends mid-sentence: {:?}", d.content);
    }
    assert_eq!(drafts[0].title, "Deep Dive");
    assert!(drafts[1].title.ends_with("(cont.)"));
}

#[test]
fn short_paragraphs_collapse_to_one_draft() {
    let mut s = section("Brief");
    s.paragraphs.push("One short paragraph.".to_string());
    let drafts = expand_section(&s, &balanced());
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].content, "One short paragraph.");
}

#[test]
fn single_leftover_bullet_joins_the_final_draft() {
    let mut s = section("Notes");
    s.paragraphs.push("A paragraph of context.".to_string());
    s.bullets.push("One stray takeaway".to_string());
    let drafts = expand_section(&s, &balanced());
    assert_eq!(drafts.len(), 1);
    assert_eq!(
        drafts[0].bullets.as_deref(),
        Some(["One stray takeaway".to_string()].as_slice())
    );
}

#[test]
fn lone_bullet_without_paragraphs_becomes_content() {
    let mut s = section("Tip");
    s.bullets.push("The only tip worth sharing".to_string());
    let drafts = expand_section(&s, &balanced());
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].content, "The only tip worth sharing");
    assert!(drafts[0].bullets.is_none());
}

#[test]
fn empty_sections_expand_to_nothing() {
    assert!(expand_section(&section("Empty"), &balanced()).is_empty());
}

#[test]
fn section_image_rides_on_the_first_draft() {
    let mut s = section("Pics");
    s.paragraphs.push("Context paragraph.".to_string());
    s.image = Some("https://img.example/a.png".to_string());
    let drafts = expand_section(&s, &balanced());
    assert!(drafts[0].image_slide);
    assert_eq!(drafts[0].image.as_deref(), Some("https://img.example/a.png"));
}
