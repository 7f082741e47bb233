use super::*;

#[test]
fn balanced_limits_match_the_canvas_derivation() {
    let limits = BudgetLimits::for_density(Density::Balanced);
    assert_eq!(limits.max_title_len, 58);
    assert_eq!(limits.content_char_limit, 500);
    assert_eq!(limits.bullet_char_limit, 94);
    assert_eq!(limits.bullet_intro_char_limit, 150);
    assert_eq!(limits.max_bullets_no_intro, 5);
    assert_eq!(limits.max_bullets_with_intro, 3);
    assert_eq!(limits.max_slides, 10);
}

#[test]
fn character_limits_scale_monotonically_with_density() {
    let concise = BudgetLimits::for_density(Density::Concise);
    let balanced = BudgetLimits::for_density(Density::Balanced);
    let detailed = BudgetLimits::for_density(Density::Detailed);

    assert!(concise.content_char_limit < balanced.content_char_limit);
    assert!(balanced.content_char_limit < detailed.content_char_limit);
    assert!(concise.bullet_char_limit < balanced.bullet_char_limit);
    assert!(balanced.bullet_char_limit < detailed.bullet_char_limit);
    assert!(concise.bullet_intro_char_limit < balanced.bullet_intro_char_limit);
    assert!(balanced.bullet_intro_char_limit < detailed.bullet_intro_char_limit);
    assert!(concise.max_slides < balanced.max_slides);
    assert!(balanced.max_slides < detailed.max_slides);
}

#[test]
fn title_budget_and_bullet_counts_are_density_invariant() {
    let balanced = BudgetLimits::for_density(Density::Balanced);
    for density in Density::ALL {
        let limits = BudgetLimits::for_density(density);
        assert_eq!(limits.max_title_len, balanced.max_title_len);
        assert_eq!(limits.max_bullets_no_intro, balanced.max_bullets_no_intro);
        assert_eq!(limits.max_bullets_with_intro, balanced.max_bullets_with_intro);
    }
}

#[test]
fn intro_always_costs_bullet_rows() {
    for density in Density::ALL {
        let limits = BudgetLimits::for_density(density);
        assert!(limits.max_bullets_with_intro < limits.max_bullets_no_intro);
        assert!(limits.max_bullets_with_intro >= 1);
    }
}

#[test]
fn content_slots_leave_room_for_cover_and_cta() {
    for density in Density::ALL {
        let limits = BudgetLimits::for_density(density);
        assert_eq!(limits.max_content_slides(), limits.max_slides - 2);
    }
}

#[test]
fn monospace_fits_fewer_characters_per_line() {
    let mono = chars_per_line(900.0, 38.0, true);
    let proportional = chars_per_line(900.0, 38.0, false);
    assert!(mono < proportional);
    assert_eq!(proportional, 50);
}

#[test]
fn portrait_and_square_canvases_share_limits() {
    let portrait = BudgetLimits::for_canvas(default_canvas(), Density::Balanced).unwrap();
    let square = BudgetLimits::for_canvas(Canvas::new(1080, 1080).unwrap(), Density::Balanced)
        .unwrap();
    assert_eq!(portrait, square);
}

#[test]
fn degenerate_canvas_is_rejected() {
    let tiny = Canvas::new(200, 200).unwrap();
    assert!(BudgetLimits::for_canvas(tiny, Density::Balanced).is_err());
}

#[test]
fn density_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Density::Concise).unwrap(), "\"concise\"");
    let parsed: Density = serde_json::from_str("\"detailed\"").unwrap();
    assert_eq!(parsed, Density::Detailed);
}
