//! Two-phase rationing of the global content-slide budget.
//!
//! Phase 1 (coverage) grants every non-empty section its first draft in
//! document order; phase 2 (depth) round-robins additional drafts until the
//! budget is exhausted or no section has drafts left to grant. When the
//! number of non-empty sections fits the budget, every section contributes
//! at least one slide.

use crate::expand::strategies::SlideDraft;

/// Choose drafts from `section_drafts` (one list per section, in source
/// order) without exceeding `max_content_slides`, maximizing topic coverage
/// before depth. The result preserves source order.
pub fn allocate_slides(
    section_drafts: &[Vec<SlideDraft>],
    max_content_slides: usize,
) -> Vec<SlideDraft> {
    let mut taken = vec![0usize; section_drafts.len()];
    let mut granted = 0usize;

    // Phase 1: one draft per non-empty section, in order, while budget lasts.
    for (idx, drafts) in section_drafts.iter().enumerate() {
        if granted == max_content_slides {
            break;
        }
        if !drafts.is_empty() {
            taken[idx] = 1;
            granted += 1;
        }
    }

    // Phase 2: full passes granting one extra draft per section with drafts
    // remaining; a pass with zero grants is the fixed point.
    'depth: loop {
        let mut progressed = false;
        for (idx, drafts) in section_drafts.iter().enumerate() {
            if granted == max_content_slides {
                break 'depth;
            }
            if taken[idx] < drafts.len() {
                taken[idx] += 1;
                granted += 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    let mut chosen: Vec<SlideDraft> = section_drafts
        .iter()
        .zip(&taken)
        .flat_map(|(drafts, &n)| drafts[..n].iter().cloned())
        .collect();
    // Safety net against any rounding drift in the grant loop.
    chosen.truncate(max_content_slides);
    chosen
}

#[cfg(test)]
#[path = "../../tests/unit/allocate/plan.rs"]
mod tests;
