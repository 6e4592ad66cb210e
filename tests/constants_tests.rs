// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_ranges_are_ordered_and_positive() {
    for (min, max) in [SPEED_RANGE, SIZE_RANGE, HUE_RANGE, ALPHA_RANGE, SWAY_RANGE] {
        assert!(min > 0.0, "range starts at {min}");
        assert!(max > min, "empty range [{min}, {max})");
    }
    // Base opacity must leave headroom for the proximity boost
    assert!(ALPHA_RANGE.1 < 1.0);
    assert!(HUE_RANGE.1 <= 360.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pool_bounds_are_consistent() {
    assert!(MIN_TOKEN_COUNT < MAX_TOKEN_COUNT);
    assert!(SMALL_SCREEN_MIN_COUNT <= MIN_TOKEN_COUNT);
    assert!(SMALL_SCREEN_SCALE > 0.0 && SMALL_SCREEN_SCALE < 1.0);
    assert!(TOKEN_PER_PIXEL2 > 0.0);
    assert!(SMALL_SCREEN_MAX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_stable() {
    // Damping below 1 so pointer impulses die out
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
    // Drift never reverses: base exceeds the oscillation swing
    assert!(DRIFT_BASE > DRIFT_SWING);
    assert!(MIN_ATTRACTION_DISTANCE > 0.0);
    assert!(ATTRACTION_FALLOFF > 0.0);
    assert!(MAX_FRAME_STEP_MS > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn edge_margins_leave_room_for_respawn() {
    // Respawned tokens sit above the top edge but inside the snap margin
    assert!(RESPAWN_Y < 0.0);
    assert!(RESPAWN_Y > -TOP_MARGIN);
    assert!(BOTTOM_MARGIN > 0.0);
    assert!(SIDE_MARGIN > 0.0);
}

#[test]
fn glyph_palette_is_unique() {
    assert!(!GLYPHS.is_empty());
    for (i, g) in GLYPHS.iter().enumerate() {
        assert!(!g.is_empty());
        assert!(!GLYPHS[i + 1..].contains(g), "duplicate glyph {g}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn indicator_pulse_stays_visible() {
    assert!(INDICATOR_COUNT == 3);
    assert!(INDICATOR_BASE_ALPHA - INDICATOR_PULSE_AMPLITUDE > 0.0);
    assert!(INDICATOR_BASE_ALPHA + INDICATOR_PULSE_AMPLITUDE < 1.0);
    assert!(INDICATOR_SPACING > INDICATOR_SIZE);
}

#[test]
fn web_strings_are_well_formed() {
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    for color in [WASH_TOP, WASH_BOTTOM, GLOW_EDGE] {
        assert!(color.starts_with("rgba(") && color.ends_with(')'), "{color}");
    }
    assert!(GLYPH_FONT_FAMILY.ends_with("monospace"));
    assert_eq!(INDICATOR_RGB.split(',').count(), 3);
}
