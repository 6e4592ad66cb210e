use super::constants::*;
use super::input::PointerState;
use super::token::Token;

/// Per-token drawing parameters derived from simulation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenAppearance {
    pub alpha: f32,
    pub rotation: f32,
    pub glow_gradient_radius: f32,
    pub glow_disc_radius: f32,
    pub glow_alpha: f32,
}

/// 1 at the pointer, falling linearly to 0 at `MOUSE_RADIUS`.
#[inline]
pub fn proximity(token: &Token, pointer: &PointerState) -> f32 {
    let dx = token.pos.x - pointer.x;
    let dy = token.pos.y - pointer.y;
    let d = dx.hypot(dy);
    let near = 1.0 - d / MOUSE_RADIUS;
    if near.is_finite() {
        near.max(0.0)
    } else {
        0.0
    }
}

pub fn token_appearance(token: &Token, pointer: &PointerState) -> TokenAppearance {
    let alpha = (token.alpha + proximity(token, pointer) * NEAR_ALPHA_GAIN).min(1.0);
    TokenAppearance {
        alpha,
        rotation: token.phase.sin() * ROTATION_AMPLITUDE,
        glow_gradient_radius: token.size * GLOW_GRADIENT_SCALE,
        glow_disc_radius: token.size * GLOW_DISC_SCALE,
        glow_alpha: alpha * GLOW_ALPHA_SCALE,
    }
}

#[inline]
pub fn indicator_origin(index: usize) -> (f32, f32) {
    (
        INDICATOR_OFFSET + index as f32 * INDICATOR_SPACING,
        INDICATOR_OFFSET,
    )
}

/// Brightness of indicator `index` at wall-clock `t_ms`.
#[inline]
pub fn indicator_alpha(t_ms: f64, index: usize) -> f32 {
    let wave = (t_ms / 1000.0 - index as f64).cos() as f32;
    INDICATOR_BASE_ALPHA + wave * INDICATOR_PULSE_AMPLITUDE
}

pub fn hsla(hue: f32, saturation_pct: f32, lightness_pct: f32, alpha: f32) -> String {
    format!("hsla({hue},{saturation_pct}%,{lightness_pct}%,{alpha})")
}

pub fn glyph_font(size: f32, family: &str) -> String {
    format!("{size}px {family}")
}
