use super::constants::*;
use super::input::PointerState;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One falling glyph.
///
/// `speed`, `size`, `glyph`, `hue`, `alpha` and `sway` are drawn in
/// [`Token::reset`] and stay fixed until the token is recycled.
#[derive(Clone, Debug)]
pub struct Token {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub size: f32,
    pub glyph: &'static str,
    pub hue: f32,
    pub alpha: f32,
    pub sway: f32,
    pub phase: f32,
}

// Uniform draw in [min, max). Degenerate ranges collapse to `min` instead of
// panicking the way `gen_range` would.
#[inline]
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

#[inline]
fn rand_in<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    rand_between(rng, range.0, range.1)
}

impl Token {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let mut token = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: 0.0,
            size: 0.0,
            glyph: GLYPHS[0],
            hue: 0.0,
            alpha: 1.0,
            sway: 0.0,
            phase: 0.0,
        };
        token.reset(rng, width, height, true);
        token
    }

    /// Reseed every parameter. `initial` scatters the token over the whole
    /// viewport; otherwise it re-enters just above the top edge.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32, initial: bool) {
        self.pos.x = rand_between(rng, 0.0, width);
        self.pos.y = if initial {
            rand_between(rng, 0.0, height)
        } else {
            RESPAWN_Y
        };
        self.vel = Vec2::ZERO;
        self.speed = rand_in(rng, SPEED_RANGE);
        self.size = rand_in(rng, SIZE_RANGE).round();
        let idx = ((rng.gen::<f32>() * GLYPHS.len() as f32) as usize).min(GLYPHS.len() - 1);
        self.glyph = GLYPHS[idx];
        self.hue = rand_in(rng, HUE_RANGE);
        self.alpha = rand_in(rng, ALPHA_RANGE);
        self.sway = rand_in(rng, SWAY_RANGE);
        self.phase = rand_between(rng, 0.0, TAU);
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        width: f32,
        height: f32,
        pointer: &PointerState,
        rng: &mut R,
    ) {
        self.phase += self.sway * dt;
        let wave = self.phase.sin();
        self.pos.y += self.speed * dt * (DRIFT_BASE + wave * DRIFT_SWING);
        self.pos.x += self.speed * dt * wave * SWAY_SWING;

        if pointer.down {
            let delta = Vec2::new(pointer.x, pointer.y) - self.pos;
            // denominator is >= 1, so the pull stays finite at zero distance
            let smoothed = 1.0 + delta.length().max(MIN_ATTRACTION_DISTANCE) * ATTRACTION_FALLOFF;
            self.vel += delta / smoothed * dt;
        }

        self.vel *= VELOCITY_DAMPING;
        self.pos += self.vel * dt;

        if self.pos.y > height + BOTTOM_MARGIN {
            self.reset(rng, width, height, false);
        }
        if self.pos.y < -TOP_MARGIN {
            self.pos.y = height + BOTTOM_MARGIN;
        }
        if self.pos.x < -SIDE_MARGIN {
            self.pos.x = width + SIDE_MARGIN;
        }
        if self.pos.x > width + SIDE_MARGIN {
            self.pos.x = -SIDE_MARGIN;
        }
    }
}
