use super::constants::*;
use super::input::InputState;
use super::token::Token;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of tokens for a viewport of `width` x `height` CSS pixels.
pub fn desired_token_count(width: f32, height: f32) -> usize {
    let base = (width * height) / TOKEN_PER_PIXEL2;
    // max/min rather than clamp: a NaN area falls back to the minimum
    let mut count = base
        .max(MIN_TOKEN_COUNT as f32)
        .min(MAX_TOKEN_COUNT as f32)
        .round();
    if width < SMALL_SCREEN_MAX {
        count = (count * SMALL_SCREEN_SCALE)
            .max(SMALL_SCREEN_MIN_COUNT as f32)
            .round();
    }
    count as usize
}

/// Tokens sized to the viewport. Tokens are recycled in place and the
/// length only changes in [`TokenPool::resize`].
pub struct TokenPool {
    tokens: Vec<Token>,
    rng: StdRng,
}

impl TokenPool {
    pub fn new(rng: StdRng) -> Self {
        Self {
            tokens: Vec::with_capacity(MAX_TOKEN_COUNT),
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fit the pool to a new viewport. Survivors keep their state and order
    /// (only their positions are clamped into the new bounds); new tokens are
    /// appended, extra tokens are dropped from the end.
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        let count = desired_token_count(width, height);
        let (w, h) = (width.max(0.0), height.max(0.0));
        for t in &mut self.tokens {
            t.pos.x = t.pos.x.clamp(0.0, w);
            t.pos.y = t.pos.y.clamp(0.0, h);
        }
        while self.tokens.len() < count {
            let token = Token::new(&mut self.rng, width, height);
            self.tokens.push(token);
        }
        self.tokens.truncate(count);
        count
    }

    /// Advance every token by `dt` milliseconds, in pool order.
    pub fn step(&mut self, dt: f32, input: &InputState) {
        let viewport = input.viewport();
        let pointer = input.pointer();
        for t in &mut self.tokens {
            t.update(dt, viewport.width, viewport.height, pointer, &mut self.rng);
        }
    }
}
