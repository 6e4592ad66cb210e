// Simulation and appearance tuning for the glyph field.
// Units: pixels (CSS px, before device pixel ratio) and milliseconds.

// Glyph palette drawn by the tokens
pub const GLYPHS: &[&str] = &[
    "{", "}", "<", ">", "(", ")", ";", "/", "*", "!==", "//", "=>", "0", "1", "def", "let",
    "const", "var", "💻",
];

// Pool sizing
pub const TOKEN_PER_PIXEL2: f32 = 60_000.0; // viewport area covered by one token
pub const MIN_TOKEN_COUNT: usize = 22;
pub const MAX_TOKEN_COUNT: usize = 140;
pub const SMALL_SCREEN_MAX: f32 = 600.0; // widths below this get fewer tokens
pub const SMALL_SCREEN_SCALE: f32 = 0.6;
pub const SMALL_SCREEN_MIN_COUNT: usize = 14;

// Per-token random ranges [min, max)
pub const SPEED_RANGE: (f32, f32) = (0.02, 0.1); // px per ms
pub const SIZE_RANGE: (f32, f32) = (10.0, 18.0); // rounded to whole px
pub const HUE_RANGE: (f32, f32) = (180.0, 320.0);
pub const ALPHA_RANGE: (f32, f32) = (0.1, 0.5);
pub const SWAY_RANGE: (f32, f32) = (0.0002, 0.0011); // rad per ms

// Motion
pub const DRIFT_BASE: f32 = 0.6;
pub const DRIFT_SWING: f32 = 0.4;
pub const SWAY_SWING: f32 = 0.5;
pub const VELOCITY_DAMPING: f32 = 0.96;
pub const ATTRACTION_FALLOFF: f32 = 10_000.0;
pub const MIN_ATTRACTION_DISTANCE: f32 = 0.001;

// Edges
pub const RESPAWN_Y: f32 = -30.0; // recycled tokens re-enter here
pub const BOTTOM_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 60.0;
pub const SIDE_MARGIN: f32 = 60.0;

// Loop
pub const MAX_FRAME_STEP_MS: f64 = 40.0;
pub const RESIZE_DEBOUNCE_MS: f64 = 120.0;

// Appearance
pub const MOUSE_RADIUS: f32 = 120.0;
pub const NEAR_ALPHA_GAIN: f32 = 0.9;
pub const ROTATION_AMPLITUDE: f32 = 0.06; // radians
pub const GLOW_GRADIENT_SCALE: f32 = 3.0;
pub const GLOW_DISC_SCALE: f32 = 2.6;
pub const GLOW_ALPHA_SCALE: f32 = 0.12;

// Indicator squares (top-left corner)
pub const INDICATOR_COUNT: usize = 3;
pub const INDICATOR_SIZE: f32 = 8.0;
pub const INDICATOR_SPACING: f32 = 12.0;
pub const INDICATOR_OFFSET: f32 = 20.0;
pub const INDICATOR_BASE_ALPHA: f32 = 0.15;
pub const INDICATOR_PULSE_AMPLITUDE: f32 = 0.1;
