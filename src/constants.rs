// Browser-facing strings for the glyph field: colours, fonts, DOM names.
// Numeric tuning lives in `core/constants.rs`; this file only holds what the
// Canvas 2D and DOM APIs take as text.

// Accessibility preference that disables the animation entirely
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Background wash (vertical linear gradient, top -> bottom)
pub const WASH_TOP: &str = "rgba(126,227,255,0.01)";
pub const WASH_BOTTOM: &str = "rgba(255,143,191,0.01)";

// Token glow and glyph colour (HSL saturation/lightness in percent)
pub const GLOW_SATURATION: f32 = 85.0;
pub const GLOW_LIGHTNESS: f32 = 60.0;
pub const GLYPH_SATURATION: f32 = 85.0;
pub const GLYPH_LIGHTNESS: f32 = 75.0;
pub const GLOW_EDGE: &str = "rgba(0,0,0,0)";

pub const GLYPH_FONT_FAMILY: &str = "\"SF Mono\", Menlo, monospace";
pub const GLYPH_TEXT_ALIGN: &str = "center";
pub const GLYPH_TEXT_BASELINE: &str = "middle";

// Indicator squares are white; alpha comes from `core::indicator_alpha`
pub const INDICATOR_RGB: &str = "255,255,255";

// DOM events the field listens to
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_MOUSE_DOWN: &str = "mousedown";
pub const EV_MOUSE_UP: &str = "mouseup";
pub const EV_RESIZE: &str = "resize";
pub const EV_VISIBILITY: &str = "visibilitychange";
pub const EV_PAGE_HIDE: &str = "pagehide";
