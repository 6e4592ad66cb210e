//! Canvas 2D renderer for the glyph field.
//!
//! Reads pool and input state, never writes them. Draw order is fixed:
//! background wash, tokens in pool order, then the indicator squares.

use crate::constants::*;
use crate::core::{
    glyph_font, hsla, indicator_alpha, indicator_origin, token_appearance, InputState, Token,
    INDICATOR_COUNT, INDICATOR_SIZE,
};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    tokens: &[Token],
    input: &InputState,
    t_ms: f64,
) -> Result<(), JsValue> {
    let viewport = input.viewport();
    let w = viewport.width as f64;
    let h = viewport.height as f64;

    ctx.clear_rect(0.0, 0.0, w, h);
    draw_wash(ctx, w, h)?;

    for token in tokens {
        draw_token(ctx, token, input)?;
    }

    draw_indicators(ctx, t_ms);
    Ok(())
}

fn draw_wash(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) -> Result<(), JsValue> {
    let wash = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    wash.add_color_stop(0.0, WASH_TOP)?;
    wash.add_color_stop(1.0, WASH_BOTTOM)?;
    ctx.set_fill_style_canvas_gradient(&wash);
    ctx.fill_rect(0.0, 0.0, w, h);
    Ok(())
}

fn draw_token(
    ctx: &web::CanvasRenderingContext2d,
    token: &Token,
    input: &InputState,
) -> Result<(), JsValue> {
    let look = token_appearance(token, input.pointer());

    ctx.save();
    // restore even when a call in between fails
    let drawn = (|| -> Result<(), JsValue> {
        ctx.translate(token.pos.x as f64, token.pos.y as f64)?;
        ctx.rotate(look.rotation as f64)?;

        let glow = ctx.create_radial_gradient(
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            look.glow_gradient_radius as f64,
        )?;
        glow.add_color_stop(
            0.0,
            &hsla(token.hue, GLOW_SATURATION, GLOW_LIGHTNESS, look.glow_alpha),
        )?;
        glow.add_color_stop(1.0, GLOW_EDGE)?;
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, look.glow_disc_radius as f64, 0.0, TAU)?;
        ctx.fill();

        ctx.set_fill_style_str(&hsla(
            token.hue,
            GLYPH_SATURATION,
            GLYPH_LIGHTNESS,
            look.alpha,
        ));
        ctx.set_font(&glyph_font(token.size, GLYPH_FONT_FAMILY));
        ctx.set_text_align(GLYPH_TEXT_ALIGN);
        ctx.set_text_baseline(GLYPH_TEXT_BASELINE);
        ctx.fill_text(token.glyph, 0.0, 0.0)
    })();
    ctx.restore();
    drawn
}

fn draw_indicators(ctx: &web::CanvasRenderingContext2d, t_ms: f64) {
    let size = INDICATOR_SIZE as f64;
    for i in 0..INDICATOR_COUNT {
        let (x, y) = indicator_origin(i);
        let alpha = indicator_alpha(t_ms, i);
        ctx.set_fill_style_str(&format!("rgba({INDICATOR_RGB},{alpha})"));
        ctx.fill_rect(x as f64, y as f64, size, size);
    }
}
