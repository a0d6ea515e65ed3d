use roulette_shared::angle::TAU;
use roulette_shared::label_layout::layout_labels;
use roulette_shared::Segment;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::{CANVAS_SIZE, WHEEL_MARGIN};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    /// Accumulated wheel rotation in radians.
    pub rotation: f64,
    pub pointer_angle: f64,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Colored sectors, white dividers and labels, drawn around the origin in
/// wheel-local coordinates. The caller has already rotated the context.
fn draw_segments(ctx: &CanvasRenderingContext2d, segments: &[Segment], radius: f64) {
    for segment in segments {
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        let _ = ctx.arc(0.0, 0.0, radius, segment.start_angle, segment.end_angle);
        ctx.close_path();
        ctx.set_fill_style_str(&segment.option.color);
        ctx.fill();
    }

    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(3.0);
    for segment in segments {
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(segment.start_angle.cos() * radius, segment.start_angle.sin() * radius);
        ctx.stroke();
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_stroke_style_str("#000000");
    ctx.set_line_width(4.0);
    for label in layout_labels(segments, radius) {
        ctx.save();
        let _ = ctx.translate(label.x, label.y);
        let _ = ctx.rotate(label.rotation);
        ctx.set_font(&format!("bold {}px sans-serif", label.font_px));
        let _ = ctx.stroke_text(&label.text, 0.0, 0.0);
        let _ = ctx.fill_text(&label.text, 0.0, 0.0);
        ctx.restore();
    }
}

/// Fixed pointer at `angle`, tip resting just inside the rim.
fn draw_pointer(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64, angle: f64, is_spinning: bool) {
    let (dx, dy) = (angle.cos(), angle.sin());
    // perpendicular, for the pointer's base
    let (px, py) = (-dy, dx);
    let tip = (cx + dx * (radius - 8.0), cy + dy * (radius - 8.0));
    let base = (cx + dx * (radius + 14.0), cy + dy * (radius + 14.0));
    let half_width = 14.0;

    ctx.set_shadow_color(if is_spinning { "rgba(255, 215, 130, 0.8)" } else { "rgba(255, 215, 0, 0.6)" });
    ctx.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    ctx.begin_path();
    ctx.move_to(tip.0, tip.1);
    ctx.line_to(base.0 + px * half_width, base.1 + py * half_width);
    ctx.line_to(base.0 - px * half_width, base.1 - py * half_width);
    ctx.close_path();
    ctx.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    ctx.fill();
    ctx.set_stroke_style_str("#e69500");
    ctx.set_line_width(1.5);
    ctx.stroke();

    ctx.set_shadow_color("rgba(0, 0, 0, 0)");
    ctx.set_shadow_blur(0.0);
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    segments: &[Segment],
    rotation: f64,
    pointer_angle: f64,
    is_spinning: bool,
) {
    let Some(ctx) = context_2d(canvas) else {
        log::warn!("Canvas 2d context unavailable");
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - WHEEL_MARGIN - 14.0;

    ctx.clear_rect(0.0, 0.0, width, height);
    if segments.is_empty() {
        return;
    }

    // Outer glow
    let dark = is_dark_mode();
    ctx.begin_path();
    ctx.set_fill_style_str(if dark { "rgba(130, 100, 255, 0.15)" } else { "rgba(100, 130, 255, 0.15)" });
    let _ = ctx.arc(cx, cy, radius + 8.0, 0.0, TAU);
    ctx.fill();

    ctx.save();
    let _ = ctx.translate(cx, cy);
    let _ = ctx.rotate(rotation);
    draw_segments(&ctx, segments, radius);
    ctx.restore();

    // Hub
    ctx.begin_path();
    ctx.set_fill_style_str(if dark { "#2d3142" } else { "#ffffff" });
    let _ = ctx.arc(cx, cy, radius * 0.08, 0.0, TAU);
    ctx.fill();

    // Rim
    ctx.begin_path();
    ctx.set_stroke_style_str(if dark { "rgba(180, 130, 255, 0.5)" } else { "rgba(130, 100, 255, 0.5)" });
    ctx.set_line_width(4.0);
    let _ = ctx.arc(cx, cy, radius, 0.0, TAU);
    ctx.stroke();

    draw_pointer(&ctx, cx, cy, radius, pointer_angle, is_spinning);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.segments.clone(), props.rotation, props.pointer_angle, props.is_spinning),
            move |(segments, rotation, pointer_angle, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, segments, *rotation, *pointer_angle, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-full max-w-[500px] h-auto"
        />
    }
}
