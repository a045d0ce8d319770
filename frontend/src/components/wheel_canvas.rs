use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use wheel_shared::variants::WheelVariant;

use crate::config::{CANVAS_SIZE, WHEEL_MARGIN};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub variant: &'static WheelVariant,
    pub rotation: f64,
    pub is_spinning: bool,
    /// Segment to light up once the wheel is at rest.
    #[prop_or_default]
    pub highlight: Option<usize>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    variant: &WheelVariant,
    rotation: f64,
    highlight: Option<usize>,
) {
    let size = f64::from(CANVAS_SIZE);
    let center = size / 2.0;
    let radius = center - WHEEL_MARGIN;
    let config = &variant.configuration;
    let theme = &variant.theme;
    let segment_rad = config.segment_angle().to_radians();

    context.clear_rect(0.0, 0.0, size, size);

    // Rotate the whole wheel about its centre
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation.to_radians());
    let _ = context.translate(-center, -center);

    for (i, segment) in config.segments().iter().enumerate() {
        let start = i as f64 * segment_rad;

        context.begin_path();
        context.set_fill_style_str(&segment.color);
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, start + segment_rad);
        context.close_path();
        context.fill();

        context.set_stroke_style_str(theme.border_color);
        context.set_line_width(3.0);
        context.stroke();

        if highlight == Some(i) {
            context.set_fill_style_str("rgba(255, 255, 255, 0.35)");
            context.fill();
        }

        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(start + segment_rad / 2.0);
        context.set_text_align("center");
        context.set_fill_style_str(theme.label_color);
        context.set_font(theme.font);
        context.set_shadow_color("#000");
        context.set_shadow_blur(5.0);
        let _ = context.fill_text(&segment.label, radius * 0.7, 10.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str(theme.border_color);
    let _ = context.arc(center, center, radius * 0.08, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    draw_pointer(context, center, radius, config.pointer_angle(), theme.pointer_color);
}

/// Fixed triangle on the rim at `angle_deg`, tip pointing at the centre.
fn draw_pointer(context: &CanvasRenderingContext2d, center: f64, radius: f64, angle_deg: f64, color: &str) {
    let pointer_width = 16.0;
    let pointer_height = 28.0;

    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(angle_deg.to_radians());

    context.begin_path();
    context.move_to(radius - pointer_height * 0.6, 0.0);
    context.line_to(radius + pointer_height * 0.4, -pointer_width);
    context.line_to(radius + pointer_height * 0.4, pointer_width);
    context.close_path();

    context.set_shadow_color("rgba(0, 0, 0, 0.6)");
    context.set_shadow_blur(6.0);
    context.set_fill_style_str(color);
    context.fill();
    context.set_shadow_blur(0.0);
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(2.0);
    context.stroke();

    context.restore();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let variant = props.variant;

        use_effect_with(
            (props.rotation, props.highlight),
            move |(rotation, highlight)| {
                match canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_2d) {
                    Some(context) => draw_wheel(&context, variant, *rotation, *highlight),
                    None => log::warn!("Wheel canvas has no 2d context"),
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[400px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(255, 215, 0, 0.5));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.3));"
                }}
            />
        </div>
    }
}
