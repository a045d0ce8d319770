use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_utils::window;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use wheel_shared::particles::ConfettiBurst;

use crate::config::now_ms;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ConfettiOverlayProps {
    /// A new value restarts the burst.
    pub round: u32,
    pub colors: Vec<&'static str>,
}

struct BurstLoop {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    burst: ConfettiBurst,
    rng: SmallRng,
}

fn draw(state: &BurstLoop) {
    let width = f64::from(state.canvas.width());
    let height = f64::from(state.canvas.height());
    let context = &state.context;
    context.clear_rect(0.0, 0.0, width, height);

    for p in state.burst.particles() {
        context.save();
        context.set_global_alpha(p.opacity());
        let _ = context.translate(p.x, p.y);
        let _ = context.rotate(p.tilt);
        context.set_fill_style_str(p.color);
        context.fill_rect(-p.size / 2.0, -p.size / 4.0, p.size, p.size / 2.0);
        context.restore();
    }
}

fn schedule(state: Rc<RefCell<BurstLoop>>, frame: Rc<RefCell<Option<AnimationFrame>>>) {
    let next = frame.clone();
    let handle = request_animation_frame(move |_| {
        let now = now_ms();
        let finished = {
            let mut guard = state.borrow_mut();
            let lp = &mut *guard;
            let width = f64::from(lp.canvas.width());
            let height = f64::from(lp.canvas.height());
            lp.burst.step(now, width, height, &mut lp.rng);
            draw(lp);
            lp.burst.is_finished(now)
        };

        if finished {
            next.borrow_mut().take();
        } else {
            schedule(state, next);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiOverlayProps) -> Html {
    let canvas_ref = use_node_ref();
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let canvas_ref = canvas_ref.clone();
        let frame = frame.clone();
        let colors = props.colors.clone();

        use_effect_with(props.round, move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let win = window();
                let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
                let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);

                let context = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

                match context {
                    Some(context) => {
                        let state = Rc::new(RefCell::new(BurstLoop {
                            canvas,
                            context,
                            burst: ConfettiBurst::celebration(colors, now_ms()),
                            rng: SmallRng::from_entropy(),
                        }));
                        schedule(state, frame.clone());
                    }
                    None => log::warn!("Confetti canvas has no 2d context"),
                }
            }

            move || {
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class={styles::CONFETTI_LAYER} />
    }
}
