use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

use wheel_shared::constants::RESULT_EVENT;
use wheel_shared::gating::{KioskGate, LocalClock};
use wheel_shared::presentation::{
    present_rejection, present_result, ModalContent, ParticleProfile, StatusLine,
};
use wheel_shared::shared_wheel_game::{FrameUpdate, SpinAttempt, SpinReport, WheelEngine};
use wheel_shared::variants::WheelVariant;

use crate::config::now_ms;
use crate::storage::LocalStorageLedger;

type Engine = WheelEngine<SmallRng>;
type Gate = KioskGate<LocalClock, LocalStorageLedger>;

/// Everything the kiosk page needs to render and drive the wheel.
#[derive(Clone, PartialEq)]
pub struct SpinHandle {
    pub rotation: f64,
    pub is_spinning: bool,
    pub status: StatusLine,
    pub modal: Option<ModalContent>,
    pub last_report: Option<SpinReport>,
    /// Bumped on every win so the confetti layer restarts.
    pub celebration: Option<(u32, Vec<&'static str>)>,
    pub spin: Callback<MouseEvent>,
    pub close_modal: Callback<MouseEvent>,
}

#[derive(Clone)]
struct FrameContext {
    variant: &'static WheelVariant,
    engine: Rc<RefCell<Engine>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    rotation: UseStateHandle<f64>,
    is_spinning: UseStateHandle<bool>,
    status: UseStateHandle<StatusLine>,
    modal: UseStateHandle<Option<ModalContent>>,
    last_report: UseStateHandle<Option<SpinReport>>,
    celebration: UseStateHandle<Option<(u32, Vec<&'static str>)>>,
}

fn schedule_frame(ctx: FrameContext) {
    let frame = ctx.frame.clone();
    let handle = request_animation_frame(move |timestamp| on_frame(ctx, timestamp));
    *frame.borrow_mut() = Some(handle);
}

fn on_frame(ctx: FrameContext, timestamp: f64) {
    let update = ctx.engine.borrow_mut().advance(timestamp);
    match update {
        FrameUpdate::Rotating { rotation, .. } => {
            ctx.rotation.set(rotation);
            schedule_frame(ctx);
        }
        FrameUpdate::Finished(report) => {
            ctx.rotation.set(report.final_rotation);
            ctx.is_spinning.set(false);

            let shown = present_result(&ctx.variant.copy, &ctx.variant.theme.confetti_colors, &report);
            ctx.status.set(shown.status);
            ctx.modal.set(Some(shown.modal));
            if let ParticleProfile::Celebration { colors } = shown.particles {
                let round = (*ctx.celebration).as_ref().map(|(n, _)| n + 1).unwrap_or(0);
                ctx.celebration.set(Some((round, colors)));
            }

            dispatch_result_event(&report);
            ctx.last_report.set(Some(report));
            ctx.frame.borrow_mut().take();
        }
        FrameUpdate::Idle { rotation } => {
            ctx.rotation.set(rotation);
            ctx.frame.borrow_mut().take();
        }
    }
}

/// Lets the hosting page react to results without reaching into the widget.
fn dispatch_result_event(report: &SpinReport) {
    let Some(window) = window() else { return };
    let detail = match serde_json::to_string(report) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not serialize spin report: {}", e);
            return;
        }
    };

    let event_init = CustomEventInit::new();
    event_init.set_detail(&JsValue::from_str(&detail));
    match CustomEvent::new_with_event_init_dict(RESULT_EVENT, &event_init) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                log::warn!("Failed to dispatch {}: {:?}", RESULT_EVENT, e);
            }
        }
        Err(e) => log::warn!("Failed to create {}: {:?}", RESULT_EVENT, e),
    }
}

#[hook]
pub fn use_spin_engine(variant: &'static WheelVariant) -> SpinHandle {
    let engine = use_mut_ref(|| {
        WheelEngine::new(variant.configuration.clone(), SmallRng::from_entropy())
    });
    let gate: Rc<RefCell<Gate>> = use_mut_ref(|| {
        KioskGate::new(
            variant.gating,
            LocalClock,
            LocalStorageLedger::new(variant.id.storage_key()),
        )
    });
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    let rotation = use_state(|| 0.0);
    let is_spinning = use_state(|| false);
    let status = use_state(|| StatusLine::Ready);
    let modal = use_state(|| None::<ModalContent>);
    let last_report = use_state(|| None::<SpinReport>);
    let celebration = use_state(|| None::<(u32, Vec<&'static str>)>);

    {
        // Stop the frame loop if the kiosk is torn down mid-spin
        let frame = frame.clone();
        use_effect_with((), move |_| move || {
            frame.borrow_mut().take();
        });
    }

    let ctx = FrameContext {
        variant,
        engine: engine.clone(),
        frame,
        rotation: rotation.clone(),
        is_spinning: is_spinning.clone(),
        status: status.clone(),
        modal: modal.clone(),
        last_report: last_report.clone(),
        celebration: celebration.clone(),
    };

    let spin = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let attempt = engine
                .borrow_mut()
                .request_spin(&mut *gate.borrow_mut(), now_ms());

            match attempt {
                SpinAttempt::Started(_) => {
                    ctx.is_spinning.set(true);
                    ctx.status.set(StatusLine::Spinning);
                    ctx.modal.set(None);
                    ctx.last_report.set(None);
                    schedule_frame(ctx.clone());
                }
                SpinAttempt::AlreadySpinning => {}
                SpinAttempt::Rejected(rejection) => {
                    ctx.modal.set(Some(present_rejection(&rejection)));
                }
            }
        })
    };

    let close_modal = {
        let modal = modal.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            modal.set(None);
            status.set(StatusLine::Ready);
        })
    };

    SpinHandle {
        rotation: *rotation,
        is_spinning: *is_spinning,
        status: *status,
        modal: (*modal).clone(),
        last_report: (*last_report).clone(),
        celebration: (*celebration).clone(),
        spin,
        close_modal,
    }
}
