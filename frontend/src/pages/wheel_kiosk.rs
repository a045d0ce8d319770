use yew::prelude::*;

use wheel_shared::variants::{preset, VariantId, WheelVariant};
use wheel_shared::wheel_config::segment_at_pointer;

use crate::components::{ConfettiOverlay, ResultModal, SpinButton, WheelCanvas};
use crate::hooks::use_spin_engine;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelKioskProps {
    pub variant: VariantId,
}

/// Resolves the preset and hands it to the board, or explains why it can't.
#[function_component(WheelKiosk)]
pub fn wheel_kiosk(props: &WheelKioskProps) -> Html {
    match preset(props.variant) {
        Ok(variant) => html! { <KioskBoard {variant} /> },
        Err(e) => {
            log::error!("Cannot start wheel '{}': {}", props.variant, e);
            html! {
                <div class={styles::CONTAINER}>
                    <div class={styles::CARD_ERROR}>{format!("Configuration invalide : {}", e)}</div>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct KioskBoardProps {
    variant: &'static WheelVariant,
}

#[function_component(KioskBoard)]
fn kiosk_board(props: &KioskBoardProps) -> Html {
    let variant = props.variant;
    let wheel = use_spin_engine(variant);

    let highlight = if wheel.is_spinning || wheel.last_report.is_none() {
        None
    } else {
        Some(segment_at_pointer(&variant.configuration, wheel.rotation))
    };

    html! {
        <div class={styles::CONTAINER} style={format!("background: {};", variant.theme.background)}>
            <h1 class={styles::TEXT_TITLE}>{"🎡 LA ROUE DE LA CHANCE"}</h1>

            <div class={styles::CARD}>
                <div class="relative mx-auto flex justify-center items-center">
                    <div class="w-full max-w-[400px] mx-auto">
                        <WheelCanvas
                            {variant}
                            rotation={wheel.rotation}
                            is_spinning={wheel.is_spinning}
                            {highlight}
                        />
                    </div>
                </div>

                <p class={styles::TEXT_STATUS}>{wheel.status.text()}</p>

                <div class="flex justify-center mt-2">
                    <div class="w-full max-w-[300px]">
                        <SpinButton is_spinning={wheel.is_spinning} onclick={wheel.spin.clone()} />
                    </div>
                </div>

                if let Some(hours) = variant.gating.business_hours {
                    <p class="mt-6 text-center text-sm text-white/70">
                        {format!("Ouvert de {}h à {}h", hours.start_hour(), hours.end_hour())}
                    </p>
                }
                if variant.gating.daily_limit {
                    <p class="mt-1 text-center text-sm text-white/70">{"Une participation par jour"}</p>
                }
            </div>

            if let Some(content) = wheel.modal.clone() {
                <ResultModal {content} on_close={wheel.close_modal.clone()} />
            }
            if let Some((round, colors)) = wheel.celebration.clone() {
                <ConfettiOverlay {round} {colors} />
            }
        </div>
    }
}
