use yew::prelude::*;

use wheel_shared::presentation::{ModalContent, ModalTone};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub content: ModalContent,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let tone_class = match props.content.tone {
        ModalTone::Win => styles::MODAL_WIN,
        ModalTone::Loss => styles::MODAL_LOSS,
        ModalTone::Notice => styles::MODAL_NOTICE,
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={classes!(styles::MODAL_CARD, tone_class)} role="dialog" aria-modal="true">
                <h2 class="text-3xl font-extrabold mb-4">{&props.content.title}</h2>
                <p class="text-lg leading-relaxed">{&props.content.message}</p>
                <button class={styles::MODAL_BUTTON} onclick={props.on_close.clone()}>
                    {"FERMER"}
                </button>
            </div>
        </div>
    }
}
