use progress_ring::RingOptions;
use yew::prelude::*;

use crate::hooks::use_progress_ring;

#[derive(Properties, PartialEq)]
pub struct ProgressRingCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub options: RingOptions,
}

/// Titled card holding one animated progress ring
#[function_component(ProgressRingCard)]
pub fn progress_ring_card(props: &ProgressRingCardProps) -> Html {
    let node_ref = use_node_ref();
    let ring = use_progress_ring(node_ref.clone(), props.options.clone());

    html! {
        <div class="progress-ring-card">
            <h3 class="progress-ring-title">{ props.title.clone() }</h3>
            // Children of this div belong to the ring, not to yew
            <div class={classes!("progress-ring", ring.mounted.then_some("mounted"))} ref={node_ref}></div>
            if let Some(error) = ring.error.as_ref() {
                <div class="progress-ring-error">{ error.clone() }</div>
            }
        </div>
    }
}
