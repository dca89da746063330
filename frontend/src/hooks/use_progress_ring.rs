use progress_ring::{ProgressRing, RingConfig, RingOptions};
use web_sys::Element;
use yew::prelude::*;

use crate::services::{FrameAnimator, Logger, WebDom};

#[derive(Clone, PartialEq, Default)]
pub struct ProgressRingState {
    pub mounted: bool,
    pub error: Option<String>,
}

/// Effect dependency for a set of options.
///
/// Compares the serialized form: NaN options never equal themselves, and a
/// `PartialEq` dependency would restart the ring on every render.
pub fn options_key(options: &RingOptions) -> String {
    serde_json::to_string(options).unwrap_or_default()
}

/// Hook that mounts a progress ring on `node_ref` once the node exists.
///
/// The ring is re-rendered from scratch whenever `options` change. Options
/// that fail validation are still rendered; the problem is only logged.
#[hook]
pub fn use_progress_ring(node_ref: NodeRef, options: RingOptions) -> UseStateHandle<ProgressRingState> {
    let state = use_state_eq(ProgressRingState::default);

    use_effect_with(options_key(&options), {
        let state = state.clone();
        move |_| {
            let next = match node_ref.cast::<Element>() {
                Some(root) => mount(root, &options),
                None => ProgressRingState {
                    mounted: false,
                    error: Some("Progress ring container is not in the document".to_string()),
                },
            };
            state.set(next);
            || ()
        }
    });

    state
}

fn mount(root: Element, options: &RingOptions) -> ProgressRingState {
    if let Err(e) = RingConfig::from_options(options).validate() {
        Logger::warn_with_component("progress-ring", &format!("⚠️ Rendering unchecked options: {}", e));
    }

    match ProgressRing::attach(root, options, WebDom, FrameAnimator) {
        Ok(ring) => {
            Logger::debug_with_component(
                "progress-ring",
                &format!("🎯 Ring mounted, animating to {}%", ring.config().target_percent),
            );
            ProgressRingState {
                mounted: true,
                error: None,
            }
        }
        Err(e) => {
            Logger::error_with_component("progress-ring", &format!("Failed to mount ring: {}", e));
            ProgressRingState {
                mounted: false,
                error: Some(e.to_string()),
            }
        }
    }
}
