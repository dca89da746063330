use log::LevelFilter;
use progress_ring::{ProgressRing, RingOptions, SvgCircleOptions};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::ProgressRingCard;
use services::{FrameAnimator, Logger, WebDom};

// Options for the "savings" card, written the way a page would embed them
const SAVINGS_RING_OPTIONS: &str = r##"{
    "svgOptions": {"innerNumber": 40, "speed": 1500},
    "svgCircleOptions": {"strokeColor": "#10B981", "strokeWidth": "14px"},
    "innerNumberStyles": {"fontSize": "42px", "fontFamily": "sans-serif"}
}"##;

fn savings_options() -> RingOptions {
    RingOptions::from_json(SAVINGS_RING_OPTIONS).unwrap_or_else(|e| {
        Logger::error_with_component("app", &format!("Bad savings ring options: {}", e));
        RingOptions::default()
    })
}

fn chores_options() -> RingOptions {
    RingOptions {
        svg_circle_options: SvgCircleOptions {
            stroke_color: Some("#667EEA".to_string()),
            ..Default::default()
        },
        inner_number_styles: [("fontWeight", "600"), ("letterSpacing", "-1px")].into_iter().collect(),
        ..Default::default()
    }
    .with_target(90.0)
}

#[function_component(App)]
fn app() -> Html {
    // The classic widget: mounted explicitly by selector once the page exists
    use_effect_with((), |_| {
        match ProgressRing::new(".circle-box", &RingOptions::default(), WebDom, FrameAnimator) {
            Ok(_) => Logger::info_with_component("app", "🚀 Mounted ring on .circle-box"),
            Err(e) => Logger::error_with_component("app", &format!("Failed to mount .circle-box: {}", e)),
        }
        || ()
    });

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Progress Rings"}</h1>
            </header>
            <main class="rings">
                <div class="circle-box"></div>
                <ProgressRingCard title="Savings goal" options={savings_options()} />
                <ProgressRingCard title="Chores done" options={chores_options()} />
                <ProgressRingCard title="Just started" options={RingOptions::default().with_target(5.0)} />
            </main>
        </div>
    }
}

fn main() {
    if let Err(e) = Logger::init(LevelFilter::Debug) {
        gloo::console::error!(e.to_string());
    }
    yew::Renderer::<App>::new().render();
}
