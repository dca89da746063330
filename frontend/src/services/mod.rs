pub mod logging;
pub mod web_animator;
pub mod web_dom;

pub use logging::Logger;
pub use web_animator::FrameAnimator;
pub use web_dom::WebDom;
