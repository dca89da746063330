pub mod progress_ring_card;

pub use progress_ring_card::ProgressRingCard;
