pub mod use_progress_ring;

pub use use_progress_ring::use_progress_ring;
