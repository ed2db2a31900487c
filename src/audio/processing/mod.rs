// Audio Processing Module
//
// Split into focused files:
// - length.rs: Fixed-length pad/trim
// - shift.rs: Circular time shift
// - channels.rs: Mono/multi-channel conversion
// - resampling.rs: Sample rate conversion

pub mod length;
pub mod shift;
pub mod channels;
pub mod resampling;

pub use length::{pad_trim, target_len};
pub use shift::{roll, signal_shift};
pub use channels::rechannel;
pub use resampling::resample;
