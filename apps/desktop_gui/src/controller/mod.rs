//! Controller layer: form state, UI actions to backend commands, and the
//! reducer applying backend completions.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod reducer;
pub mod render;
