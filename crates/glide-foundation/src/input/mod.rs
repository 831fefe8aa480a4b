mod types;

pub use types::{PointerButton, PointerButtons, PointerEvent};
