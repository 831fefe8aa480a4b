pub mod decay_loop;
pub mod inertial_scroll;

pub use decay_loop::DecayLoop;
pub use inertial_scroll::{InertialScroll, ScrollHandler, ScrollUpdate};
