pub mod density;
pub mod layout;
pub mod touch;

pub use density::DensityState;
pub use layout::{plan_flip, PositionArena};
pub use touch::{contact_distance, GestureInterpreter, Preview, TouchPoint};
