pub mod app;
pub mod card;
pub mod cards;
pub mod density_controls;
