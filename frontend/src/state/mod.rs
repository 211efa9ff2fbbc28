pub mod modal;
pub mod scroll;
