pub mod dom;
pub mod geometry;
pub mod timing;
