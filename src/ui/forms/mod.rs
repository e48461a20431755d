//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `recommend_form`: Business profile form

mod field_renderer;
mod recommend_form;

pub use recommend_form::draw as draw_recommend;
