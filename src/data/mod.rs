pub mod color;
pub mod dataset;
pub mod layout;
pub mod scale;
pub mod steps;
