pub mod kernel;
pub mod resize;
