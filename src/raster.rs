pub mod blend;
pub mod canvas;
pub mod shapes;
