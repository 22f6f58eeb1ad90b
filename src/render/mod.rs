pub mod frame;
pub mod grid;
pub mod pipeline;
