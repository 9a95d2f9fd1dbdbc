pub mod decibel;
pub mod grid;

pub use decibel::DecibelHelper;
pub use grid::GridHelper;
