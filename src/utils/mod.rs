pub mod round;
pub mod sort;
