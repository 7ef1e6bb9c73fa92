pub mod vector;

pub use vector::{argmax, dot};
