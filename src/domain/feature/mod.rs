pub mod model;

pub use model::Feature;
