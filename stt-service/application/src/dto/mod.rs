mod recognize;

pub use recognize::*;
