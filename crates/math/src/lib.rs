mod error;
pub use error::*;

pub mod half_float;
pub use half_float::*;

pub mod hash;
pub use hash::*;

pub mod scalar;
pub use scalar::*;
