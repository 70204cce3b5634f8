//! Progress display: the working spinner and reasoning step output.

pub mod indicator;
pub mod reporter;
