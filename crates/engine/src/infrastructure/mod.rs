//! Infrastructure implementations of the domain ports.

pub mod name_source;
pub mod random;

pub use name_source::FileNameSource;
pub use random::SystemRandom;
