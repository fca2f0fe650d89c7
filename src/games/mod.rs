//! Game implementations.

pub mod dots;
