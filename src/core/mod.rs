//! Calculation and mutation services plus filesystem helpers.

pub mod services;
pub mod utils;
