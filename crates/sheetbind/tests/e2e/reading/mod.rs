//! Reading tests, grouped by read mode.

mod beans;
mod csv_source;
mod decoding;
mod extract;
mod matrix;
