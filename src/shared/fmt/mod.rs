//! Display formatting for prices and volumes.

pub mod num;
