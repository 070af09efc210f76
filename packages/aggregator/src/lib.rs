#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod error;
pub mod format;
pub mod history;
pub mod macros;
pub mod math;
pub mod portfolio;
pub mod read;
pub mod schedule;
pub mod types;
pub mod yields;
