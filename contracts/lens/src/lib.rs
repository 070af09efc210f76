#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
pub mod errors;
mod events;
pub mod interfaces;
pub mod lens;
pub mod msg;
mod reader;
pub mod storage;

pub use contract::{AggregatorLens, AggregatorLensClient};
