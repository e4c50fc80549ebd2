//! Host-testable core of the GPS beacon firmware.
//!
//! Everything here is hardware-independent: the coordinate input
//! pipeline, the operator messages and the beacon advertising data.
//! The embedded binary (`src/main.rs`, feature `embedded`) wires these
//! to the UARTE peripheral and the SoftDevice advertiser.
//!
//! Usage: `cargo test --lib` on the host.

#![cfg_attr(not(test), no_std)]

pub mod beacon;
pub mod config;
pub mod input;

pub use input::{Coordinates, InputPipeline, InputResult, Terminal};
