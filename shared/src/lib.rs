#![no_std]

pub mod address;
pub mod errors;
pub mod events;
pub mod ownable;
pub mod types;

pub use errors::Error;
