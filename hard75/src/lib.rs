mod client;
pub mod date;
pub mod domain;

pub use client::*;
