//! Example bindings and binaries for the sui-reified runtime.

pub mod coin;
