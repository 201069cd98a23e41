//! Random test-case generator for gate/pin/wire placement problems.
//!
//! An instance is a list of rectangular gates with pins on their boundary and
//! a perfect matching of all pins into wires. [`generator::generate`] keeps
//! sampling until the pin counts admit a matching where no gate is forced to
//! wire to itself.

pub mod config;
pub mod emit;
pub mod generator;
pub mod matcher;
pub mod model;
pub mod parse;
pub mod sampler;
pub mod validate;

mod test;

pub use config::GeneratorConfig;
pub use generator::{Generated, Outcome, attempt, generate};
pub use model::{Gate, Instance, PinRef, Point, Summary, Wire};
