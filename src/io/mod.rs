pub mod output;

pub use output::{SpecializationEmitter, SpecializationWriter};
