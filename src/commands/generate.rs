//! A single generation pass: enumerate, format, render, emit.
//!
//! Each combination is formatted and handed to the emitter immediately. The
//! first emitter error stops the pass; blocks already written stay written.

use std::io::{self, Write};

use crate::config::GeneratorConfig;
use crate::errors::Result;
use crate::io::{SpecializationEmitter, SpecializationWriter};
use crate::qualifiers::format_qualifiers;

/// Emit every combination of `config`'s axes, in enumeration order.
///
/// Returns the number of blocks emitted.
pub fn generate<E: SpecializationEmitter>(
    config: &GeneratorConfig,
    emitter: &mut E,
) -> Result<usize> {
    let mut emitted = 0;

    for (index, combination) in config.combinations().enumerate() {
        let qualifiers = format_qualifiers(&combination);
        tracing::debug!(index, qualifiers = %qualifiers, "Emitting specialization");
        emitter.emit(&qualifiers)?;
        emitted += 1;
    }

    Ok(emitted)
}

/// Render `config` into `writer` using its template.
pub fn generate_to<W: Write>(config: &GeneratorConfig, writer: W) -> Result<usize> {
    let template = config.specialization_template()?;
    let mut emitter = SpecializationWriter::new(writer, template);
    generate(config, &mut emitter)
}

/// Run the built-in generation pass against standard output.
pub fn run_generate() -> Result<usize> {
    let config = GeneratorConfig::default();
    let stdout = io::stdout();
    let emitted = generate_to(&config, stdout.lock())?;
    tracing::info!(blocks = emitted, "Generated function_info specializations");
    Ok(emitted)
}
