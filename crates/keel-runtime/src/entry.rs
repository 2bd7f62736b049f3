//! Program entry contract
//!
//! A generated program is a single entry sequence invoked once against a
//! fresh machine. On normal completion the process exits 0; a fault is
//! reported to stderr and the process exits non-zero. The runtime never
//! calls back into the program.

use crate::machine::Machine;
use crate::output::ColorMode;
use crate::value::Fault;
use std::io::Write;
use std::process::ExitCode;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Run an entry sequence against a fresh default machine
///
/// Library-level entry point for embedding and tests; output is flushed
/// before returning.
pub fn run<F>(program: F) -> Result<(), Fault>
where
    F: FnOnce(&mut Machine) -> Result<(), Fault>,
{
    let mut machine = Machine::new();
    run_with(&mut machine, program)
}

/// Run an entry sequence against a caller-built machine
///
/// Use this when the machine needs a capture writer, a separator, or a
/// non-default capacity.
pub fn run_with<F>(machine: &mut Machine, program: F) -> Result<(), Fault>
where
    F: FnOnce(&mut Machine) -> Result<(), Fault>,
{
    let result = program(machine);
    machine.flush();
    result
}

/// Process-level entry point
///
/// Exit code 0 on normal completion; on fault, the fault kind and the
/// triggering instruction are reported to stderr and the exit code is
/// non-zero.
pub fn execute<F>(program: F) -> ExitCode
where
    F: FnOnce(&mut Machine) -> Result<(), Fault>,
{
    match run(program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fault) => {
            report_fault(&fault, ColorMode::Auto);
            ExitCode::FAILURE
        }
    }
}

/// Report a fault to stderr
pub fn report_fault(fault: &Fault, color_mode: ColorMode) {
    let mut stream = StandardStream::stderr(color_mode.to_color_choice());
    let _ = write_fault(&mut stream, fault);
}

/// Write a fault report to a WriteColor sink
pub fn write_fault(w: &mut impl WriteColor, fault: &Fault) -> std::io::Result<()> {
    // Header: fault: message
    w.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(w, "fault")?;
    w.reset()?;
    writeln!(w, ": {fault}")?;

    // Location: --> instruction: name
    w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(w, "  --> ")?;
    w.reset()?;
    writeln!(w, "instruction: {}", fault.instruction())?;
    Ok(())
}
