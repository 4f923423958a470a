//! Command-line front-end: load a program image and simulate it.

use clap::Parser;
use simproc_vm::prelude::*;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Fixed-width processor simulator.
#[derive(Debug, Parser)]
#[command(name = "simproc", version, about)]
struct Args {
    /// Binary program image to execute.
    image: PathBuf,

    /// Prompt for a debug command after every instruction.
    #[arg(short = 'd', long)]
    debug: bool,

    /// Write dump.bin and print the memory rendering after the run.
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let image = match ProgramImage::read(&args.image) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("simproc: {}: {err}", args.image.display());
            return ExitCode::FAILURE;
        }
    };

    let mut machine = Machine::from_image(image);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = machine.print_program(&mut out) {
        eprintln!("simproc: {err}");
        return ExitCode::FAILURE;
    }

    let result = if args.debug {
        let mut session = DebugSession::stdio();
        machine.run_with_debug(&mut out, &mut session)
    } else {
        machine.run(&mut out)
    };

    match result {
        Ok(()) => match finish(&machine, &mut out, args.dump) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("simproc: {err}");
                ExitCode::FAILURE
            }
        },
        Err(SimulatorError::Fault(event)) => {
            let _ = writeln!(out, "ERROR: {event}");
            ExitCode::FAILURE
        }
        Err(SimulatorError::Io(err)) => {
            eprintln!("simproc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn finish<W: Write>(machine: &Machine, out: &mut W, dump: bool) -> io::Result<()> {
    machine.print_cpu(out)?;
    machine.print_data(out)?;

    if dump {
        machine.dump_memory(out)?;
    }

    Ok(())
}
