use anyhow::Result;
use clap::Parser;
use uvm_cli::{
    cli::{Cli, CliCommand},
    commands,
    logging::setup_tracing,
};

fn main() -> Result<()> {
    // Config tracing subscriber
    setup_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Assemble { input, output, log } => commands::assemble(&input, &output, &log),
        CliCommand::Run {
            input,
            result,
            range,
            memory_size,
            max_cycles,
            trace,
        } => {
            let config = commands::vm_config(memory_size, max_cycles, trace);
            commands::run(&input, &result, &range, config).map(|_| ())
        }
        CliCommand::Disasm { input } => {
            print!("{}", commands::disasm(&input)?);
            Ok(())
        }
    }
}
