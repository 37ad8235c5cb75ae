//! ecs-config-gen: print an `ecs::Config` test fragment.
//!
//! ```bash
//! # Default 50 components, 14 tags
//! ecs-config-gen > Config.inc
//!
//! # Two components, one tag, with progress on stderr
//! ecs-config-gen 2 1 -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};

use ecs_config_gen::args::Args;
use ecs_config_gen::{diagnostics, logging, DeclarationSink, Generator};

const COMMAND_NAME: &str = "ecs-config-gen";

fn run(args: &Args) -> Result<()> {
    let config = args.generator_config();
    tracing::debug!(
        components = config.component_count,
        tags = config.tag_count,
        "starting generation"
    );

    let stdout = io::stdout();
    let mut sink = DeclarationSink::new(BufWriter::new(stdout.lock()));
    let summary = Generator::new(config).generate(&mut sink)?;
    sink.finish().context("failed to finish writing to stdout")?;

    if let Ok(json) = serde_json::to_string(&summary) {
        tracing::debug!(summary = %json, "generation summary");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = run(&args);

    if args.debug_json {
        if let Err(err) = &result {
            eprintln!(
                "{}",
                diagnostics::format_debug_diagnostic_json(
                    COMMAND_NAME,
                    err,
                    None,
                    diagnostics::default_diagnostic_hints(err),
                )
            );
        }
    }

    result
}
