use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

mod demos;

use demos::Options;

fn cli() -> Command {
    Command::new("ndshape-demo")
        .version(clap::crate_version!())
        .about("Print shapes, strides, slices and products of example arrays")
        .arg(
            Arg::new("values")
                .long("values")
                .help("Print full contents of matmul and tensordot results")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("gemm")
                .long("gemm")
                .help("Run products on f64 arrays through the faer GEMM kernel")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("dims").about("ndim, shape and byte strides of arrays of rank 1-5"),
        )
        .subcommand(Command::new("axis").about("Every axis slice of 1-D, 2-D and 3-D arrays"))
        .subcommand(
            Command::new("matmul").about("Batched matmul of a (2,3,2,3) and a (2,1,3,2) array"),
        )
        .subcommand(
            Command::new("tensordot").about("tensordot of (2,3,2,2) and (2,2,2,2) over 0-2 axes"),
        )
        .subcommand(Command::new("all").about("Run every demo (default)"))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("NDSHAPE_LOG", "warn"))
        .init();

    let matches = cli().get_matches();
    let opts = Options {
        values: matches.get_flag("values"),
        gemm: matches.get_flag("gemm"),
    };
    log::debug!("demo options: {opts:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand_name() {
        Some("dims") => demos::dims(&mut out)?,
        Some("axis") => demos::axis(&mut out)?,
        Some("matmul") => demos::matmul(&mut out, &opts)?,
        Some("tensordot") => demos::tensordot(&mut out, &opts)?,
        _ => demos::all(&mut out, &opts)?,
    }

    Ok(())
}
