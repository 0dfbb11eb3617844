extern crate redcode_normalize;

use std::process;

use clap::{App, Arg, ArgMatches, crate_version, value_t};
use log::error;

use redcode_normalize::Options;
use redcode_normalize::files::{self, Mode};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("normalize_loadfile")
        .version(crate_version!())
        .about("Rewrites Redcode load files into a canonical form for test comparisons.")
        .after_help("Set the RUST_LOG environment variable to control logging (trace, debug, info, warn, error).")
        .arg(Arg::with_name("FILES")
            .help("Load files to normalize in place")
            .required(true)
            .multiple(true))
        .arg(Arg::with_name("core-size")
            .long("core-size")
            .value_name("N")
            .help("Modulus applied to operand values")
            .takes_value(true)
            .default_value("8000")
            .validator(positive_integer))
        .arg(Arg::with_name("no-canonicalize")
            .long("no-canonicalize")
            .help("Only fix spacing; keep operands as written"))
        .arg(Arg::with_name("check")
            .long("check")
            .help("Don't write anything; list files that would change and fail if there are any")
            .conflicts_with("stdout"))
        .arg(Arg::with_name("stdout")
            .long("stdout")
            .help("Print normalized contents instead of writing them back"))
        .get_matches();

    let options = options(&matches);
    let mode = if matches.is_present("check") {
        Mode::Check
    } else if matches.is_present("stdout") {
        Mode::Stdout
    } else {
        Mode::InPlace
    };

    let paths = matches.values_of("FILES").map(|values| values.collect::<Vec<_>>()).unwrap_or_default();
    match files::run_paths(&paths, &options, mode) {
        Ok(summary) => {
            if mode == Mode::Check && !summary.changed.is_empty() {
                process::exit(1);
            }
        }
        Err(err) => {
            error!("aborting: {}", err);
            eprintln!("{}", err.render(color_stderr()));
            process::exit(1);
        }
    }
}

fn options(matches: &ArgMatches) -> Options {
    let core_size = value_t!(matches, "core-size", i64).unwrap_or_else(|e| e.exit());

    Options {
        core_size,
        canonicalize: !matches.is_present("no-canonicalize"),
        ..Options::default()
    }
}

fn positive_integer(value: String) -> Result<(), String> {
    match value.parse::<i64>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(format!("expected a positive integer (was: {})", value)),
    }
}

fn color_stderr() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
