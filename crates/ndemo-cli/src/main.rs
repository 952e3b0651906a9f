use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use ndemo_cli::config::DemoConfig;
use ndemo_cli::demos::run_demo;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NDEMO_LOG", "error,ndemo=info"))
        .init();

    let data_arg = |id: &'static str| {
        Arg::new(id)
            .long("data")
            .help("Nested JSON list to use instead of the built-in data, e.g. '[[1, 2], [3, 4]]'")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .value_hint(ValueHint::Other)
    };

    let matches = Command::new("ndemo")
        .version(clap::crate_version!())
        .about("Dense N-dimensional array demonstrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .short('p')
                .global(true)
                .help("Digits printed after the decimal point for floating arrays")
                .value_parser(clap::value_parser!(usize)),
        )
        .subcommand(
            Command::new("basics")
                .about("Array attributes, a reshape attempt and flatten")
                .arg(
                    Arg::new("reshape")
                        .long("reshape")
                        .help("Target shape for the reshape attempt, e.g. '4,4' or '2x6'")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(data_arg("basics_data")),
        )
        .subcommand(
            Command::new("indexing")
                .about("Element, row, column, slice, boolean and fancy indexing")
                .arg(
                    Arg::new("indexing_threshold")
                        .long("threshold")
                        .help("Mask threshold: elements greater than this are selected")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("arithmetic")
                .about("Element-wise operations, broadcasting and reductions"),
        )
        .subcommand(
            Command::new("scores")
                .about("Student score statistics and normalisation")
                .arg(
                    Arg::new("score_threshold")
                        .long("threshold")
                        .help("Score every subject must exceed")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(data_arg("scores")),
        )
        .subcommand(
            Command::new("combine")
                .about("Stacking, splitting and copy versus view")
                .arg(
                    Arg::new("split_sections")
                        .long("sections")
                        .help("Number of equal parts for the horizontal split")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("speedup")
                .about("Compare squaring with a Vec loop against array multiplication")
                .arg(
                    Arg::new("speedup_size")
                        .long("size")
                        .short('n')
                        .help("Number of integers to square")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .help("Also time a rayon parallel map")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("all").about("Run every demo except speedup"))
        .subcommand(Command::new("config").about("Print the default configuration as JSON"))
        .get_matches();

    let (name, sub_matches) = match matches.subcommand() {
        Some(pair) => pair,
        None => unreachable!("Subcommand is required by CLI configuration"),
    };

    if name == "config" {
        let template = serde_json::to_string_pretty(&DemoConfig::default())?;
        println!("{}", template);
        return Ok(());
    }

    let config = DemoConfig::from_arguments(sub_matches)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_demo(name, &mut out, &config) {
        Ok(()) => {
            out.flush()?;
            Ok(())
        }
        Err(e) => {
            let _ = out.flush();
            log::error!("Demo '{}' failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}
