// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{value_parser, Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use wordfactor::{config, logging, output, solve, words};

fn main() -> Result<ExitCode> {
    let matches = Command::new("wordfactor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Factors an RSA modulus whose primes spell out dictionary phrases")
        .arg(
            Arg::new("modulus")
                .short('n')
                .long("modulus")
                .help("The modulus to factor, in decimal")
                .required_unless_present("config-path"),
        )
        .arg(
            Arg::new("ciphertext")
                .short('c')
                .long("ciphertext")
                .help("Ciphertext to decrypt once the factors are known, in decimal"),
        )
        .arg(
            Arg::new("exponent")
                .short('e')
                .long("exponent")
                .help("Public exponent [default: from config, usually 65537]")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .help("Word list to use, one word per line")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .help("Search in parallel on this many threads (0 = one per core)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more, repeat for even more")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .num_args(1)
                .action(ArgAction::Set)
                .help("Set path to config.toml"),
        )
        .get_matches();

    color_eyre::install()?;
    logging::init(matches.get_count("verbose"))?;

    if matches.get_flag("config-path") {
        println!("{}", config::config_toml_path()?.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;
    let exponent = matches
        .get_one::<u64>("exponent")
        .copied()
        .unwrap_or(config.rsa.exponent);
    let options = config.search_options(matches.get_one::<usize>("jobs").copied());
    let modulus = matches
        .get_one::<String>("modulus")
        .map(|s| &**s)
        .unwrap_or_default();
    let request = solve::Request::parse(
        modulus,
        matches.get_one::<String>("ciphertext").map(|s| &**s),
        exponent,
        options,
    )?;

    let word_list = matches
        .get_one::<PathBuf>("words")
        .unwrap_or(&config.dictionary.path);
    let dict = words::load_dictionary(word_list, &config::search_path());

    let solution = solve::solve(&request, &dict)?;
    let mut out = stdout().lock();
    let written = if matches.get_flag("json") {
        output::write_json(&mut out, &solution)
    } else {
        output::write_text(&mut out, &solution)
    };
    written.wrap_err("Failed to write result")?;

    if solution.report.outcome.is_found() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
