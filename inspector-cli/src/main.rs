extern crate env_logger;
extern crate gql_args_inspector;
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate matches;
#[macro_use]
extern crate structopt;

use gql_args_inspector::{inspect, render, InspectError, RenderOptions, SchemaFetcher};
use log::LevelFilter;
use std::process;
use std::time::Duration;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gql-args-inspector",
    about = "Lists the root query fields of a GraphQL endpoint, split by whether they need arguments",
    after_help = "Example: gql-args-inspector http://94.237.63.174:35005"
)]
struct Opt {
    /// Base URL of the target. The introspection query is POSTed to <base_url>/graphql
    #[structopt(name = "base_url")]
    base_url: String,
    /// Request timeout, in seconds
    #[structopt(long = "timeout", default_value = "10")]
    timeout: u64,
    /// Print the GraphQL type of each argument
    #[structopt(long = "show-types")]
    show_types: bool,
    /// Log more (-v for info, -vv for debug)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Runs the whole pipeline and returns the report. Nothing is printed.
fn run(opt: &Opt) -> Result<String, InspectError> {
    let fetcher = SchemaFetcher::with_timeout(Duration::from_secs(opt.timeout));
    let options = RenderOptions {
        show_types: opt.show_types,
    };

    let classification = inspect(&fetcher, &opt.base_url)?;
    Ok(render(&classification, &options))
}

fn diagnostic(err: &InspectError) -> String {
    format!("[!] {}", err)
}

fn main() {
    let opt = Opt::from_args();

    env_logger::Builder::new()
        .filter(None, log_level(opt.verbose))
        .init();

    match run(&opt) {
        Ok(report) => print!("{}", report),
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            process::exit(1);
        }
    }
}
