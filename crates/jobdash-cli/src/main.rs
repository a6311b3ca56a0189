// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use jobdash_app::AppState;
use runtime::HttpRuntime;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `jobdash --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let base_url = config.resolve_base_url(options.base_url.as_deref());
    let client = jobdash_api::Client::new(&base_url, config.timeout()?).with_context(|| {
        format!(
            "invalid backend address {base_url:?}; fix [server].base_url in {}, JOBDASH_BASE_URL, or --base-url",
            options.config_path.display()
        )
    })?;

    if options.check_only {
        let count = client.ping()?;
        println!("ok: {} reachable, {count} applications", client.base_url());
        return Ok(());
    }

    let log_path = config.log_path()?;
    logging::init(config.log_level(), &log_path)?;
    info!(
        base_url = client.base_url(),
        timeout = ?client.timeout(),
        filter = config.default_filter().label(),
        log = %log_path.display(),
        "starting dashboard"
    );

    let mut state = AppState::with_filter(config.default_filter());
    let mut runtime = HttpRuntime::new(client);
    jobdash_tui::run_app(&mut state, &mut runtime)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    base_url: Option<String>,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        base_url: None,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--base-url" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--base-url requires a URL such as http://localhost:8080"))?;
                options.base_url = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("jobdash - job application tracker");
    println!("  --config <path>          Use a specific config path");
    println!("  --base-url <url>         Backend address (overrides config and JOBDASH_BASE_URL)");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config and reach the backend, then exit");
    println!("  --help                   Show this help");
}
