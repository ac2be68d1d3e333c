// cleanspeak/src/main.rs
//! Cleanspeak entry point.
//!
//! Builds the filter configuration (built-in words plus an optional user file),
//! compiles the engine and runs the filter over a file or stdin.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::process::ExitCode;

use cleanspeak::cli::Cli;
use cleanspeak::commands::filter::{error_msg, run_filter_opts, warn_msg, FilterOptions, Rendering};
use cleanspeak::commands::sample_config::run_sample_config;
use cleanspeak::logger;
use cleanspeak::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use cleanspeak_core::{merge_configs, FilterConfig, ProfanityEngine};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.debug {
        Some(LevelFilter::Debug)
    } else if args.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    let theme_map = match build_theme_map(args.theme.as_deref()).context("Theme error") {
        Ok(theme_map) => theme_map,
        Err(err) => return fail(&err, &ThemeStyle::default_theme_map()),
    };

    match run(args, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err, &theme_map),
    }
}

/// Prints the whole error chain in the theme's error style.
fn fail(err: &anyhow::Error, theme_map: &ThemeMap) -> ExitCode {
    error_msg(format!("{:#}", err), theme_map);
    ExitCode::FAILURE
}

fn run(args: Cli, theme_map: &ThemeMap) -> Result<()> {
    if let Some(path) = &args.sample_config {
        return run_sample_config(path, args.quiet, theme_map);
    }

    let defaults = if args.no_defaults {
        FilterConfig::default()
    } else {
        FilterConfig::load_default_words()?
    };
    let user = args
        .config
        .as_ref()
        .map(FilterConfig::load_from_file)
        .transpose()?;
    let config = merge_configs(defaults, user);
    debug!("Merged configuration has {} word rows.", config.word_table().count());

    let engine = ProfanityEngine::new(config)?;
    if engine.lexicon().word_count() == 0 && !args.quiet {
        warn_msg("No words are configured; input will pass through unchanged.", theme_map);
    }

    let rendering = if args.plain {
        Rendering::Plain
    } else if args.console {
        Rendering::Console
    } else {
        Rendering::Auto
    };

    let opts = FilterOptions {
        input_path: args.input,
        output_path: args.output,
        rendering,
        line_buffered: args.line_buffered,
        stats: args.stats,
        stats_json: args.stats_json,
        quiet: args.quiet,
    };

    run_filter_opts(&engine, &opts, theme_map)
}
