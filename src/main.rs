//! Lostchain Store — Admin CLI
//!
//! Inspects and edits a file-backed store from the command line.
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! Wiring sequence:
//! 1. Load config (path from LOSTCHAIN_CONFIG, default lostchain.toml)
//! 2. Init tracing (text or JSON, RUST_LOG overrides the configured level)
//! 3. Open JSON file storage in the configured data directory
//! 4. Run one command against the store

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use lostchain_store::adapters::storage::JsonFileStorage;
use lostchain_store::config::{self, AppConfig, LogFormat};
use lostchain_store::domain::{NewFoundItem, NewLostItem, NewMatch, NewProfile, Validate, WalletAddress};
use lostchain_store::DataStore;

const DEFAULT_CONFIG_PATH: &str = "lostchain.toml";

const USAGE: &str = "\
usage: lostchain-store <command> [args]

read commands:
  stats <address>        counts and reward totals
  dashboard <address>    profile, stats, reports, matches, and activity
  activity <address>     activity log, newest first
  lost <address>         lost item reports
  found <address>        found item reports
  matches <address>      match records
  profile <address>      user profile (null if none)

write commands:
  add-lost <address> <file.json>     file a lost item report
  add-found <address> <file.json>    file a found item report
  add-match <address> <file.json>    record a match
  save-profile <file.json>           create or update a profile
  clear <address>                    delete all reports, matches, and activity";

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path =
        std::env::var("LOSTCHAIN_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = config::loader::load_config_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    init_tracing(&config);
    debug!(config = %config_path, "Configuration ready");

    // ── 3. Open storage ─────────────────────────────────────
    let storage = JsonFileStorage::open(&config.storage.data_dir)
        .with_context(|| format!("Failed to open data directory {}", config.storage.data_dir))?;
    let store = DataStore::new(storage).with_options(config.store_options());

    // ── 4. Dispatch ─────────────────────────────────────────
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run(&store, &args)
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.app.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}

fn run(store: &DataStore<JsonFileStorage>, args: &[&str]) -> Result<()> {
    match args {
        ["stats", addr] => print_json(&store.stats(&address(addr)?)),
        ["dashboard", addr] => print_json(&store.dashboard(&address(addr)?)),
        ["activity", addr] => print_json(&store.activity(&address(addr)?)),
        ["lost", addr] => print_json(&store.lost_items(&address(addr)?)),
        ["found", addr] => print_json(&store.found_items(&address(addr)?)),
        ["matches", addr] => print_json(&store.matches(&address(addr)?)),
        ["profile", addr] => print_json(&store.profile(&address(addr)?)),
        ["add-lost", addr, file] => {
            let report: NewLostItem = read_validated(file)?;
            print_json(&store.add_lost_item(report, &address(addr)?)?)
        }
        ["add-found", addr, file] => {
            let report: NewFoundItem = read_validated(file)?;
            print_json(&store.add_found_item(report, &address(addr)?)?)
        }
        ["add-match", addr, file] => {
            let record: NewMatch = read_validated(file)?;
            print_json(&store.add_match(record, &address(addr)?)?)
        }
        ["save-profile", file] => {
            let profile: NewProfile = read_validated(file)?;
            print_json(&store.save_profile(profile)?)
        }
        ["clear", addr] => {
            let user = address(addr)?;
            store.clear_all_data(&user)?;
            info!(user = %user, "User data cleared");
            Ok(())
        }
        [] | ["help" | "--help" | "-h"] => {
            println!("{USAGE}");
            Ok(())
        }
        _ => bail!("unrecognized command: {}\n\n{USAGE}", args.join(" ")),
    }
}

fn address(raw: &str) -> Result<WalletAddress> {
    WalletAddress::new(raw).with_context(|| format!("Invalid wallet address {raw:?}"))
}

/// Read a JSON payload from `path` and check it before it reaches the store.
fn read_validated<T: DeserializeOwned + Validate>(path: &str) -> Result<T> {
    let content = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read {path}"))?;
    let value: T =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {path}"))?;
    value
        .validate()
        .with_context(|| format!("Rejected input in {path}"))?;
    Ok(value)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
