use std::collections::BTreeSet;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ipsift_common::{config::Config, input::Texts, network::family::IpFamily};
use ipsift_core::extractor;
use tracing::debug;

use crate::sprint;
use crate::terminal::{colors, format, print};

pub fn extract(
    texts: Vec<String>,
    files: &[PathBuf],
    family: Option<IpFamily>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let texts: Texts = gather_texts(texts, files)?;
    debug!(
        texts = texts.len(),
        ip_version = family.map(IpFamily::version),
        "starting extraction"
    );

    let start_time: Instant = Instant::now();
    let addrs: BTreeSet<IpAddr> = extractor::extract_addrs(texts, family);

    print_addrs(&addrs, cfg)?;
    extraction_ends(&addrs, start_time.elapsed(), cfg);
    Ok(())
}

/// Positional texts and files first, stdin only when neither was given.
fn gather_texts(mut texts: Vec<String>, files: &[PathBuf]) -> anyhow::Result<Texts> {
    for path in files {
        let content: String = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        texts.push(content);
    }

    if texts.is_empty() {
        let mut buffer: String = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        texts.push(buffer);
    }

    Ok(Texts::Many(texts))
}

fn print_addrs(addrs: &BTreeSet<IpAddr>, cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        let strings: Vec<String> = addrs.iter().map(ToString::to_string).collect();
        println!("{}", serde_json::to_string(&strings)?);
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        addrs.iter().for_each(|addr| println!("{addr}"));
        return Ok(());
    }

    for (key, value) in format::ip_to_key_value_pair(addrs) {
        println!("{} {}", format!("{key:>4}").color(colors::SEPARATOR), value);
    }
    Ok(())
}

fn extraction_ends(addrs: &BTreeSet<IpAddr>, total_time: Duration, cfg: &Config) {
    match cfg.quiet {
        0 if addrs.is_empty() => {
            print::header("zero addresses found", cfg.quiet);
            print::no_results();
        }
        0 => {
            print::header("summary", cfg.quiet);
            print::as_tree_one_level(format::family_counts(addrs));
            print_summary(addrs.len(), total_time);
        }
        1 => {
            sprint!();
            print_summary(addrs.len(), total_time);
        }
        _ => {}
    }
}

fn print_summary(addrs_len: usize, total_time: Duration) {
    let unique: ColoredString = format!("{addrs_len} unique addresses").bold().green();
    let total_time: ColoredString = format!("{:.3}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Extraction complete: {unique} in {total_time}");

    print::fat_separator();
    print::centerln(&output);
}
