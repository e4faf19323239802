use std::io::{self, Read};

use anyhow::Context;
use ipsift_common::config::Config;
use ipsift_core::action;
use serde_json::Value;

use crate::terminal::print;

pub fn call(name: &str, args: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let spec: &action::ActionSpec = action::lookup(name)?;

    let raw: String = match args {
        Some(raw) => raw,
        None => {
            let mut buffer: String = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read arguments from stdin")?;
            buffer
        }
    };

    let args: Value = serde_json::from_str(&raw).context("Arguments are not valid JSON")?;
    let result: Value = spec
        .call(args)
        .with_context(|| format!("Action '{}' failed", spec.qualified_name()))?;

    if cfg.quiet == 0 {
        print::aligned_line("Action", spec.title);
    }

    let output: String = if cfg.json {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{output}");
    Ok(())
}
