use colored::*;
use ipsift_common::config::Config;
use ipsift_core::action::{self, ActionSpec};

use crate::sprint;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        println!("{}", serde_json::to_string_pretty(action::registry())?);
        return Ok(());
    }

    GLOBAL_KEY_WIDTH.set(8);
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Actions", action::registry().len().to_string());
    sprint!();

    for (idx, spec) in action::registry().iter().enumerate() {
        print::tree_head(idx, &spec.qualified_name());
        print::as_tree_one_level(action_details(spec));
    }
    Ok(())
}

fn action_details(spec: &ActionSpec) -> Vec<(String, ColoredString)> {
    vec![
        ("Title".to_string(), spec.title.bold()),
        ("Group".to_string(), spec.display_group.normal()),
        ("About".to_string(), spec.description.italic()),
    ]
}
