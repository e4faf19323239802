mod commands;
mod terminal;

use commands::{CommandLine, Commands, call, extract, info};
use ipsift_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        json: commands.json,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Extract {
            texts,
            files,
            ip_version,
        } => {
            print::header("extracting addresses", cfg.quiet);
            extract::extract(texts, &files, ip_version, &cfg)
        }
        Commands::Call { action, args } => {
            print::header("calling action", cfg.quiet);
            call::call(&action, args, &cfg)
        }
        Commands::Info => {
            print::header("registered actions", cfg.quiet);
            info::info(&cfg)
        }
    }
}
