use anyhow::Result;
use clap::Parser as ClapParser;

use cli::command::{Cli, Commands, LogFormat};
use cli::esds::cmd_esds;
use cli::info::cmd_info;

mod cli;
mod input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(cli.loglevel.to_level_filter());
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                let line = json_log_line(
                    &buf.timestamp().to_string(),
                    record.level(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
    }
    env_builder.try_init()?;

    match cli.command {
        Commands::Info(ref args) => cmd_info(args, &cli)?,
        Commands::Esds(ref args) => cmd_esds(args)?,
    }

    Ok(())
}

fn json_log_line(ts: &str, level: log::Level, msg: &str) -> String {
    serde_json::json!({ "ts": ts, "lvl": level.as_str(), "msg": msg }).to_string()
}
