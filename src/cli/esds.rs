use anyhow::Result;

use super::command::EsdsArgs;
use super::load_source;
use crate::input::format_hex;
use mp4asc::process::esds::build_es_descriptor;

pub fn cmd_esds(args: &EsdsArgs) -> Result<()> {
    let extradata = load_source(&args.source)?;

    log::info!("Wrapping {} bytes of decoder specific info", extradata.len());

    let esds = build_es_descriptor(&extradata)?;
    println!("{}", format_hex(&esds));

    Ok(())
}
