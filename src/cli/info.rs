use anyhow::Result;
use serde::Serialize;

use super::command::{Cli, InfoArgs, OutputFormat};
use super::load_source;
use crate::input::format_hex;
use mp4asc::process::format::{MIN_PARSED_EXTRADATA_LEN, SourceFormat};
use mp4asc::structs::audio_config::AudioConfig;
use mp4asc::structs::object_type::object_type_name;

pub fn cmd_info(args: &InfoArgs, cli: &Cli) -> Result<()> {
    let extradata = load_source(&args.source)?;

    log::info!(
        "Analyzing AudioSpecificConfig: {} bytes [{}]",
        extradata.len(),
        format_hex(&extradata)
    );

    let report = analyze_config(&extradata, cli.strict)?;

    match args.format {
        OutputFormat::Plain => display_report(&report),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&report)?),
    }

    Ok(())
}

/// Every input is decoded for display. The decoder section follows
/// [`SourceFormat::try_from_extradata`], which never parses extradata of
/// [`MIN_PARSED_EXTRADATA_LEN`] bytes or fewer, so a failure there is only
/// reported.
fn analyze_config(extradata: &[u8], strict: bool) -> Result<ConfigReport> {
    let mut config = AudioConfig::default();
    let decoder_parses = extradata.len() > MIN_PARSED_EXTRADATA_LEN;

    let (format, error) = match config.parse_into(extradata) {
        Ok(()) if decoder_parses => (SourceFormat::from_config(config.clone()), None),
        Ok(()) => (SourceFormat::default(), None),
        Err(e) if !decoder_parses => {
            log::warn!("short audio decoder config does not parse ({e}), decoder uses plain AAC");
            (SourceFormat::default(), Some(e.to_string()))
        }
        Err(e) => {
            if strict {
                return Err(e.into());
            }
            log::warn!("failed to parse audio decoder config ({e}), assuming plain AAC");
            (SourceFormat::default(), Some(e.to_string()))
        }
    };

    Ok(ConfigReport::new(&config, &format, error))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigReport {
    object_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    object_type_name: Option<&'static str>,
    sampling_frequency_index: u8,
    sampling_frequency: u32,
    channel_configuration: u8,
    channel_layout: String,
    channel_count: u32,
    frame_length_flag: bool,
    depends_on_core_coder: bool,
    core_coder_delay: u16,
    extension: ExtensionReport,
    decoder: DecoderReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtensionReport {
    sbr_present: bool,
    ps_present: bool,
    object_type: u8,
    sampling_frequency_index: u8,
    sampling_frequency: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecoderReport {
    profile: String,
    packets_per_conversion: u32,
    output_sampling_frequency: u32,
}

impl ConfigReport {
    fn new(config: &AudioConfig, format: &SourceFormat, error: Option<String>) -> Self {
        Self {
            object_type: config.object_type,
            object_type_name: object_type_name(config.object_type),
            sampling_frequency_index: config.sampling_frequency_index,
            sampling_frequency: config.sampling_frequency,
            channel_configuration: config.channel_configuration.raw(),
            channel_layout: config.channel_configuration.to_string(),
            channel_count: config.channel_count,
            frame_length_flag: config.frame_length_flag,
            depends_on_core_coder: config.depends_on_core_coder,
            core_coder_delay: config.core_coder_delay,
            extension: ExtensionReport {
                sbr_present: config.extension.sbr_present,
                ps_present: config.extension.ps_present,
                object_type: config.extension.object_type,
                sampling_frequency_index: config.extension.sampling_frequency_index,
                sampling_frequency: config.extension.sampling_frequency,
            },
            decoder: DecoderReport {
                profile: format.profile.to_string(),
                packets_per_conversion: format.packets_per_conversion,
                output_sampling_frequency: config.output_sampling_frequency(),
            },
            error,
        }
    }
}

fn display_report(report: &ConfigReport) {
    println!();
    println!("AudioSpecificConfig");
    println!("===================");
    println!();

    println!("Core Configuration");
    println!(
        "  Object type               {} ({})",
        report.object_type,
        report.object_type_name.unwrap_or("unknown")
    );
    println!(
        "  Sampling rate             {} Hz (index {:#X})",
        report.sampling_frequency, report.sampling_frequency_index
    );
    println!(
        "  Channels                  {} ({}, configuration {})",
        report.channel_count, report.channel_layout, report.channel_configuration
    );
    println!("  Frame length flag         {}", report.frame_length_flag);
    println!("  Depends on core coder     {}", report.depends_on_core_coder);
    if report.depends_on_core_coder {
        println!("  Core coder delay          {}", report.core_coder_delay);
    }
    println!();

    let ext = &report.extension;
    println!("Extension");
    println!("  SBR present               {}", ext.sbr_present);
    println!("  PS present                {}", ext.ps_present);
    if ext.object_type != 0 {
        println!(
            "  Object type               {} ({})",
            ext.object_type,
            object_type_name(ext.object_type).unwrap_or("unknown")
        );
    }
    if ext.sampling_frequency != 0 {
        println!(
            "  Sampling rate             {} Hz (index {:#X})",
            ext.sampling_frequency, ext.sampling_frequency_index
        );
    }
    println!();

    println!("Decoder");
    println!("  Profile                   {}", report.decoder.profile);
    println!("  Packets per conversion    {}", report.decoder.packets_per_conversion);
    println!(
        "  Output sampling rate      {} Hz",
        report.decoder.output_sampling_frequency
    );

    if let Some(error) = &report.error {
        println!();
        println!("Parse error                 {error}");
    }
}
