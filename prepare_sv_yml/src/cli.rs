use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};

use anyhow::Context;

use utils::{init_log, LogLevel};

use crate::{config::*, sample::*};

/// Set up definition of command options for clap
fn cli_model() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!())
        .arg(
            Arg::new("timestamp")
                .short('X')
                .long("timestamp")
                .value_parser(value_parser!(stderrlog::Timestamp))
                .value_name("GRANULARITY")
                .default_value("none")
                .help("Prepend log entries with a timestamp"),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("warn")
                .help("Set log level"),
        )
        .arg(
            Arg::new("quiet")
                .action(ArgAction::SetTrue)
                .long("quiet")
                .conflicts_with("loglevel")
                .help("Silence log output"),
        )
        .arg(
            Arg::new("samples_file")
                .short('s')
                .long("samples_file")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .required(true)
                .help("Tab-delimited file with paths to sample bams in first column, and their matched control in the second column"),
        )
        .arg(
            Arg::new("healthy")
                .short('n')
                .long("healthy")
                .value_parser(value_parser!(PathBuf))
                .value_name("PATH")
                .required(true)
                .help("File with a list of paths to healthy bam files"),
        )
        .arg(
            Arg::new("reference")
                .short('r')
                .long("reference")
                .value_parser(value_parser!(String))
                .value_name("PATH")
                .required(true)
                .help("Path to reference genome .fa file"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_parser(value_parser!(String))
                .value_name("PATH")
                .required(true)
                .help("Path to bed file describing target regions used for targeted sequencing"),
        )
        .arg(
            Arg::new("genome")
                .short('g')
                .long("genome")
                .value_parser(value_parser!(String))
                .value_name("STRING")
                .required(true)
                .help("Name of reference genome (should correspond to file in -r, e.g., hg19)"),
        )
        .arg(
            Arg::new("max_distance")
                .long("max_distance")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .value_name("INT")
                .default_value("1000")
                .help("Max allowed distance between SVs for merging"),
        )
        .arg(
            Arg::new("num_callers")
                .long("num_callers")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .value_name("INT")
                .default_value("2")
                .help("Number of tools that must call an SV for it to be considered a consensus call"),
        )
        .arg(
            Arg::new("neither")
                .long("neither")
                .value_parser(value_parser!(String))
                .value_name("PATH")
                .help("Bed file used to filter SVs with bedtools pairToBed --neither (e.g., a blacklist)"),
        )
        .arg(
            Arg::new("notboth")
                .long("notboth")
                .value_parser(value_parser!(String))
                .value_name("PATH")
                .help("Bed file used to filter SVs with bedtools pairToBed --notboth (e.g., low complexity regions)"),
        )
        .arg(
            Arg::new("min_size")
                .long("min_size")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .value_name("INT")
                .default_value("30")
                .help("Minimum size of SV to be considered"),
        )
        .arg(
            Arg::new("same_strand")
                .action(ArgAction::SetTrue)
                .long("same_strand")
                .help("Require SVs to be on the same strand in order to be merged"),
        )
        .arg(
            Arg::new("same_type")
                .action(ArgAction::SetFalse)
                .long("same_type")
                .help("Turn off requirement for SVs to be of the same type in order to be merged"),
        )
        .arg(
            Arg::new("est_dist")
                .action(ArgAction::SetTrue)
                .long("est_dist")
                .help("Estimate SV distance"),
        )
}

/// Collect pipeline parameters from the command line
fn pipeline_params(m: &ArgMatches) -> PipelineParams {
    let mut params = PipelineParams::new(
        m.get_one::<String>("reference")
            .expect("Missing reference file"),
        m.get_one::<String>("genome").expect("Missing genome name"),
        m.get_one::<String>("target").expect("Missing target file"),
    );

    params.set_max_distance(
        *m.get_one::<i64>("max_distance")
            .expect("Missing default max distance"),
    );
    params.set_num_callers(
        *m.get_one::<i64>("num_callers")
            .expect("Missing default number of callers"),
    );
    params.set_min_size(*m.get_one::<i64>("min_size").expect("Missing default min size"));
    params.set_same_strand(m.get_flag("same_strand"));
    params.set_same_type(m.get_flag("same_type"));
    params.set_est_dist(m.get_flag("est_dist"));

    if let Some(p) = m.get_one::<String>("neither") {
        params.set_neither(PathBuf::from(p))
    }
    if let Some(p) = m.get_one::<String>("notboth") {
        params.set_notboth(PathBuf::from(p))
    }
    params
}

/// Handle command line options.  Set up Config structure
pub fn handle_cli() -> anyhow::Result<Config> {
    // Get matches from command line
    let m = cli_model().get_matches();

    // Setup logging
    init_log(&m)?;

    debug!("Processing command line options");

    let params = pipeline_params(&m);

    // Read in manifests
    let sample_pairs = read_sample_pairs_from_file(
        m.get_one::<PathBuf>("samples_file")
            .expect("Missing samples manifest"),
    )
    .with_context(|| "Could not read from samples manifest")?;

    let healthy_bams = read_healthy_list_from_file(
        m.get_one::<PathBuf>("healthy")
            .expect("Missing healthy manifest"),
    )
    .with_context(|| "Could not read from healthy manifest")?;

    if sample_pairs.is_empty() {
        warn!("No tumor/control pairs found in samples manifest")
    }
    if healthy_bams.is_empty() {
        warn!("No healthy BAMs found in healthy manifest")
    }
    info!(
        "Found {} tumor/control pairs and {} healthy BAMs",
        sample_pairs.len(),
        healthy_bams.len()
    );

    Ok(Config::new(params, sample_pairs, healthy_bams))
}
