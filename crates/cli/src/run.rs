//! `tally run` / `tally validate` / `tally sources`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use tally::builtin::{builtin_config, builtin_input};
use tally::engine::load_source_json;
use tally::{TallyConfig, TallyError, TallyInput, TallyResult};

use crate::exit_codes::EXIT_INVALID_CONFIG;
use crate::CliError;

pub fn cmd_run(
    config_path: Option<PathBuf>,
    report: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let (config, input) = match config_path {
        Some(ref path) => {
            let config = read_config(path)?;
            let input = load_sources(path, &config)?;
            (config, input)
        }
        None => (builtin_config(), builtin_input()?),
    };

    let result = tally::run(&config, &input)?;

    if let Some(ref path) = output_file {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        std::fs::write(path, json_str)
            .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
        if !quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    let stdout_json = if report {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string_pretty(&result.volunteers)
    }
    .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
    println!("{stdout_json}");

    if !quiet {
        eprintln!("{}", human_summary(&result));
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config = read_config(&config_path)?;
    eprintln!(
        "{}: ok ({} source(s): {})",
        config_path.display(),
        config.sources.len(),
        config.source_names().join(", ")
    );
    Ok(())
}

pub fn cmd_sources() -> Result<(), CliError> {
    let config = builtin_config();
    for source in &config.sources {
        println!("{}\t{}\t{}", source.name, source.file, source.duration_field);
    }
    Ok(())
}

fn read_config(path: &Path) -> Result<TallyConfig, CliError> {
    let config_str = std::fs::read_to_string(path).map_err(|e| CliError {
        code: EXIT_INVALID_CONFIG,
        message: format!("cannot read config {}: {e}", path.display()),
        hint: None,
    })?;
    TallyConfig::from_toml(&config_str).map_err(|e| {
        CliError::from(e).with_hint(format!("run `tally validate {}` after editing", path.display()))
    })
}

/// Load each source's JSON, resolving paths relative to the config file's directory.
fn load_sources(config_path: &Path, config: &TallyConfig) -> Result<TallyInput, CliError> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let mut records = HashMap::new();
    for source in &config.sources {
        let json_path = base_dir.join(&source.file);
        debug!("reading source '{}' from {}", source.name, json_path.display());
        let json = std::fs::read_to_string(&json_path).map_err(|e| {
            TallyError::Io(format!("cannot read {}: {e}", json_path.display()))
        })?;
        records.insert(source.name.clone(), load_source_json(&source.name, &json)?);
    }

    Ok(TallyInput { records })
}

fn human_summary(result: &TallyResult) -> String {
    let s = &result.summary;
    let mut line = format!(
        "{} volunteer(s) from {} source(s): {} verified hour(s), {} of {} activities counted",
        s.volunteers,
        result.meta.sources.len(),
        s.total_hours,
        s.counted_activities,
        s.activities,
    );
    if s.unrecognized_activities > 0 {
        line.push_str(&format!(
            ", {} unrecognized verification value(s) treated as {}",
            s.unrecognized_activities, result.meta.unrecognized_verification
        ));
    }
    if s.skipped_volunteers > 0 {
        line.push_str(&format!(", {} volunteer(s) skipped", s.skipped_volunteers));
    }
    line
}
