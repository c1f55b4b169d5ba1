//! Command-line parsing and validation.
//!
//! Every flag is optional at the clap level. Required flags are checked
//! afterwards so each one reports its own exit status.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};

use crate::error::ConfigError;
use crate::models::{AnnotationConfig, RunConfig};

/// Environment variable naming the annotation config file.
pub const CONFIG_ENV: &str = "STEREO_CONFIG_FILE";

#[derive(Parser, Debug)]
#[command(name = "stereopointcounter")]
#[command(version, disable_version_flag = true)]
#[command(about = "Stereological point counting on greyscale PNG images")]
pub struct Cli {
    /// Image file, or directory of .png images
    #[arg(short, long, value_name = "PATH")]
    pub images: Option<PathBuf>,

    /// Number of vertical grid lines
    #[arg(long, value_name = "N", allow_negative_numbers = true,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub gridx: Option<u32>,

    /// Number of horizontal grid lines
    #[arg(long, value_name = "N", allow_negative_numbers = true,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub gridy: Option<u32>,

    /// Minimum intensity (0-255) counted as positive
    #[arg(short, long, value_name = "0-255", allow_negative_numbers = true)]
    pub threshold: Option<u8>,

    /// Write annotated copies of each image into this directory
    #[arg(short, long, value_name = "DIR")]
    pub saveimages: Option<PathBuf>,

    /// YAML file with overlay colors and marker radius
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    #[arg(hide = true)]
    extra: Vec<String>,
}

/// What `main` should do after parsing.
#[derive(Debug)]
pub enum CliAction {
    /// Count points with this configuration.
    Run(RunConfig),
    /// Print this text to stdout and exit successfully (help, version).
    Print(String),
}

/// Full help text.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Parse `args` (including the program name) into a validated run config.
///
/// `env_config` is the value of [`CONFIG_ENV`], used when `--config` is absent.
pub fn parse_args<I, T>(args: I, env_config: Option<PathBuf>) -> Result<CliAction, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Err(ConfigError::NoArguments);
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return from_clap_error(e),
    };
    cli.into_run_config(env_config).map(CliAction::Run)
}

fn from_clap_error(e: clap::Error) -> Result<CliAction, ConfigError> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(CliAction::Print(e.to_string())),
        ErrorKind::UnknownArgument => {
            let invalid = match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => vec![arg.clone()],
                Some(ContextValue::Strings(args)) => args.clone(),
                _ => Vec::new(),
            };
            Err(ConfigError::UnknownOption(invalid))
        }
        _ => Err(ConfigError::Parse(e.to_string().trim_end().to_string())),
    }
}

impl Cli {
    /// Check required flags and the save directory, then load overlay
    /// settings.
    pub fn into_run_config(self, env_config: Option<PathBuf>) -> Result<RunConfig, ConfigError> {
        if !self.extra.is_empty() {
            return Err(ConfigError::UnexpectedPositional(self.extra));
        }
        let grid_x = self.gridx.ok_or(ConfigError::MissingGridX)?;
        let grid_y = self.gridy.ok_or(ConfigError::MissingGridY)?;
        let images = self.images.ok_or(ConfigError::MissingImages)?;
        let threshold = self.threshold.ok_or(ConfigError::MissingThreshold)?;

        if let Some(dir) = &self.saveimages {
            if !dir.exists() {
                return Err(ConfigError::SaveDirNotFound(dir.clone()));
            }
            if !dir.is_dir() {
                return Err(ConfigError::SaveDirNotDirectory(dir.clone()));
            }
        }

        let config_path = self.config.or(env_config);
        let overlay = AnnotationConfig::load(config_path.as_deref())?.resolve()?;

        let mut config = RunConfig::new(images, grid_x, grid_y, threshold).with_overlay(overlay);
        if let Some(dir) = self.saveimages {
            config = config.with_save_dir(dir);
        }

        tracing::debug!(
            images = %config.images.display(),
            grid_x,
            grid_y,
            threshold,
            save_dir = ?config.save_dir,
            "Parsed arguments"
        );
        Ok(config)
    }
}
