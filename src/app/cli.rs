use std::{ffi::OsString, path::PathBuf};

use clap::{ArgGroup, Parser};
use uuid::Uuid;

use super::skin_service::{grab_skin, PlayerQuery, RunOptions, SkinReport};
use crate::{
    infrastructure::filesystem::config::{load_config, SkinConfig},
    shared::result::AppResult,
};

const LEGACY_OVERLAYS_FLAG: &str = "-overlays";

#[derive(Debug, Parser)]
#[command(
    name = "skin-grab",
    about = "Minecraft skin downloader/converter.",
    version
)]
#[command(group(ArgGroup::new("player").required(true).args(["name", "uuid"])))]
pub struct Cli {
    /// Minecraft player name
    #[arg(short = 'n', long = "name", value_name = "PLAYER")]
    pub name: Option<String>,

    /// Player uuid, skips the name lookup
    #[arg(long, value_name = "UUID")]
    pub uuid: Option<Uuid>,

    /// Composite the second skin layer (also accepted as -overlays)
    #[arg(long)]
    pub overlays: bool,

    /// Only write the normalized skin
    #[arg(long)]
    pub no_preview: bool,

    /// Directory for the generated PNG files [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    /// The `player` group guarantees one of `--name` / `--uuid` after parsing.
    pub fn run_options(&self) -> RunOptions {
        let query = match self.uuid {
            Some(uuid) => PlayerQuery::Uuid(uuid),
            None => PlayerQuery::Name(self.name.clone().unwrap_or_default()),
        };

        RunOptions {
            query,
            overlays: self.overlays,
            write_preview: !self.no_preview,
        }
    }

    pub fn apply_overrides(&self, config: &mut SkinConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
    }
}

/// Rewrites the single-dash `-overlays` into the `--overlays` long flag.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == LEGACY_OVERLAYS_FLAG {
                OsString::from("--overlays")
            } else {
                arg
            }
        })
        .collect()
}

pub fn execute(cli: &Cli) -> AppResult<SkinReport> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    grab_skin(&config, &cli.run_options())
}
