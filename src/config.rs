//! Configuration for the `exifdoc` tool.
//!
//! `exifdoc` inspects and edits EXIF document snapshots (see
//! [`crate::snapshot`]). Options come from the command line, with the
//! logging switch also readable from the environment:
//!
//! - `EXIFDOC_VERBOSE` - Enable debug logging (default: false)
//! - `RUST_LOG` - Full tracing filter, overrides `--verbose`
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use exif_document::config::Cli;
//!
//! let cli = Cli::parse();
//! cli.validate()?;
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::exif::IfdId;

// =============================================================================
// CLI Arguments
// =============================================================================

/// exifdoc - Inspect and edit EXIF document snapshots.
#[derive(Parser, Debug, Clone)]
#[command(name = "exifdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false, env = "EXIFDOC_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print byte order, IFD contents and thumbnail state.
    Summary {
        /// Snapshot file to read.
        snapshot: PathBuf,
    },

    /// List tags, optionally restricted to one IFD or one tag id.
    Tags {
        /// Snapshot file to read.
        snapshot: PathBuf,

        /// Only show this IFD (primary, thumbnail, exif, interop, gps).
        #[arg(long, value_parser = parse_ifd)]
        ifd: Option<IfdId>,

        /// Only show tags with this id (decimal or 0x-prefixed hex).
        #[arg(long)]
        tag: Option<String>,
    },

    /// Print the decoded UserComment.
    Comment {
        /// Snapshot file to read.
        snapshot: PathBuf,
    },

    /// Remove thumbnail data and write a new snapshot.
    StripThumbnail {
        /// Snapshot file to read.
        snapshot: PathBuf,

        /// Where to write the edited snapshot.
        #[arg(short, long)]
        output: PathBuf,

        /// Keep the thumbnail IFD and its tags, dropping only pixel data.
        #[arg(long, default_value_t = false)]
        keep_tags: bool,
    },
}

impl Cli {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Tags { tag: Some(tag), .. } => {
                parse_tag_id(tag)?;
            }
            Command::StripThumbnail {
                snapshot, output, ..
            } => {
                if snapshot == output {
                    return Err(
                        "Output path must differ from the input snapshot. Set --output".to_string()
                    );
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Parse a tag id written in decimal or `0x` hex.
pub fn parse_tag_id(value: &str) -> Result<u16, String> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    };
    parsed.map_err(|_| format!("Invalid tag id '{}': expected 0-65535 or 0x0000-0xFFFF", value))
}

fn parse_ifd(value: &str) -> Result<IfdId, String> {
    IfdId::from_name(value).ok_or_else(|| {
        format!(
            "Unknown IFD '{}': expected one of primary, thumbnail, exif, interop, gps",
            value
        )
    })
}

// =============================================================================
// Tests
// =============================================================================
