//! exifdoc - inspect and edit EXIF document snapshots.
//!
//! This binary wires the configuration, logging and snapshot layers around
//! the document model.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exif_document::{
    config::{parse_tag_id, Cli, Command},
    snapshot, ExifData, ExifTag, IfdId, Tag,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Summary { snapshot } => with_snapshot(&snapshot, |data| {
            print_summary(data);
            ExitCode::SUCCESS
        }),
        Command::Tags { snapshot, ifd, tag } => with_snapshot(&snapshot, |data| {
            // Validated above
            let tag_id = tag.as_deref().and_then(|t| parse_tag_id(t).ok());
            run_tags(data, ifd, tag_id)
        }),
        Command::Comment { snapshot } => with_snapshot(&snapshot, run_comment),
        Command::StripThumbnail {
            snapshot,
            output,
            keep_tags,
        } => run_strip_thumbnail(&snapshot, &output, keep_tags),
    }
}

/// Load a snapshot and hand it to `f`, reporting load failures.
fn with_snapshot(path: &std::path::Path, f: impl FnOnce(&ExifData) -> ExitCode) -> ExitCode {
    match snapshot::load(path) {
        Ok(data) => f(&data),
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Summary Command
// =============================================================================

fn print_summary(data: &ExifData) {
    println!("Byte order:        {:?}", data.byte_order());
    for ifd in IfdId::ALL {
        match data.ifd_data(ifd.index()) {
            Some(dir) => println!("IFD {:<13} {} tag(s)", ifd.name(), dir.len()),
            None => println!("IFD {:<13} absent", ifd.name()),
        }
    }

    match data.compressed_thumbnail() {
        Some(thumb) => println!("Thumbnail:         {} bytes (compressed)", thumb.len()),
        None => println!("Thumbnail:         none"),
    }
    let present = (0..data.strip_count())
        .filter(|&i| matches!(data.strip(i), Ok(Some(_))))
        .count();
    println!(
        "Strips:            {} slot(s), {} present",
        data.strip_count(),
        present
    );

    let (width, length) = data.image_size();
    println!("Image size:        {} x {}", width, length);
    println!("Quality guess:     {}", data.quality_guess());
    println!("JPEG process:      0x{:04X}", data.jpeg_process());
    println!("Sections:          {}", data.sections().len());
}

// =============================================================================
// Tags Command
// =============================================================================

fn run_tags(data: &ExifData, ifd: Option<IfdId>, tag_id: Option<u16>) -> ExitCode {
    let tags = match (ifd, tag_id) {
        (Some(ifd), Some(id)) => data.get_tag(id, ifd).map(|t| vec![t]),
        (Some(ifd), None) => data.all_tags_for_ifd(ifd),
        (None, Some(id)) => data.all_tags_for_tag_id(id),
        (None, None) => data.all_tags(),
    };

    match tags {
        Some(tags) => {
            for tag in tags {
                print_tag(data, tag);
            }
        }
        None => info!("No matching tags"),
    }
    ExitCode::SUCCESS
}

fn print_tag(data: &ExifData, tag: &Tag) {
    let name = ExifTag::from_u16(tag.id())
        .map(|t| format!("{:?}", t))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<10} 0x{:04X} {:<28} {:?} x{} = {:?}",
        tag.ifd().name(),
        tag.id(),
        name,
        tag.field_type(),
        tag.component_count(),
        tag.value(data.byte_order())
    );
}

// =============================================================================
// Comment Command
// =============================================================================

fn run_comment(data: &ExifData) -> ExitCode {
    let comment = data
        .user_comment()
        .or_else(|| data.user_comment_in(IfdId::Exif));
    match comment {
        Some(text) => println!("{}", text),
        None => info!("No decodable user comment"),
    }
    ExitCode::SUCCESS
}

// =============================================================================
// StripThumbnail Command
// =============================================================================

fn run_strip_thumbnail(
    input: &std::path::Path,
    output: &std::path::Path,
    keep_tags: bool,
) -> ExitCode {
    let mut data = match snapshot::load(input) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load {}: {}", input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if keep_tags {
        data.clear_thumbnail_and_strips();
    } else {
        data.remove_thumbnail_data();
    }

    if let Err(e) = snapshot::save(&data, output) {
        error!("Failed to write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }

    info!("Wrote {}", output.display());
    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exif_document=debug,exifdoc=debug"
    } else {
        "exif_document=info,exifdoc=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
