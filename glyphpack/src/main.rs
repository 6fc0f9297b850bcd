use anyhow::{Context, Result};
use clap::Parser;
use glyphpack_lib::{convert, Format, Output, Source, Stats};
use indicatif::ParallelProgressIterator;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::fs;
use std::path::{Path, PathBuf};

/// Packs textual bitmap descriptions into binary glyph data.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input files, or directories of `.txt` bitmap sources
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format: `raw` (packed bytes) or `rle`
    #[arg(short, long, default_value = "rle")]
    format: Format,

    /// Output file (with a single input) or output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let source = Source::locate(&args.inputs)?;
    let files = source.files();

    if let [file] = files {
        if let Some(output) = args.output.as_deref().filter(|path| !path.is_dir()) {
            let stats = convert_file(file, output, args.format)?;
            eprintln!("{:#?}", stats);
            return Ok(());
        }
    }

    let results: Vec<_> = files
        .par_iter()
        .progress_count(files.len() as u64)
        .map(|input| {
            let output = output_path(input, args.output.as_deref(), args.format);

            convert_file(input, &output, args.format).map(|stats| (input.clone(), stats))
        })
        .collect::<Result<_>>()?;

    for (input, stats) in results {
        eprintln!(
            "{}: {} lines, {} -> {} bytes",
            input.display(),
            stats.data_lines,
            stats.bytes_in,
            stats.bytes_out,
        );
    }

    Ok(())
}

fn output_path(input: &Path, output: Option<&Path>, format: Format) -> PathBuf {
    let path = input.with_extension(format.extension());

    match (output, path.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => path,
    }
}

fn convert_file(input: &Path, output: &Path, format: Format) -> Result<Stats> {
    let text = Source::read(input)?;

    let Output { bytes, stats } =
        convert(&text, format).with_context(|| format!("Couldn't convert {}", input.display()))?;

    fs::write(output, bytes).with_context(|| format!("Couldn't write {}", output.display()))?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lands_next_to_the_input() {
        let path = output_path(Path::new("fonts/ascii.txt"), None, Format::Rle);
        assert_eq!(path, Path::new("fonts/ascii.rle"));

        let path = output_path(Path::new("fonts/ascii.txt"), None, Format::Raw);
        assert_eq!(path, Path::new("fonts/ascii.bin"));
    }

    #[test]
    fn output_directory_overrides_the_location() {
        let path = output_path(Path::new("fonts/ascii.txt"), Some(Path::new("out")), Format::Rle);
        assert_eq!(path, Path::new("out/ascii.rle"));
    }
}
