//! Command-line interface for generating icons into PNG files

use crate::algorithm::generator::{Icon, generate};
use crate::algorithm::pattern::PatternRatios;
use crate::algorithm::resolver::IconOptions;
use crate::io::configuration::{FALLBACK_FILE_STEM, OUTPUT_EXTENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_icon_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blockies")]
#[command(
    author,
    version,
    about = "Generate deterministic pixel-art identicons from text seeds"
)]
/// Command-line arguments for the icon generator
// Output toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seeds to render, one icon each (one random icon when omitted)
    #[arg(value_name = "SEED")]
    pub seeds: Vec<String>,

    /// Seed for the pattern stream
    #[arg(long)]
    pub pattern_seed: Option<String>,

    /// Seed for the foreground color stream
    #[arg(long)]
    pub color_seed: Option<String>,

    /// Seed for the background color stream
    #[arg(long)]
    pub bgcolor_seed: Option<String>,

    /// Seed for the spot color stream
    #[arg(long)]
    pub spotcolor_seed: Option<String>,

    /// Cells per side (default 8)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Output pixels per cell (default 4)
    #[arg(short = 'x', long)]
    pub scale: Option<usize>,

    /// Literal foreground color: `#rgb`, `#rrggbb`, `rgb(r,g,b)` or
    /// `hsl(h,s%,l%)` (named colors are not supported)
    #[arg(long)]
    pub color: Option<String>,

    /// Literal background color, same formats as `--color`
    #[arg(long)]
    pub bgcolor: Option<String>,

    /// Literal spot color, same formats as `--color`
    #[arg(long)]
    pub spotcolor: Option<String>,

    /// Foreground weight (selects the weighted pattern)
    #[arg(long)]
    pub color_ratio: Option<f64>,

    /// Background weight (selects the weighted pattern)
    #[arg(long)]
    pub bgcolor_ratio: Option<f64>,

    /// Spot weight (selects the weighted pattern)
    #[arg(long)]
    pub spotcolor_ratio: Option<f64>,

    /// Use the weighted pattern with default ratios for unset weights
    #[arg(short, long)]
    pub weighted: bool,

    /// Directory receiving the PNG files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print a text preview and the colors of each icon
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite icons that already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation options for one icon
    pub fn icon_options(&self, seed: Option<&str>) -> IconOptions {
        let mut options = IconOptions {
            seed: seed.map(str::to_string),
            pattern_seed: self.pattern_seed.clone(),
            color_seed: self.color_seed.clone(),
            background_color_seed: self.bgcolor_seed.clone(),
            spot_color_seed: self.spotcolor_seed.clone(),
            size: self.size,
            scale: self.scale,
            color: self.color.clone(),
            background_color: self.bgcolor.clone(),
            spot_color: self.spotcolor.clone(),
            color_ratio: self.color_ratio,
            background_color_ratio: self.bgcolor_ratio,
            spot_color_ratio: self.spotcolor_ratio,
        };

        if self.weighted {
            let defaults = PatternRatios::default();
            options.color_ratio = options.color_ratio.or(Some(defaults.foreground));
            options.background_color_ratio =
                options.background_color_ratio.or(Some(defaults.background));
            options.spot_color_ratio = options.spot_color_ratio.or(Some(defaults.spot));
        }

        options
    }
}

/// Turn a seed into a file stem safe on every platform
pub fn file_stem_for_seed(seed: &str) -> String {
    let stem: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.chars().all(|c| c == '_') {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    }
}

/// File stems already claimed within one batch, keyed by stem
#[derive(Debug, Default)]
pub struct StemRegistry {
    owners: HashMap<String, String>,
}

impl StemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a file stem for `seed`
    ///
    /// A seed gets the same stem every time it is claimed. When the stem of a
    /// different seed already took its name, `-2`, `-3` and so on are appended
    /// until a free stem is found.
    pub fn claim(&mut self, seed: &str) -> String {
        let base = file_stem_for_seed(seed);
        let mut stem = base.clone();
        let mut suffix = 2_usize;

        while let Some(owner) = self.owners.get(&stem) {
            if owner == seed {
                return stem;
            }
            stem = format!("{base}-{suffix}");
            suffix += 1;
        }

        self.owners.insert(stem.clone(), seed.to_string());
        stem
    }
}

/// Generates one icon per requested seed and writes it to disk
pub struct IconProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl IconProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write every requested icon
    ///
    /// Returns the paths that were written, in seed order.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory is unusable, a literal color
    /// cannot be painted, or a file cannot be written
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.validate_output_dir()?;

        let seeds: Vec<Option<String>> = if self.cli.seeds.is_empty() {
            vec![None]
        } else {
            self.cli.seeds.iter().cloned().map(Some).collect()
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut stems = StemRegistry::new();
        let mut written = Vec::new();
        for seed in &seeds {
            let icon = generate(&self.cli.icon_options(seed.as_deref()));
            let output_path = self.output_path_for_stem(&stems.claim(icon.seed()));
            if let Some(ref pm) = self.progress_manager {
                pm.start_icon(icon.seed());
            }

            if let Some(path) = self.process_icon(&icon, output_path)? {
                written.push(path);
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_icon();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn validate_output_dir(&self) -> Result<()> {
        if self.cli.output_dir.is_file() {
            return Err(invalid_parameter(
                "output-dir",
                &self.cli.output_dir.display(),
                &"must be a directory",
            ));
        }
        Ok(())
    }

    // Allow print for the requested preview and skip notices
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn process_icon(&self, icon: &Icon, output_path: PathBuf) -> Result<Option<PathBuf>> {
        if self.cli.print {
            let colors = icon.colors();
            println!("{}", icon.seed());
            print!("{}", icon.grid().to_ascii());
            println!("color:     {}", colors.foreground);
            println!("bgcolor:   {}", colors.background);
            println!("spotcolor: {}", colors.spot);
        }

        if self.cli.skip_existing() && output_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            return Ok(None);
        }

        export_icon_as_png(icon, &output_path)?;
        Ok(Some(output_path))
    }

    /// Path an icon for `seed` is written to when no other seed in the batch
    /// shares its file stem
    pub fn output_path(&self, seed: &str) -> PathBuf {
        self.output_path_for_stem(&file_stem_for_seed(seed))
    }

    fn output_path_for_stem(&self, stem: &str) -> PathBuf {
        self.cli.output_dir.join(format!("{stem}.{OUTPUT_EXTENSION}"))
    }
}
