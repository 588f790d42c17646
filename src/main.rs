use {
  anyhow::{Context, Result},
  circle_packing::{
    config::{OutputConfig, PackingConfig},
    output, profile,
    solver::{self, SigmaSearch}
  },
  clap::Parser,
  rand::{RngCore, SeedableRng},
  std::path::PathBuf,
  tracing::info,
  tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter}
};

/// Pack N non-overlapping circles of radius r into an L x L square.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  /// Number of circles
  #[arg(short = 'n', long = "count", default_value_t = 1000)]
  n: usize,
  /// Radius of each circle
  #[arg(short, long, default_value_t = 1.0)]
  radius: f64,
  /// Side length of the square
  #[arg(short = 'l', long, default_value_t = 200.0)]
  side: f64,
  /// RNG seed, drawn from OS entropy if omitted
  #[arg(long)]
  seed: Option<u64>,

  /// Initial upper bound of the split spread search
  #[arg(long, default_value_t = SigmaSearch::default().sigma_max)]
  sigma_max: f64,
  /// Spread search tolerance
  #[arg(long, default_value_t = SigmaSearch::default().eps)]
  eps: f64,
  /// Maximum number of partition attempts
  #[arg(long, default_value_t = SigmaSearch::default().max_iterations)]
  max_iterations: u32,

  /// Rectangle list destination
  #[arg(long, default_value = "output_rects.txt")]
  rects_file: PathBuf,
  /// Circle center list destination
  #[arg(long, default_value = "output_circles.txt")]
  circles_file: PathBuf,
  #[arg(long)]
  no_rects_file: bool,
  #[arg(long)]
  no_circles_file: bool,
  #[arg(long)]
  no_rects_console: bool,
  #[arg(long)]
  no_circles_console: bool,

  /// Render the packing to a PNG image
  #[cfg(feature = "drawing")]
  #[arg(long)]
  png: Option<PathBuf>,
  /// Side of the rendered image in pixels
  #[cfg(feature = "drawing")]
  #[arg(long, default_value_t = 2048)]
  png_resolution: u32,
}

impl Cli {
  fn packing_config(&self) -> PackingConfig {
    PackingConfig::new(self.n, self.radius, self.side)
      .with_search(SigmaSearch::default()
        .with_sigma_max(self.sigma_max)
        .with_eps(self.eps)
        .with_max_iterations(self.max_iterations))
  }

  fn output_config(&self) -> OutputConfig {
    OutputConfig {
      rects_console: !self.no_rects_console,
      circles_console: !self.no_circles_console,
      rects_file: (!self.no_rects_file).then(|| self.rects_file.clone()),
      circles_file: (!self.no_circles_file).then(|| self.circles_file.clone()),
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let cli = Cli::parse();
  let config = cli.packing_config();
  config.validate().context("invalid packing parameters")?;

  let seed = cli.seed.unwrap_or_else(|| rand_pcg::Pcg64::from_entropy().next_u64());
  info!(n = config.n, radius = config.radius, side = config.side, seed, "packing");
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);

  let packing = profile!("pack", solver::pack(&config, &mut rng))?;

  let stdout = std::io::stdout();
  let mut console = stdout.lock();
  if !output::report(&packing, &cli.output_config(), &mut console)
    .context("failed to write packing")? {
    return Ok(());
  }

  #[cfg(feature = "drawing")]
  if let Some(path) = &cli.png {
    circle_packing::drawing::save_png(&packing, cli.png_resolution, path)
      .with_context(|| format!("failed to save {}", path.display()))?;
  }

  Ok(())
}
