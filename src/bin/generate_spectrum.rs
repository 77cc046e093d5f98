use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Width (σ) of every absorption line, in Angstroms.
const LINE_SIGMA: f64 = 4.0;
/// σ of the normal distribution line depths are drawn from.
const DEPTH_SIGMA: f64 = 0.1;

const OUTPUT_PATH: &str = "misc/arrays.dat";

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Params {
    start: f64,
    end: f64,
    resolution: usize,
    lines: usize,
    seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            start: 900.0,
            end: 2900.0,
            resolution: 2048,
            lines: 99,
            seed: 42,
        }
    }
}

impl Params {
    /// Parse `start end resolution lines [seed]`, whitespace separated.
    fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if !(4..=5).contains(&tokens.len()) {
            bail!(
                "expected 'start end resolution lines [seed]', got {} values",
                tokens.len()
            );
        }

        let params = Params {
            start: tokens[0]
                .parse()
                .with_context(|| format!("start '{}' is not a number", tokens[0]))?,
            end: tokens[1]
                .parse()
                .with_context(|| format!("end '{}' is not a number", tokens[1]))?,
            resolution: tokens[2]
                .parse()
                .with_context(|| format!("resolution '{}' is not a count", tokens[2]))?,
            lines: tokens[3]
                .parse()
                .with_context(|| format!("lines '{}' is not a count", tokens[3]))?,
            seed: match tokens.get(4) {
                Some(tok) => tok
                    .parse()
                    .with_context(|| format!("seed '{tok}' is not an integer"))?,
                None => Params::default().seed,
            },
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            bail!(
                "wavelength bounds must be finite, got {}..{}",
                self.start,
                self.end
            );
        }
        if !(self.start >= 0.0) {
            bail!("wavelength start must be non-negative, got {}", self.start);
        }
        if !(self.end > self.start) {
            bail!(
                "wavelength end ({}) must be greater than start ({})",
                self.end,
                self.start
            );
        }
        if self.resolution == 0 {
            bail!("resolution must be greater than zero");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Spectrum synthesis
// ---------------------------------------------------------------------------

/// Fraction of the continuum removed at `w` by one line.
fn line_profile(w: f64, centre: f64, depth: f64) -> f64 {
    let z = (w - centre) / LINE_SIGMA;
    depth * (-0.5 * z * z).exp()
}

/// `n` evenly spaced points from `start`, stepping `(end - start) / n`.
/// `end` itself is excluded.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / n as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Draw `(centre, depth)` for each absorption line.
fn draw_lines<R: Rng>(params: &Params, rng: &mut R) -> Result<Vec<(f64, f64)>> {
    let depth_dist =
        Normal::new(0.0, DEPTH_SIGMA).map_err(|e| anyhow!("line depth distribution: {e}"))?;
    let depths: Vec<f64> = (0..params.lines)
        .map(|_| depth_dist.sample(rng).abs().min(1.0))
        .collect();
    Ok(depths
        .into_iter()
        .map(|depth| (rng.random_range(params.start..params.end), depth))
        .collect())
}

/// Continuum of 1.0 multiplied by one Gaussian dip per line.
fn absorption_spectrum(wavelengths: &[f64], lines: &[(f64, f64)]) -> Vec<f64> {
    wavelengths
        .iter()
        .map(|&w| {
            lines
                .iter()
                .map(|&(centre, depth)| 1.0 - line_profile(w, centre, depth))
                .product()
        })
        .collect()
}

fn generate(params: &Params) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let lines = draw_lines(params, &mut rng)?;
    let wavelengths = linspace(params.start, params.end, params.resolution);
    let spectrum = absorption_spectrum(&wavelengths, &lines);
    Ok((wavelengths, spectrum))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn write_data(path: &Path, wavelengths: &[f64], spectrum: &[f64]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    writeln!(file, "# data file from generate_spectrum")?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["wavelengths", "spectrum"])?;
    for (w, s) in wavelengths.iter().zip(spectrum) {
        writer.write_record([format!("{w:.10}"), format!("{s:.10}")])?;
    }
    writer.flush().context("flushing data file")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading parameters from {path}"))?;
            Params::parse(&text).with_context(|| format!("parsing {path}"))?
        }
        None => Params::default(),
    };
    log::debug!("generating with {params:?}");

    let started = Instant::now();
    let (wavelengths, spectrum) = generate(&params)?;
    let elapsed = started.elapsed();

    println!("Generated in {:.3} seconds.", elapsed.as_secs_f64());

    write_data(Path::new(OUTPUT_PATH), &wavelengths, &spectrum)?;

    println!(
        "Wrote {} points with {} absorption lines to {OUTPUT_PATH}",
        wavelengths.len(),
        params.lines
    );
    Ok(())
}
