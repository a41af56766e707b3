use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use perlin::config::{AxisValue, FractalParams, NoiseConfig};
use perlin::{Perlin, Result};

/// Lattice cells spanned by a preview, matching the 256-cell hash period.
const SPAN: f64 = 256.0;
const FIELD_FREQUENCY: f64 = 1.0 / 24.0;
const CURVE_FREQUENCY: f64 = 0.02;

fn install_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn preview_fractal() -> FractalParams {
    FractalParams {
        octaves: 5,
        persistence: 0.5,
        frequency: AxisValue::Uniform(1.0 / 32.0),
        lacunarity: AxisValue::Uniform(2.0),
        offset: AxisValue::Uniform(0.0),
        ..Default::default()
    }
}

fn gray(v: f64) -> [u8; 4] {
    let g = ((v + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8;
    [g, g, g, 255]
}

/// Grayscale image of `sample` over the preview span.
fn render_field(w: usize, h: usize, sample: impl Fn(f64, f64) -> Result<f64>) -> Result<Vec<u8>> {
    let mut rgba = vec![0u8; w * h * 4];
    for (y, row) in rgba.chunks_mut(w * 4).enumerate() {
        let py = y as f64 * (SPAN / h as f64);
        for x in 0..w {
            let px = x as f64 * (SPAN / w as f64);
            row[x * 4..x * 4 + 4].copy_from_slice(&gray(sample(px, py)?));
        }
    }
    Ok(rgba)
}

/// Line plot of `sample` on a white background, one column per pixel.
fn render_curve(w: usize, h: usize, sample: impl Fn(f64) -> Result<f64>) -> Result<Vec<u8>> {
    let mut rgba = vec![255u8; w * h * 4];
    let mid = h as f64 / 2.0;
    let amp = h as f64 / 4.0;
    let mut prev: Option<usize> = None;
    for x in 0..w {
        let y = (mid - sample(x as f64)? * amp).round().clamp(0.0, (h - 1) as f64) as usize;
        let (lo, hi) = match prev {
            Some(p) => (p.min(y), p.max(y)),
            None => (y, y),
        };
        for yy in lo..=hi {
            let i = (yy * w + x) * 4;
            rgba[i..i + 3].fill(0);
        }
        prev = Some(y);
    }
    Ok(rgba)
}

fn main() -> anyhow::Result<()> {
    install_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut config = match args.get(5) {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path))?;
            NoiseConfig::from_json(&json)?
        }
        None => NoiseConfig {
            fractal: preview_fractal(),
            ..Default::default()
        },
    };
    if let Some(seed) = args.get(1).and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }
    let width: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(512).max(1);
    let height: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(512).max(1);
    let out_dir: PathBuf = args
        .get(4)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    std::fs::create_dir_all(&out_dir).context("failed to create output directory")?;

    tracing::info!(
        seed = config.seed,
        smoothstep = %config.smoothstep,
        octaves = config.fractal.octaves,
        "rendering {}x{} previews",
        width,
        height
    );

    let perlin = Perlin::from_config(&config);
    let fbm1 = config.fractal.options::<1>()?;
    let fbm2 = config.fractal.options::<2>()?;
    let fbm3 = config.fractal.options::<3>()?;
    let fbm4 = config.fractal.options::<4>()?;
    // Fixed slice through the extra axes.
    let (z, w) = (SPAN / 3.0, SPAN / 5.0);
    let f = FIELD_FREQUENCY;

    let save = |name: &str, rgba: Vec<u8>| -> anyhow::Result<()> {
        let path = out_dir.join(name);
        image::save_buffer(&path, &rgba, width as u32, height as u32, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save {}", path.display()))?;
        tracing::info!("saved {}", path.display());
        Ok(())
    };

    save(
        "noise1d.png",
        render_curve(width, height, |x| Ok(perlin.noise1d(x * CURVE_FREQUENCY)))?,
    )?;
    save(
        "noise2d.png",
        render_field(width, height, |x, y| Ok(perlin.noise2d(x * f, y * f)))?,
    )?;
    save(
        "noise3d.png",
        render_field(width, height, |x, y| Ok(perlin.noise3d(x * f, y * f, z * f)))?,
    )?;
    save(
        "noise4d.png",
        render_field(width, height, |x, y| {
            Ok(perlin.noise4d(x * f, y * f, z * f, w * f))
        })?,
    )?;

    save(
        "fractal1d.png",
        render_curve(width, height, |x| perlin.fractal_noise1d(x, &fbm1))?,
    )?;
    save(
        "fractal2d.png",
        render_field(width, height, |x, y| perlin.fractal_noise2d(x, y, &fbm2))?,
    )?;
    save(
        "fractal3d.png",
        render_field(width, height, |x, y| perlin.fractal_noise3d(x, y, z, &fbm3))?,
    )?;
    save(
        "fractal4d.png",
        render_field(width, height, |x, y| perlin.fractal_noise4d(x, y, z, w, &fbm4))?,
    )?;

    tracing::info!("done");
    Ok(())
}
