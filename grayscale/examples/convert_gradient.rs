//! Converts a synthetic gradient with the configured converter and compares
//! it against the scalar reference.
//!
//! ```text
//! GRAYSCALE_CONVERTER=lane-dot RUST_LOG=debug cargo run -p grayscale --example convert_gradient
//! ```

use common::log_setup::setup_logging;
use grayscale::prelude::*;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn gradient(width: usize, height: usize) -> Vec<Argb> {
    (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let r = (x * 255 / (width - 1)) as u8;
                let g = (y * 255 / (height - 1)) as u8;
                let b = ((x + y) % 256) as u8;
                Argb::new(255 - b, r, g, b)
            })
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    setup_logging("info")?;

    let config = ConvertConfig::from_env()?;
    let converter = select_converter(&config)?;
    tracing::info!(converter = %converter.kind(), "Converting {}x{} gradient", WIDTH, HEIGHT);

    let input = PixelBuffer::from_pixels(gradient(WIDTH, HEIGHT));
    let started = std::time::Instant::now();
    let output = converter.convert(&input)?;
    let elapsed = started.elapsed();

    let reference = ScalarConverter.convert(&input)?;
    let (differing, max_deviation) = output
        .pixels()
        .iter()
        .zip(reference.pixels())
        .filter(|(actual, expected)| actual != expected)
        .fold((0usize, 0i32), |(count, max), (actual, expected)| {
            (count + 1, max.max((actual.r as i32 - expected.r as i32).abs()))
        });

    tracing::info!(
        pixels = output.pixel_count(),
        elapsed_us = elapsed.as_micros() as u64,
        differing,
        max_deviation,
        "Conversion done"
    );
    anyhow::ensure!(
        max_deviation <= 1,
        "{} deviates from the scalar reference by {}",
        converter.kind(),
        max_deviation
    );

    Ok(())
}
