use keypad_digits::binarize::{preprocess, RasterSource};
use keypad_digits::config::sweep::{self, SweepToolConfig};
use keypad_digits::image::io::{save_binary_image, write_json_file};
use keypad_digits::sweep::{SweepReport, SweepResult, SweepRunner};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = sweep::load_config(Path::new(&config_path))?;

    let source = RasterSource::open(&config.input);
    let runner = SweepRunner::new(config.sweep.clone());
    let report = runner
        .run(&source, &config.crop_boxes, &config.expected_code)
        .map_err(|e| e.to_string())?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }
    if let Some(dir) = &config.output.binary_dir {
        save_binarized(dir, &source, &config)?;
        println!("Binarized rasters written to {}", dir.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: keypad_sweep <config.json>".to_string()
}

fn print_text_summary(report: &SweepReport) {
    println!("Digit recognition sweep (expected {})", report.expected_code);
    println!("  configurations: {}", report.results.len());
    println!("  perfect: {}", report.perfect_count());
    println!("  failed paths: {}", report.failures.len());
    println!(
        "  elapsed_ms: {:.1} (pairs {:.1})",
        report.timing.total_ms,
        report.timing.stage_sum_ms()
    );

    for failure in &report.failures {
        println!(
            "  skipped {} T{:3}: {}",
            failure.preprocessing, failure.threshold, failure.message
        );
    }

    println!("\nBest per preprocessing variant:");
    for result in report.best_per_variant() {
        println!("  {}", result_line(result));
    }

    println!(
        "\nTop results (first {}, accuracy >= {:.0}%):",
        report.top_n, report.accuracy_floor
    );
    for (rank, result) in report.top().iter().enumerate() {
        println!("  {:2}. {}", rank + 1, result_line(result));
        println!("      {}", result.details.join("  "));
    }
}

fn result_line(result: &SweepResult) -> String {
    let c = &result.config;
    format!(
        "{:17} | {:8} | T{:3} (eff {:3}) H{:2} | code {} ({:5.1}%, {})",
        c.preprocessing.label(),
        c.hole_counting.label(),
        c.threshold,
        c.effective_threshold,
        c.min_hole_size,
        result.code,
        result.accuracy,
        result.tier
    )
}

fn save_binarized(
    dir: &Path,
    source: &RasterSource,
    config: &SweepToolConfig,
) -> Result<(), String> {
    for &variant in &config.sweep.variants {
        for &threshold in &config.sweep.thresholds {
            let Ok(pre) = preprocess(source, &config.crop_boxes, variant, threshold) else {
                continue;
            };
            let name = format!("{variant:?}_t{threshold}.png").to_lowercase();
            save_binary_image(&pre.binary, &dir.join(name))?;
        }
    }
    Ok(())
}
