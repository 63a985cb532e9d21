use png_hash_spoof::{batch, TargetPrefix, DEFAULT_MAX_ATTEMPTS};
use std::path::Path;

const USAGE: &str = "Usage: batch-spoof [-v] <target_hex> <input_dir> <output_dir>";

fn main() -> anyhow::Result<()> {
    let mut args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        args.remove(0);
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    let [target_hex, input_dir, output_dir] = args.as_slice() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };
    let target = TargetPrefix::parse(target_hex)?;

    let report = batch::run(
        &target,
        Path::new(input_dir),
        Path::new(output_dir),
        DEFAULT_MAX_ATTEMPTS,
    )?;
    println!(
        "Completed: {}, failed: {}",
        report.completed.len(),
        report.failed.len()
    );
    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
