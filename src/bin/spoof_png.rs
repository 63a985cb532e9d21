use anyhow::Context;
use png_hash_spoof::{spoof, TargetPrefix};
use sha2::{Digest, Sha256};

const USAGE: &str = "Usage: spoof-png [-v] <target_hex> <input_image> <output_image>";

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

    let [target_hex, input_path, output_path] = args.as_slice() else {
        eprintln!("{USAGE}");
        eprintln!("Example: spoof-png 0x24 original.png altered.png");
        std::process::exit(1);
    };
    let target = TargetPrefix::parse(target_hex)?;

    let input = std::fs::read(input_path).context(format!("Failed to read {input_path}"))?;
    log::info!("Starting hash spoofing for target: {target_hex}");
    let output = spoof(&target, &input)?;
    std::fs::write(output_path, &output).context(format!("Failed to write {output_path}"))?;

    let written = std::fs::read(output_path).context(format!("Failed to read back {output_path}"))?;
    log::info!("Verification hash: {:x}", Sha256::digest(&written));
    println!("Successfully created image with hash prefix {target_hex}");
    Ok(())
}
