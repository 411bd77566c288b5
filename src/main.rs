mod logger;

use anyhow::{anyhow, Context, Result};
use gl3w_gen::{Generator, HttpDownloader};
use pico_args::Arguments;
use std::path::PathBuf;

fn print_help() {
    print!(
        r#"Generates GL/gl3w.h, a single-header OpenGL core profile loader.

List of available options:
    --help              Print this help
    -r, --root DIR      Directory to place GL/glcorearb.h and GL/gl3w.h in (default .)
    -v, --verbose       List every entry point written to the header
"#
    );
}

fn main() -> Result<()> {
    // Process CLI
    let mut pargs = Arguments::from_env();
    if pargs.contains("--help") {
        print_help();
        return Ok(());
    }
    let verbose = pargs.contains(["-v", "--verbose"]);
    let root: PathBuf = pargs
        .opt_value_from_str(["-r", "--root"])?
        .unwrap_or_else(|| PathBuf::from("."));

    // Finish args
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unknown arguments {:?}", remaining));
    }

    // Initialize logging
    log::set_logger(&logger::Logger)
        .map_err(|e| eprintln!("{}\nFailed to initialize logger. Going without.", e))
        .ok();
    log::set_max_level(log::LevelFilter::Info);

    let generator = Generator::new(root);
    let downloader = HttpDownloader::new().context("Failed to set up the HTTP client")?;
    let summary = generator.run(&downloader).with_context(|| {
        format!(
            "Failed to generate {} from {}",
            generator.header_path().display(),
            generator.url()
        )
    })?;

    // Info level, release builds compile out anything finer
    if verbose {
        for name in &summary.names {
            log::info!("{}", name);
        }
    }

    log::info!(
        "Generated {} with {} entry points{}",
        summary.header.display(),
        summary.names.len(),
        if summary.reused {
            " (reused local API description)"
        } else {
            ""
        }
    );

    Ok(())
}
