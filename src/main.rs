use clap::Parser;
use photo_roster::{cli, config, crossref, export, pictures, resolver, roster};

use cli::{Cli, Commands};
use config::Config;
use crossref::CrossRefCache;
use photo_roster::error::Result;
use pictures::PictureIndex;
use resolver::{AutoReject, ConfirmMatch, PromptConfirm, ResolveStats, Resolver};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            roster,
            pictures,
            secondary,
            cache,
            output,
            title,
            threshold,
            non_interactive,
            no_save_decisions,
        } => {
            println!("📖 photo-roster - build photo book\n");

            let (records, resolutions, stats) = resolve_roster(
                &config,
                &roster,
                &pictures,
                secondary.as_deref(),
                &cache,
                threshold,
                non_interactive,
                no_save_decisions,
            )?;

            println!("- Generating PDF...");
            let title = title.unwrap_or_else(|| config.pdf_title.clone());
            export::generate_pdf(&records, &resolutions, &output, &title)?;
            println!("✔ PDF created: {}\n", output.display());

            print_summary(&stats);
            println!("\n✅ Done");
        }

        Commands::Resolve {
            roster,
            pictures,
            secondary,
            cache,
            threshold,
            non_interactive,
            no_save_decisions,
        } => {
            println!("🔍 photo-roster - resolution report\n");

            let (records, resolutions, stats) = resolve_roster(
                &config,
                &roster,
                &pictures,
                secondary.as_deref(),
                &cache,
                threshold,
                non_interactive,
                no_save_decisions,
            )?;

            println!("\nPer-record outcomes:");
            for (record, resolution) in records.iter().zip(&resolutions) {
                match resolution.path() {
                    Some(path) => println!(
                        "  {:<40} {:<10} {}",
                        record.name,
                        resolution.label(),
                        path.display()
                    ),
                    None => println!("  {:<40} {}", record.name, resolution.label()),
                }
            }

            println!();
            print_summary(&stats);
        }

        Commands::Cache { cache, clear, info } => {
            if info || !clear {
                if cache.exists() {
                    let loaded = CrossRefCache::load(&cache)?;
                    println!("Cache info:");
                    println!("  path: {}", cache.display());
                    println!("  entries: {}", loaded.len());
                    println!("  accepted: {}", loaded.accepted_count());
                    println!("  rejected: {}", loaded.rejected_count());
                    if let Ok(meta) = std::fs::metadata(&cache) {
                        println!("  size: {} bytes", meta.len());
                    }
                } else {
                    println!("Cache file does not exist: {}", cache.display());
                }
            }

            if clear {
                if cache.exists() {
                    std::fs::remove_file(&cache)?;
                    println!("✔ Cache deleted: {}", cache.display());
                } else {
                    println!("Cache file does not exist");
                }
            }
        }

        Commands::Config {
            set_threshold,
            set_title,
            show,
        } => {
            let mut config = config;

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                println!("✔ Fuzzy threshold set to {}", threshold);
            }

            if let Some(title) = set_title {
                config.set_title(title.clone())?;
                println!("✔ PDF title set to \"{}\"", title);
            }

            if show {
                println!("Configuration:");
                println!("  fuzzy threshold: {}", config.fuzzy_threshold);
                println!("  save decisions: {}", config.save_decisions);
                println!("  PDF title: {}", config.pdf_title);
            }
        }
    }

    Ok(())
}

/// Shared front half of `run` and `resolve`: load inputs, resolve every
/// record, write decisions back when enabled.
#[allow(clippy::too_many_arguments)]
fn resolve_roster(
    config: &Config,
    roster_path: &Path,
    primary_dir: &Path,
    secondary_dir: Option<&Path>,
    cache_path: &Path,
    threshold: Option<f64>,
    non_interactive: bool,
    no_save_decisions: bool,
) -> Result<(
    Vec<roster::RosterRecord>,
    Vec<resolver::Resolution>,
    ResolveStats,
)> {
    let secondary_dir = secondary_dir.unwrap_or(primary_dir);

    println!("- Loading roster...");
    let records = roster::load_roster(roster_path)?;
    println!("✔ {} people in roster\n", records.len());

    println!("- Loading cross-reference cache...");
    let mut cache = CrossRefCache::load(cache_path)?;
    println!("✔ {} cached decisions\n", cache.len());

    println!("- Resolving photos...");
    let index = PictureIndex::build(secondary_dir);
    println!("  {} candidate pictures", index.len());

    let threshold = threshold.unwrap_or(config.fuzzy_threshold);
    // Auto-declined candidates are not human decisions; never persist them
    let record_decisions = config.save_decisions && !no_save_decisions && !non_interactive;

    let confirm: Box<dyn ConfirmMatch> = if non_interactive {
        Box::new(AutoReject)
    } else {
        Box::new(PromptConfirm)
    };

    let mut resolver = Resolver::new(
        primary_dir,
        secondary_dir,
        &index,
        &mut cache,
        threshold,
        record_decisions,
        confirm,
    );
    let (resolutions, stats) = resolver.resolve_all(&records)?;
    println!("✔ Resolution complete\n");

    if cache.is_dirty() {
        cache.save(cache_path)?;
        println!("✔ Decisions saved: {}\n", cache_path.display());
    }

    Ok((records, resolutions, stats))
}

fn print_summary(stats: &ResolveStats) {
    println!("Total records: {}", stats.total);
    println!("With photo: {}/{}", stats.with_photo(), stats.total);
    println!("  - from primary: {}", stats.primary);
    println!("  - from secondary: {}", stats.secondary);
    println!(
        "Without photo: {} ({} rejected, {} unmatched)",
        stats.rejected + stats.unmatched,
        stats.rejected,
        stats.unmatched
    );
}
