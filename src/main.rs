// SPDX-License-Identifier: MPL-2.0
use futures_util::future::join_all;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use studio_gallery::application::gallery::{FetchOutcome, GalleryLoader, ScrollMetrics};
use studio_gallery::application::port::{AssetSource, PhotoStore};
use studio_gallery::config::{self, Config};
use studio_gallery::domain::media::CategoryFilter;
use studio_gallery::error::Result;
use studio_gallery::infrastructure::{
    HttpAssetSource, InMemoryAssetSource, InMemoryPhotoStore, RestPhotoStore,
};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
studio-gallery: page through the studio portfolio

USAGE:
  studio-gallery [OPTIONS]

OPTIONS:
  --config PATH     Read settings from PATH instead of the default location
  --category NAME   all, portraits, events, weddings or extras [default: all]
  --pages N         Number of scroll triggers to simulate [default: 3]
  --offline         Use generated sample photos instead of the hosted store
  --export-log      Print the loader event log as JSON when done
  -h, --help        Print this help
";

/// Photos per category in offline mode.
const SAMPLE_PHOTOS_PER_CATEGORY: usize = 12;

struct Args {
    config: Option<PathBuf>,
    category: CategoryFilter,
    pages: u32,
    offline: bool,
    export_log: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        category: args
            .opt_value_from_fn("--category", str::parse::<CategoryFilter>)?
            .unwrap_or_default(),
        pages: args.opt_value_from_str("--pages")?.unwrap_or(3),
        offline: args.contains("--offline"),
        export_log: args.contains("--export-log"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => config::load_from_path(path)?,
        None => {
            let (config, warning) = config::load();
            if let Some(warning) = warning {
                tracing::warn!("{warning}");
            }
            config
        }
    };
    config.apply_env_overrides();
    Ok(config)
}

fn build_adapters(
    config: &Config,
    offline: bool,
) -> Result<(Arc<dyn PhotoStore>, Arc<dyn AssetSource>)> {
    if !offline {
        if let Some(rest) = config.store.rest_config() {
            tracing::info!(base_url = %rest.base_url, "using hosted photo store");
            let assets = HttpAssetSource::new(rest.timeout)?;
            let store = RestPhotoStore::new(rest)?;
            return Ok((Arc::new(store), Arc::new(assets)));
        }
        tracing::warn!("no store URL or key configured, falling back to sample photos");
    }

    Ok((
        Arc::new(InMemoryPhotoStore::with_sample_photos(
            SAMPLE_PHOTOS_PER_CATEGORY,
        )),
        Arc::new(InMemoryAssetSource::new()),
    ))
}

/// One line listing every filter, with the active one in brackets.
fn filter_bar(active: CategoryFilter) -> String {
    CategoryFilter::OPTIONS
        .iter()
        .map(|&option| {
            if option == active {
                format!("[{}]", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

async fn warm_cache(loader: &mut GalleryLoader) {
    let responses = join_all(loader.take_prefetch().into_iter().map(|asset| asset.resolve())).await;
    for response in responses {
        loader.store_prefetched(response);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let (store, assets) = build_adapters(&config, args.offline)?;

    let mut loader = GalleryLoader::new(store, assets, config.loader_settings());
    if args.category.is_active() {
        tracing::info!(category = %args.category, "filtering by category");
    }
    loader.set_category(args.category);
    println!("{}", filter_bar(loader.filter()));

    // Each trigger pretends the user reached the bottom of the grid
    let bottom = ScrollMetrics::new(0.0, 800.0, 0.0);
    for _ in 0..args.pages {
        let Some(pending) = loader.on_scroll(bottom) else {
            break;
        };
        let response = pending.resolve().await;
        let outcome = loader.handle_page(response);
        warm_cache(&mut loader).await;

        match outcome {
            FetchOutcome::Failed => {
                if let Some(message) = loader.view().error_message() {
                    eprintln!("{message}");
                }
                break;
            }
            FetchOutcome::Exhausted { .. } => break,
            FetchOutcome::Appended { .. } | FetchOutcome::Stale => {}
        }
    }

    if let Some(message) = loader.view().empty_message() {
        println!("{message}");
    }
    // `*` marks thumbnails already served from the prefetch cache
    for (index, item) in loader.items().to_vec().iter().enumerate() {
        let cached = if loader.prefetched(item.thumbnail_url()).is_some() {
            '*'
        } else {
            ' '
        };
        println!(
            "{index:>4} {cached} {:<10} {:<24} {}",
            item.category().label(),
            item.id(),
            item.thumbnail_url()
        );
    }

    if loader.open_viewer(0).is_some() {
        warm_cache(&mut loader).await;
    }

    let stats = loader.prefetch_stats();
    println!(
        "{} photos ({}), {} assets prefetched, {} bytes cached, {:.0}% cache hits",
        loader.items().len(),
        loader.filter().label(),
        stats.insertions,
        stats.total_bytes,
        stats.hit_rate()
    );

    if args.export_log {
        match loader.log().export_json() {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "failed to export event log"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
