use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use cardshelf_core::{load_app_config, load_catalog_config, AppConfig, CatalogConfig, Item};
use cardshelf_engine::sample::featured_weight;
use cardshelf_engine::{
    build_category_list, normalize_rows, paginate, run_query, sample_featured, PriceRange,
    SortKey, ViewQuery,
};

use cardshelf_cli::render;
use cardshelf_cli::sheet::{load_collection, SheetClient};

#[derive(Debug, Parser)]
#[command(name = "cardshelf")]
#[command(about = "Card inventory dashboard over published sheet exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the category tabs for the loaded collection.
    Categories,
    /// List items, filtered, sorted, and paged.
    List {
        #[arg(long, default_value = "All")]
        category: String,
        /// Filter on collection set, exact match ignoring case.
        #[arg(long)]
        set: Option<String>,
        /// Case-insensitive substring match on item names.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        /// One of: name-asc, name-desc, price-asc, price-desc.
        #[arg(long, default_value = "name-asc", value_parser = parse_sort)]
        sort: SortKey,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Overrides the configured page size.
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Draw a price-weighted random selection of featured items.
    Featured {
        /// Overrides the configured featured count.
        #[arg(long)]
        count: Option<usize>,
        /// Seed the draw for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    match raw {
        "name-asc" => Ok(SortKey::NameAsc),
        "name-desc" => Ok(SortKey::NameDesc),
        "price-asc" => Ok(SortKey::PriceAsc),
        "price-desc" => Ok(SortKey::PriceDesc),
        other => Err(format!(
            "unknown sort \"{other}\" (expected name-asc, name-desc, price-asc, or price-desc)"
        )),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(app_config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = load_catalog_config(&app_config.catalog_path).with_context(|| {
        format!(
            "loading catalog config from {}",
            app_config.catalog_path.display()
        )
    })?;

    let cli = Cli::parse();
    let items = load_items(&app_config, &catalog).await?;

    match cli.command {
        Commands::Categories => {
            let categories = build_category_list(&items, &catalog.priority_categories);
            println!("{}", render::render_categories(&categories));
        }
        Commands::List {
            category,
            set,
            search,
            min_price,
            max_price,
            sort,
            page,
            page_size,
        } => {
            let price_range = (min_price.is_some() || max_price.is_some()).then(|| {
                PriceRange::new(
                    min_price.unwrap_or(0.0),
                    max_price.unwrap_or(f64::INFINITY),
                )
            });
            let query = ViewQuery {
                category: Some(category),
                collection_set: set,
                search_text: search,
                price_range,
                sort,
            };
            let matched = run_query(&items, &query);
            let page = paginate(
                &matched,
                page_size.unwrap_or(catalog.default_page_size),
                page,
            );
            println!("{}", render::render_page(&page, matched.len()));
        }
        Commands::Featured { count, seed } => {
            let count = count.unwrap_or(catalog.featured_count);
            let featured = match seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    sample_featured(&items, count, featured_weight, &mut rng)
                }
                None => sample_featured(&items, count, featured_weight, &mut rng()),
            };
            println!("{}", render::render_featured(&featured));
        }
    }

    Ok(())
}

/// Fetches all configured sources and normalizes the rows into items.
async fn load_items(app_config: &AppConfig, catalog: &CatalogConfig) -> anyhow::Result<Vec<Item>> {
    let client = SheetClient::new(app_config.fetch_timeout_secs)?;
    let rows = load_collection(&client, app_config).await;
    let items = normalize_rows(&rows, &catalog.alias_table());

    let categories = build_category_list(&items, &catalog.priority_categories);
    let total_value: f64 = items.iter().map(Item::market_value).sum();
    tracing::info!(
        items = items.len(),
        categories = categories.len(),
        total_value = format_args!("{total_value:.2}"),
        "collection loaded"
    );
    Ok(items)
}
