use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use brandgraph::config::Config;
use brandgraph::db::Database;
use brandgraph::mapping::models::ManufacturerRelation;

/// brandgraph: infer manufacturer hierarchies from cross-source product matches.
///
/// Builds a manufacturer graph from matched product listings, labels each
/// edge parent / child / sibling, and flags suspicious manufacturer names.
#[derive(Parser)]
#[command(name = "brandgraph", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Load product and match files, infer relations, save and validate them
    Map {
        /// Directory holding the CSV inputs (overrides BRANDGRAPH_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Number of product files to load in parallel (overrides BRANDGRAPH_CONCURRENCY)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Infer and validate without writing to the database
        #[arg(long)]
        no_save: bool,
    },

    /// List stored manufacturer relations
    Relations {
        /// Only show this manufacturer (exact name)
        #[arg(long)]
        manufacturer: Option<String>,

        /// Print the relations as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate the stored relations and list suspicious manufacturers
    Validate,

    /// Find the known brand contained in a product title
    Brand {
        /// Product title to look up
        title: String,
    },

    /// Show system status (DB stats, last run)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load()?;
    brandgraph::logging::init(&config)?;

    match cli.command {
        Commands::Init => {
            info!("Initializing brandgraph database...");
            let db = brandgraph::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: put your CSV files in {}", config.data_dir.display());
            println!("Then run: brandgraph map");
        }

        Commands::Map {
            data_dir,
            concurrency,
            no_save,
        } => {
            let config = config.with_overrides(data_dir.as_deref(), concurrency)?;

            println!(
                "Mapping manufacturers from {} ({} product files, {} concurrent)...",
                config.data_dir.display(),
                config.product_files.len(),
                config.concurrency
            );

            let db = if no_save {
                None
            } else {
                Some(brandgraph::db::initialize_sqlite(&config.db_path)?)
            };

            let summary =
                brandgraph::pipeline::mapping::run(&config, db.as_deref()).await?;

            brandgraph::output::terminal::display_summary(&summary);
            brandgraph::output::terminal::display_validation(&summary.validation);
        }

        Commands::Relations { manufacturer, json } => {
            let db = brandgraph::db::open_sqlite(&config.db_path)?;
            let relations = match manufacturer {
                Some(name) => match db.get_relation_for(&name).await? {
                    Some(relation) => vec![relation],
                    None => {
                        println!("No stored relations for manufacturer \"{name}\".");
                        return Ok(());
                    }
                },
                None => db.get_relations().await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&relations)?);
            } else {
                brandgraph::output::terminal::display_relations(&relations);
            }
        }

        Commands::Validate => {
            let db = brandgraph::db::open_sqlite(&config.db_path)?;
            let relations = load_relations(&db).await?;

            let result = brandgraph::validation::validate(&relations);
            brandgraph::validation::log_issues(result.issues());
            brandgraph::output::terminal::display_validation(&result);

            let flagged = result.flagged_manufacturers();
            if !flagged.is_empty() {
                println!("\n{}", "Flagged manufacturers:".bold());
                for name in &flagged {
                    println!("  {name}");
                }
            }
        }

        Commands::Brand { title } => {
            let db = brandgraph::db::open_sqlite(&config.db_path)?;
            let relations = load_relations(&db).await?;

            let mut assigner = brandgraph::brand::BrandAssigner::new(&relations);
            match assigner.assign_brand(&title) {
                Some(brand) => println!("Assigned brand for \"{title}\": {}", brand.bold()),
                None => println!("Assigned brand for \"{title}\": {}", "No brand assigned".dimmed()),
            }
            println!(
                "{}",
                format!("(checked against {} known brands)", assigner.brand_count()).dimmed()
            );
        }

        Commands::Status => {
            let db = brandgraph::db::open_sqlite(&config.db_path)?;
            brandgraph::status::show(&db, &config.db_path).await?;
        }
    }

    Ok(())
}

/// Load the stored relations, or bail with a helpful message if there are none.
async fn load_relations(db: &Arc<dyn Database>) -> Result<Vec<ManufacturerRelation>> {
    let relations = db.get_relations().await?;
    if relations.is_empty() {
        anyhow::bail!("No manufacturer relations stored. Run `brandgraph map` first.");
    }
    Ok(relations)
}
