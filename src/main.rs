use clap::{Parser, Subcommand};
use std::path::PathBuf;

use catalog_labeler::commands;
use catalog_labeler::config::{
    PrepareConfig, DEFAULT_CATEGORY_DEPTH, DEFAULT_INPUT_DIR, DEFAULT_MIN_PRODUCTS,
    DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_RATE,
};

// ============ CLI ============
#[derive(Parser)]
#[command(name = "catalog-labeler")]
#[command(version)]
#[command(about = "Builds fastText category training data from product catalog XML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes `__label__<category> <tokens>` lines from the catalog
    Prepare {
        /// The directory containing product data
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,
        /// The file to output to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
        /// The rate at which to sample input records
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: f64,
        /// The minimum number of products per category
        #[arg(long, default_value_t = DEFAULT_MIN_PRODUCTS)]
        min_products: usize,
        /// The maximum depth when choosing a category
        #[arg(long, default_value_t = DEFAULT_CATEGORY_DEPTH)]
        category_depth: usize,
        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Prints the category distribution without writing a dataset
    Categories {
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MIN_PRODUCTS)]
        min_products: usize,
        #[arg(long, default_value_t = DEFAULT_CATEGORY_DEPTH)]
        category_depth: usize,
        /// Number of categories to list
        #[arg(long, default_value = "50")]
        top: usize,
        /// Also write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare {
            input,
            output,
            sample_rate,
            min_products,
            category_depth,
            seed,
        } => {
            let config = PrepareConfig::new()
                .with_input_dir(input)
                .with_output_path(output)
                .with_sample_rate(sample_rate)
                .with_min_products(min_products)
                .with_category_depth(category_depth)
                .with_seed(seed);
            commands::prepare::execute(&config)
        }
        Commands::Categories {
            input,
            min_products,
            category_depth,
            top,
            json,
        } => commands::categories::execute(&input, min_products, category_depth, top, json.as_ref())
            .map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
