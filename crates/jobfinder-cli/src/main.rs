use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use jobfinder_cache::{CacheConfig, RedisCache};
use jobfinder_core::traits::JobCache;
use jobfinder_core::{ApplicantService, JobLookupService, full_slug, slugify};

#[derive(Parser)]
#[command(name = "jobfinder", version, about = "Inspect the cached job board")]
struct Cli {
    /// Redis connection URL
    #[arg(long, global = true, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    redis_url: String,

    /// List key holding the category registry
    #[arg(long, global = true, env = "JOBFINDER_REGISTRY_KEY", default_value = "categories")]
    registry_key: String,

    /// Prefix of applicant counter keys
    #[arg(long, global = true, env = "JOBFINDER_COUNTER_PREFIX", default_value = "applicants:")]
    counter_prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category registry in order
    Categories,

    /// Print job collections as JSON
    Jobs {
        /// Only this category (fails if it has no data)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print one job with its applicant count
    Show {
        /// Job identifier: <category>--<title-slug>
        id: String,
    },

    /// Record an application and print the updated job
    Apply {
        /// Job identifier: <category>--<title-slug>
        id: String,
    },

    /// Print the slug of a title, or its full identifier with --category
    Slug {
        title: String,

        #[arg(short, long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jobfinder=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CacheConfig {
        url: cli.redis_url,
        registry_key: cli.registry_key,
        counter_prefix: cli.counter_prefix,
    };

    match cli.command {
        Commands::Categories => {
            let cache = connect(&config).await?;
            for key in cache.list_registry().await? {
                println!("{key}");
            }
        }
        Commands::Jobs { category } => {
            let lookup = JobLookupService::new(connect(&config).await?);
            let collections = match category {
                Some(category) => lookup.list_jobs_by_category(&category).await?,
                None => lookup.list_all_jobs().await?,
            };
            print_json(&serde_json::to_value(collections)?)?;
        }
        Commands::Show { id } => {
            let job = ApplicantService::new(connect(&config).await?)
                .get_job(&id)
                .await?;
            print_json(&serde_json::to_value(job)?)?;
        }
        Commands::Apply { id } => {
            let job = ApplicantService::new(connect(&config).await?)
                .apply_to_job(&id)
                .await?;
            tracing::info!(%id, applicants = job.applicants, "Applied");
            print_json(&serde_json::to_value(job)?)?;
        }
        Commands::Slug { title, category } => {
            println!("{}", render_slug(&title, category.as_deref())?);
        }
    }

    Ok(())
}

async fn connect(config: &CacheConfig) -> Result<RedisCache> {
    RedisCache::connect(config)
        .await
        .with_context(|| format!("Failed to connect to {}", config.url))
}

fn render_slug(title: &str, category: Option<&str>) -> Result<String> {
    match category {
        None => Ok(slugify(title)),
        Some(category) => full_slug(category, title).with_context(|| {
            format!("Category '{category}' cannot be used in a job identifier")
        }),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
