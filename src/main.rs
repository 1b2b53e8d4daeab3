use anyhow::Context;
use city_faq::{
    application::{
        generate_faq::use_case::GenerateFaqUseCase,
        manage_faqs::{
            dto::{CreateFaqRequest, UpdateFaqRequest},
            use_case::FaqUseCase,
        },
        seed_city_faqs::use_case::{SeedCityFaqsUseCase, SeedOutcome},
    },
    config::Config,
    domain::{city::repository::CityRepository, faq::entity::FaqEntry},
    infrastructure::{
        database::pool::{create_pool, run_migrations},
        llm::openai_chat_provider::OpenAiChatProvider,
        repositories::{
            sqlx_city_repository::SqlxCityRepository, sqlx_faq_repository::SqlxFaqRepository,
        },
    },
};
use clap::{Parser, Subcommand};
use serde::{Serialize, de::DeserializeOwned};
use sqlx::PgPool;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Manage per-city FAQ documents and generate them with an LLM.
#[derive(Debug, Parser)]
#[command(name = "city-faq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate FAQs for a city name and print them without storing anything
    Generate { city_name: String },
    /// Generate FAQs for a stored city and merge them into its document
    Seed { city_id: String },
    /// Append the FAQ entries in FILE (a JSON array) to a city's document
    Add {
        city_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Insert a new FAQ document from FILE (`{"city_id": ..., "faqs": [...]}`)
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// List every FAQ document
    List,
    /// Show one FAQ document
    Get { id: String },
    /// Show the FAQ documents of a city
    ByCity { city_id: String },
    /// Apply the fields in FILE (`{"city_id"?: ..., "faqs"?: [...]}`) to a document
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a FAQ document
    Delete { id: String },
    /// List the cities FAQs can be seeded for
    Cities,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,city_faq=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Generate { city_name } => {
            let generator = build_generator(&config)?;
            match generator.execute(&city_name).await? {
                Some(entries) => print_json(&entries)?,
                None => tracing::warn!("Provider returned no FAQs for {}", city_name),
            }
        }
        Command::Seed { city_id } => {
            let (db, faqs) = connect(&config).await?;
            let seeder = SeedCityFaqsUseCase::new(
                Arc::new(SqlxCityRepository::new(db)),
                Arc::new(build_generator(&config)?),
                faqs,
            );
            match seeder.execute(&city_id).await? {
                SeedOutcome::Seeded(aggregate) => print_json(&aggregate)?,
                SeedOutcome::NothingGenerated => {
                    tracing::warn!("Nothing generated for city {}", city_id)
                }
            }
        }
        Command::Add { city_id, file } => {
            let entries: Vec<FaqEntry> = read_json_file(&file).await?;
            let (_, faqs) = connect(&config).await?;
            print_json(&faqs.add_faqs(&entries, &city_id).await?)?;
        }
        Command::Create { file } => {
            let request: CreateFaqRequest = read_json_file(&file).await?;
            let (_, faqs) = connect(&config).await?;
            print_json(&faqs.create_faq(request).await?)?;
        }
        Command::List => {
            let (_, faqs) = connect(&config).await?;
            print_json(&faqs.get_all_faqs().await?)?;
        }
        Command::Get { id } => {
            let (_, faqs) = connect(&config).await?;
            match faqs.get_faq_by_id(&id).await? {
                Some(aggregate) => print_json(&aggregate)?,
                None => anyhow::bail!("FAQ {} not found", id),
            }
        }
        Command::ByCity { city_id } => {
            let (_, faqs) = connect(&config).await?;
            print_json(&faqs.get_faqs_by_city_id(&city_id).await?)?;
        }
        Command::Update { id, file } => {
            let request: UpdateFaqRequest = read_json_file(&file).await?;
            let (_, faqs) = connect(&config).await?;
            match faqs.update_faq_by_id(&id, request).await? {
                Some(aggregate) => print_json(&aggregate)?,
                None => anyhow::bail!("FAQ {} not found", id),
            }
        }
        Command::Delete { id } => {
            let (_, faqs) = connect(&config).await?;
            faqs.delete_faq_by_id(&id).await?;
            tracing::info!("Deleted FAQ {}", id);
        }
        Command::Cities => {
            let (db, _) = connect(&config).await?;
            let cities = SqlxCityRepository::new(db).find_all().await?;
            print_json(&cities)?;
        }
    }

    Ok(())
}

async fn connect(config: &Config) -> anyhow::Result<(PgPool, FaqUseCase)> {
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&db, config.ignore_missing_migrations).await?;
    let faqs = FaqUseCase::new(Arc::new(SqlxFaqRepository::new(db.clone())));
    Ok((db, faqs))
}

fn build_generator(config: &Config) -> anyhow::Result<GenerateFaqUseCase> {
    let provider = OpenAiChatProvider::from_config(config)
        .context("OPENAI_API_KEY must be set to generate FAQs")?;
    Ok(GenerateFaqUseCase::new(Arc::new(provider), config.faq_count))
}

async fn read_json_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
