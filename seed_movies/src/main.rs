use crate::config::SeedConfig;
use crate::seeder::seed;
use shared::adapters::DynamoDbMovieRepository;
use shared::seed_data::seed_movies;
use tracing_subscriber::EnvFilter;

mod config;
mod seeder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::load()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let movie_repo = DynamoDbMovieRepository::new(config.table_name.clone(), dynamodb_client);

    if let Err(e) = seed(&movie_repo, &config, seed_movies()).await {
        tracing::error!("Failed to seed table {}: {}", movie_repo.table_name(), e);
        return Err(e.into());
    }
    tracing::info!("Seeded table {}", movie_repo.table_name());

    Ok(())
}
