use crate::http_handler::{function_handler, HandlerDeps};
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbMovieRepository;
use shared::configuration::Configuration;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let config = Configuration::load()?;
    tracing::info!("{}", config);
    let movie_repo = DynamoDbMovieRepository::new(config.table_name, dynamodb_client);
    let deps = HandlerDeps { movie_repo };

    run(service_fn(|event| function_handler(&deps, event))).await
}
