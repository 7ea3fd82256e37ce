use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use shared::core::MovieRepository;
use shared::utils::json_response;

pub(crate) struct HandlerDeps<R: MovieRepository> {
    pub movie_repo: R,
}

#[tracing::instrument(skip(deps, event))]
pub(crate) async fn function_handler<R: MovieRepository>(
    deps: &HandlerDeps<R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    let movies = deps.movie_repo.list_movies().await.map_err(|e| {
        tracing::error!("Failed to list movies: {:?}", e);
        e
    })?;

    json_response(&StatusCode::OK, &movies)
}
