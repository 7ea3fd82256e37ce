use lambda_http::RequestExt;
use lambda_http::{http::StatusCode, tracing, Error, IntoResponse, Request};
use serde_json::json;
use shared::core::{MovieRepository, MovieSummary};
use shared::utils::{json_response, pretty_json_response};

const MISSING_YEAR_MESSAGE: &str = "Year parameter is required and cannot be blank.";

pub(crate) struct HandlerDeps<R: MovieRepository> {
    pub movie_repo: R,
}

#[tracing::instrument(skip(deps, event))]
pub(crate) async fn function_handler<R: MovieRepository>(
    deps: &HandlerDeps<R>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    let query_params = event.query_string_parameters();
    let year = match query_params.first("year") {
        Some(year) if !year.trim().is_empty() => year,
        _ => {
            tracing::warn!("Rejecting request without a usable year parameter");
            return json_response(
                &StatusCode::BAD_REQUEST,
                &json!({ "error": MISSING_YEAR_MESSAGE }),
            );
        }
    };

    match deps.movie_repo.find_movies_by_year(year).await {
        Ok(movies) if movies.is_empty() => json_response(
            &StatusCode::NOT_FOUND,
            &json!({ "message": format!("No movies found for the year {}.", year) }),
        ),
        Ok(movies) => {
            let movies: Vec<MovieSummary> = movies.into_iter().map(MovieSummary::from).collect();
            pretty_json_response(&StatusCode::OK, &movies)
        }
        Err(e) => {
            tracing::error!("Failed to query movies for year {}: {:?}", year, e);
            json_response(
                &StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": e.to_string() }),
            )
        }
    }
}
