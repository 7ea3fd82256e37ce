use crate::config::SeedConfig;
use aws_sdk_dynamodb::types::TableStatus;
use shared::core::{MovieRecord, MovieRepository, StoreError};

/// Creates the table, waits for it to become active and writes `movies` in
/// order. Not idempotent: a second run fails with `TableAlreadyExists`, and a
/// failed write leaves the earlier ones in place.
pub(crate) async fn seed<R: MovieRepository>(
    movie_repo: &R,
    config: &SeedConfig,
    movies: Vec<MovieRecord>,
) -> Result<(), StoreError> {
    movie_repo
        .create_table(config.read_capacity_units, config.write_capacity_units)
        .await?;
    let status = wait_for_table_active(movie_repo, config).await?;
    tracing::info!("Table status: {}", status.as_str());

    for movie in movies {
        tracing::info!(
            year = movie.year.as_deref().unwrap_or_default(),
            title = movie.title.as_deref().unwrap_or_default(),
            "Adding movie"
        );
        movie_repo.put_movie(movie).await?;
    }

    Ok(())
}

async fn wait_for_table_active<R: MovieRepository>(
    movie_repo: &R,
    config: &SeedConfig,
) -> Result<TableStatus, StoreError> {
    for attempt in 1..=config.wait_max_attempts {
        if let Some(status) = movie_repo.table_status().await? {
            if status == TableStatus::Active {
                return Ok(status);
            }
            tracing::debug!(attempt, "Table is {}", status.as_str());
        }
        if attempt < config.wait_max_attempts {
            tokio::time::sleep(config.wait_delay()).await;
        }
    }

    Err(StoreError::TableNotActive {
        table_name: config.table_name.clone(),
        attempts: config.wait_max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::{always, eq, function};
    use mockall::Sequence;
    use shared::core::MockMovieRepository;
    use shared::seed_data::seed_movies;

    fn config() -> SeedConfig {
        SeedConfig {
            wait_delay_secs: 0,
            wait_max_attempts: 3,
            ..SeedConfig::default()
        }
    }

    #[tokio::test]
    async fn when_table_becomes_active_should_write_every_movie_in_order() {
        let mut seq = Sequence::new();
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_create_table()
            .with(eq(10_i64), eq(10_i64))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        movie_repo
            .expect_table_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(None));
        movie_repo
            .expect_table_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Some(TableStatus::Creating)));
        movie_repo
            .expect_table_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(Some(TableStatus::Active)));
        for expected in seed_movies() {
            movie_repo
                .expect_put_movie()
                .with(eq(expected))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let result = seed(&movie_repo, &config(), seed_movies()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn when_table_already_exists_should_not_write() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_create_table()
            .times(1)
            .returning(|_, _| Err(StoreError::TableAlreadyExists("Movies".to_string())));
        movie_repo.expect_table_status().times(0);
        movie_repo.expect_put_movie().times(0);

        let result = seed(&movie_repo, &config(), seed_movies()).await;

        assert!(matches!(result, Err(StoreError::TableAlreadyExists(_))));
    }

    #[tokio::test]
    async fn when_table_never_active_should_give_up_after_max_attempts() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_create_table()
            .times(1)
            .returning(|_, _| Ok(()));
        movie_repo
            .expect_table_status()
            .times(3)
            .returning(|| Ok(Some(TableStatus::Creating)));
        movie_repo.expect_put_movie().times(0);

        let result = seed(&movie_repo, &config(), seed_movies()).await;

        assert!(matches!(
            result,
            Err(StoreError::TableNotActive { attempts: 3, .. })
        ));
    }

    #[tokio::test]
    async fn when_write_fails_should_stop_and_keep_earlier_writes() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo
            .expect_create_table()
            .times(1)
            .returning(|_, _| Ok(()));
        movie_repo
            .expect_table_status()
            .times(1)
            .returning(|| Ok(Some(TableStatus::Active)));
        movie_repo
            .expect_put_movie()
            .with(function(|movie: &MovieRecord| {
                movie.year.as_deref() == Some("1993")
            }))
            .times(1)
            .returning(|_| Ok(()));
        movie_repo
            .expect_put_movie()
            .with(always())
            .times(1)
            .returning(|_| Err(StoreError::PutItem("throttled".to_string())));

        let result = seed(&movie_repo, &config(), seed_movies()).await;

        assert!(matches!(result, Err(StoreError::PutItem(_))));
    }
}
