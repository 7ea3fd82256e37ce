use crate::core::MovieRecord;

pub fn seed_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(
            "1993",
            "Jurassic Park",
            "Adventure/Sci-fi",
            "8.2",
            "https://python-project-jp-movie-posters.s3.amazonaws.com/jp1.jpg",
        ),
        MovieRecord::new(
            "1997",
            "The Lost World: Jurassic Park",
            "Sci-fi/Action",
            "6.6",
            "https://python-project-jp-movie-posters.s3.amazonaws.com/jp2.jpg",
        ),
        MovieRecord::new(
            "2001",
            "Jurassic Park III",
            "Sci-fi/Action",
            "5.9",
            "https://python-project-jp-movie-posters.s3.amazonaws.com/jp3.jpg",
        ),
        MovieRecord::new(
            "2015",
            "Jurassic World",
            "Action/Sci-fi",
            "6.9",
            "https://python-project-jp-movie-posters.s3.amazonaws.com/jw1.jpg",
        ),
        MovieRecord::new(
            "2018",
            "Jurassic World: Fallen Kingdom",
            "Action/Sci-fi",
            "6.1",
            "https://python-project-jp-movie-posters.s3.amazonaws.com/jw2.png",
        ),
        MovieRecord::new(
            "2022",
            "Jurassic World Dominion",
            "Action/Sci-Fi",
            "5.6",
            "https://puthon-project-jp-movie-posters.s3.amazonaws.com/jw3.jpeg",
        ),
    ]
}
