//! Benchmarks for the recommendation engine
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a generated catalog so no input files are needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Movie, MovieParser, User};
use recommender::{CatalogIndex, Recommender};
use std::io::Cursor;

const GENRES: [&str; 8] = [
    "action", "comedy", "drama", "horror", "romance", "thriller", "animation", "crime",
];

fn generate_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| {
            let genres = vec![
                GENRES[i % GENRES.len()].to_string(),
                GENRES[(i / 3) % GENRES.len()].to_string(),
            ];
            Movie::new(format!("Movie {i}"), format!("M{i:03}"), genres)
        })
        .collect()
}

fn generate_users(count: usize, catalog_size: usize) -> Vec<User> {
    (0..count)
        .map(|u| {
            let liked = (0..5)
                .map(|k| format!("M{:03}", (u * 7 + k * 13) % catalog_size))
                .collect();
            User::new("Bench User", format!("{u:09}"), liked)
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let catalog = generate_catalog(5_000);

    c.bench_function("catalog_index_build", |b| {
        b.iter(|| black_box(CatalogIndex::build(black_box(&catalog))))
    });
}

fn bench_recommend_batch(c: &mut Criterion) {
    let catalog = generate_catalog(5_000);
    let users = generate_users(500, catalog.len());
    let recommender = Recommender::new(&catalog);

    c.bench_function("generate_for_all_500_users", |b| {
        b.iter(|| black_box(recommender.generate_for_all(black_box(&users))))
    });
}

fn bench_parse_movies(c: &mut Criterion) {
    let source: String = (0..1_000)
        .map(|i| format!("Movie Number,MN{}\naction,drama\n\n", [123, 456, 789][i % 3]))
        .collect();

    c.bench_function("parse_1000_movies", |b| {
        b.iter(|| {
            let movies = MovieParser::default()
                .parse(Cursor::new(black_box(source.as_str())))
                .expect("generated source is valid");
            black_box(movies)
        })
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_recommend_batch,
    bench_parse_movies
);
criterion_main!(benches);
