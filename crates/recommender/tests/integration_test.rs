//! Integration tests for the parse → recommend → report flow.
//!
//! These tests drive the public API with in-memory sources the way the
//! binary drives it with files.

use data_loader::{ErrorKind, MovieParser, UserParser};
use recommender::{Recommender, RunOutcome, process, recommend, report};
use std::collections::HashSet;
use std::io::Cursor;

const MOVIES: &str = "\
The Dark Knight,TDK123
action,thriller,crime

Inception,I456
Sci-Fi,Thriller

Up,U789
animation,family
The Lord Of The Rings,TLOTR012
fantasy,adventure,action
Toy Story,TS345
Animation,comedy
";

const USERS: &str = "\
John Doe,123456789
TDK123

Mina Alfons,12345678A
U789,XYZ123

Sam Lee,987654321

";

fn titles(list: Vec<String>) -> HashSet<String> {
    list.into_iter().collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_catalog_recommendations() {
    let movies = MovieParser::default().parse(Cursor::new(MOVIES)).unwrap();
    let users = UserParser::default().parse(Cursor::new(USERS)).unwrap();

    assert_eq!(movies.len(), 5);
    assert_eq!(users.len(), 3);

    let recommender = Recommender::new(&movies);
    let all = recommender.generate_for_all(&users);

    // action + thriller + crime
    assert_eq!(
        titles(all[0].titles.clone()),
        set(&["Inception", "The Lord Of The Rings"])
    );
    // animation + family; the unknown id XYZ123 adds nothing
    assert_eq!(titles(all[1].titles.clone()), set(&["Toy Story"]));
    // no likes at all
    assert!(all[2].titles.is_empty());
}

#[test]
fn test_soundness_against_brute_force() {
    let movies = MovieParser::default().parse(Cursor::new(MOVIES)).unwrap();
    let users = UserParser::default().parse(Cursor::new(USERS)).unwrap();

    for user in &users {
        let liked_genres: HashSet<&str> = movies
            .iter()
            .filter(|m| user.has_liked(m.id()))
            .flat_map(|m| m.genres().iter().map(String::as_str))
            .collect();

        let expected: HashSet<String> = movies
            .iter()
            .filter(|m| !user.has_liked(m.id()))
            .filter(|m| m.genres().iter().any(|g| liked_genres.contains(g.as_str())))
            .map(|m| m.title().to_string())
            .collect();

        let got = recommend(user, &movies);
        assert_eq!(got.len(), titles(got.clone()).len(), "titles must be unique");
        assert_eq!(titles(got), expected, "user {}", user.name());
    }
}

#[test]
fn test_process_writes_report_in_user_order() {
    let mut out = Vec::new();
    let outcome = process(Cursor::new(MOVIES), Cursor::new(USERS), &mut out).unwrap();

    assert_eq!(outcome, RunOutcome::Recommended { movies: 5, users: 3 });

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "John Doe,123456789");
    assert_eq!(lines[2], "Mina Alfons,12345678A");
    assert_eq!(lines[3], "Toy Story");
    assert_eq!(lines[4], "Sam Lee,987654321");
    assert_eq!(lines[5], "");
    assert!(text.ends_with("987654321\n\n"));
}

#[test]
fn test_error_at_last_record_yields_nothing() {
    let broken = format!("{MOVIES}\nthe matrix,TM123\naction\n");

    let err = MovieParser::default().parse(Cursor::new(broken.as_str())).unwrap_err();
    let validation = err.as_validation().unwrap();
    assert_eq!(validation.kind(), ErrorKind::Field);

    let mut out = Vec::new();
    let outcome = process(Cursor::new(broken.as_str()), Cursor::new(USERS), &mut out).unwrap();
    assert!(matches!(outcome, RunOutcome::Rejected(_)));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error\nERROR: Movie Title {the matrix} is wrong\n"
    );
}

#[test]
fn test_bad_movie_id_digits() {
    let mut out = Vec::new();
    process(
        Cursor::new("The Dark Knight,TDK112\naction\n"),
        Cursor::new(USERS),
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error\nERROR: Movie Id numbers {TDK112} aren't unique\n"
    );
}

#[test]
fn test_duplicate_user_id_report() {
    let users = "John Doe,123456789\nTDK123\nJane Doe,123456789\nI456\n";
    let mut out = Vec::new();
    let outcome = process(Cursor::new(MOVIES), Cursor::new(users), &mut out).unwrap();

    match outcome {
        RunOutcome::Rejected(err) => assert_eq!(err.kind(), ErrorKind::Uniqueness),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error\nERROR: User Id {123456789} is wrong\n"
    );
}

#[test]
fn test_format_matches_report_block() {
    let movies = MovieParser::default().parse(Cursor::new(MOVIES)).unwrap();
    let users = UserParser::default().parse(Cursor::new(USERS)).unwrap();

    let mina = &users[1];
    let block = report::format_recommendations(mina, &recommend(mina, &movies));
    assert_eq!(block, "Mina Alfons,12345678A\nToy Story\n");
}
