//! End-to-end pipeline tests: scan a real directory tree, build a plan,
//! execute it, and check the resulting layout on disk.

use std::fs;
use std::path::{Path, PathBuf};

use video_sweep::core::executor;
use video_sweep::core::planner::{Planner, PlannerConfig};
use video_sweep::core::reconciler::{ExternalLookup, LookupMatch};
use video_sweep::core::scanner;
use video_sweep::models::action::Action;
use video_sweep::services::omdb::OmdbClient;
use video_sweep::Result;

/// In-memory lookup resolving every query to one fixed candidate.
struct SingleAnswer {
    title: &'static str,
    year: u16,
}

impl ExternalLookup for SingleAnswer {
    async fn lookup(&self, _title: &str, _year: Option<u16>) -> Result<Vec<LookupMatch>> {
        Ok(vec![LookupMatch {
            title: self.title.to_string(),
            year: Some(self.year),
        }])
    }
}

struct Sandbox {
    _dir: tempfile::TempDir,
    source: PathBuf,
    movies: PathBuf,
    series: PathBuf,
}

fn sandbox(files: &[&str]) -> Sandbox {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("incoming");
    fs::create_dir(&source).unwrap();
    for file in files {
        fs::write(source.join(file), b"payload").unwrap();
    }
    Sandbox {
        source,
        movies: dir.path().join("movie_output"),
        series: dir.path().join("series_output"),
        _dir: dir,
    }
}

fn config(sb: &Sandbox, clean_up: bool) -> PlannerConfig {
    PlannerConfig {
        movie_root: sb.movies.clone(),
        series_root: sb.series.clone(),
        source_root: sb.source.clone(),
        clean_up,
    }
}

#[tokio::test]
async fn sweep_organizes_movies_and_series() {
    let sb = sandbox(&[
        "Alien [1979].mp4",
        "SeriesName (2014) - S04E01 -EpisodeTitle.mkv",
        "unparseable.avi",
    ]);

    let scan = scanner::scan_directory(&sb.source).unwrap();
    let planner: Planner<OmdbClient> = Planner::new(config(&sb, false));
    let actions = planner.build_actions(&scan).await;
    assert_eq!(actions.len(), 3);

    let summary = executor::execute(&actions, false);
    assert_eq!(summary.moved, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);

    assert!(sb.movies.join("Alien [1979].mp4").exists());
    assert!(sb
        .series
        .join("SeriesName/Season 4/SeriesName S04E01.mkv")
        .exists());
    // Skipped files stay where they were.
    assert!(sb.source.join("unparseable.avi").exists());
}

#[tokio::test]
async fn dry_run_plans_but_touches_nothing() {
    let sb = sandbox(&["Alien [1979].mp4"]);

    let scan = scanner::scan_directory(&sb.source).unwrap();
    let planner: Planner<OmdbClient> = Planner::new(config(&sb, false));
    let actions = planner.build_actions(&scan).await;

    let summary = executor::execute(&actions, true);
    assert_eq!(summary.moved, 1);
    assert!(sb.source.join("Alien [1979].mp4").exists());
    assert!(!sb.movies.exists());
}

#[tokio::test]
async fn corrected_title_lands_at_corrected_path() {
    let sb = sandbox(&["WrongName (2019).mp4"]);

    let scan = scanner::scan_directory(&sb.source).unwrap();
    let planner = Planner::new(config(&sb, false)).with_lookup(SingleAnswer {
        title: "Correct Title",
        year: 2019,
    });
    let actions = planner.build_actions(&scan).await;

    match &actions[0] {
        Action::Move { destination, .. } => {
            assert_eq!(destination, &sb.movies.join("Correct Title [2019].mp4"));
        }
        other => panic!("expected Move, got {:?}", other),
    }

    executor::execute(&actions, false);
    assert!(sb.movies.join("Correct Title [2019].mp4").exists());
}

#[tokio::test]
async fn clean_up_relocates_non_videos() {
    let sb = sandbox(&["Alien [1979].mp4", "cover.jpg", "info.nfo"]);

    let scan = scanner::scan_directory(&sb.source).unwrap();
    let planner: Planner<OmdbClient> = Planner::new(config(&sb, true));
    let actions = planner.build_actions(&scan).await;
    assert_eq!(actions.len(), 3);

    let summary = executor::execute(&actions, false);
    assert_eq!(summary.deleted, 2);
    assert!(sb.source.join("Deleted/cover.jpg").exists());
    assert!(sb.source.join("Deleted/info.nfo").exists());

    // A second scan must not pick the relocated files up again.
    let rescan = scanner::scan_directory(&sb.source).unwrap();
    assert!(rescan.others.is_empty());
}

#[tokio::test]
async fn identical_classifications_collide_and_second_move_fails() {
    let sb = sandbox(&["Alien [1979].mp4"]);
    let nested = sb.source.join("dupes");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("Alien [1979].mp4"), b"other copy").unwrap();

    let scan = scanner::scan_directory(&sb.source).unwrap();
    let planner: Planner<OmdbClient> = Planner::new(config(&sb, false));
    let actions = planner.build_actions(&scan).await;
    assert_eq!(actions.len(), 2);

    // The formatter gives both files the same target; the executor's
    // no-overwrite policy keeps the second one in place.
    let summary = executor::execute(&actions, false);
    assert_eq!(summary.moved, 1);
    assert_eq!(summary.failed, 1);
    assert!(sb.movies.join("Alien [1979].mp4").exists());
}

#[test]
fn scan_rejects_missing_source_before_planning() {
    let err = scanner::scan_directory(Path::new("/no/such/dir")).unwrap_err();
    assert!(matches!(err, video_sweep::Error::PathNotFound(_)));
}

#[tokio::test]
async fn sweep_rejects_file_as_output_root() {
    let sb = sandbox(&["Alien [1979].mp4"]);
    let file_root = sb._dir.path().join("movie_output");
    fs::write(&file_root, b"not a directory").unwrap();

    let cli = video_sweep::cli::args::Cli {
        source: sb.source.clone(),
        series_output: sb.series.clone(),
        movie_output: file_root,
        dry_run: true,
        clean_up: false,
        verbose: false,
    };

    // The bad root is rejected before any file is planned or touched.
    let err = video_sweep::cli::commands::sweep::run(&cli).await.unwrap_err();
    assert!(matches!(err, video_sweep::Error::NotADirectory(_)));
    assert!(sb.source.join("Alien [1979].mp4").exists());
}
