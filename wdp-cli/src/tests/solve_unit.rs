//! Focused unit tests covering solve CLI configuration and auction loading.

use super::helpers::{conflicting_auction, utf8_tempdir, write_auction, write_utf8};
use super::report::{OutputFormat, SolverReport};
use super::solve::{
    AuctionSource, DEFAULT_BIDDERS, DEFAULT_ITEMS, DEFAULT_ITERATIONS, DefaultSolveSolverBuilder,
    SolveArgs, SolveConfig, SolveSolverBuilder, SolverChoice, config_from_layers_for_test,
    load_auction, run_solve_with,
};
use super::*;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use wdp_core::SolveError;
use wdp_solver_whale::WhaleConfig;

#[rstest]
fn solve_config_falls_back_to_driver_defaults() {
    let config = SolveConfig::try_from(SolveArgs::default()).expect("config should build");
    match &config.source {
        AuctionSource::Random(generate) => {
            assert_eq!(generate.items, DEFAULT_ITEMS);
            assert_eq!(generate.bidders, DEFAULT_BIDDERS);
            assert_eq!(generate.seed, 0);
        }
        AuctionSource::File(path) => panic!("expected a random auction, found {path}"),
    }
    assert_eq!(config.solver, SolverChoice::Both);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.whale.iterations, DEFAULT_ITERATIONS);
    assert_eq!(config.whale.population, WhaleConfig::DEFAULT_POPULATION);
    assert!(!config.whale.parallel);
}

#[rstest]
fn auction_path_takes_precedence_over_sizes() {
    let args = SolveArgs {
        auction: Some("auction.json".into()),
        items: Some(3),
        bidders: Some(2),
        ..SolveArgs::default()
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.source, AuctionSource::File("auction.json".into()));
}

#[rstest]
fn seed_drives_generation_and_search() {
    let args = SolveArgs {
        seed: Some(99),
        population: Some(4),
        parallel: Some(true),
        ..SolveArgs::default()
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.whale.seed, 99);
    assert_eq!(config.whale.population, 4);
    assert!(config.whale.parallel);
    assert!(matches!(
        config.source,
        AuctionSource::Random(ref generate) if generate.seed == 99
    ));
}

#[rstest]
#[case(SolverChoice::Brute, vec!["brute"])]
#[case(SolverChoice::Whale, vec!["whale"])]
#[case(SolverChoice::Both, vec!["brute", "whale"])]
fn builder_follows_the_solver_choice(
    #[case] solver: SolverChoice,
    #[case] expected: Vec<&'static str>,
) {
    let args = SolveArgs {
        solver: Some(solver),
        ..SolveArgs::default()
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    let names: Vec<&str> = DefaultSolveSolverBuilder
        .build(&config)
        .iter()
        .map(|built| built.name())
        .collect();
    assert_eq!(names, expected);
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "items": 10, "iterations": 50, "solver": "whale", "format": "json" }),
        None,
    );
    composer.push_environment(json!({ "iterations": 75, "bidders": 6 }));
    composer.push_cli(json!({ "solver": "brute" }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.whale.iterations, 75);
    assert_eq!(config.solver, SolverChoice::Brute);
    assert_eq!(config.format, OutputFormat::Json);
    match config.source {
        AuctionSource::Random(generate) => {
            assert_eq!(generate.items, 10);
            assert_eq!(generate.bidders, 6);
        }
        AuctionSource::File(path) => panic!("expected a random auction, found {path}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "solver": "simulated-annealing" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("unknown solver should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn load_auction_decodes_json() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("auction.json");
    write_auction(&path, &conflicting_auction());

    let auction = load_auction(&path).expect("auction should decode");
    assert_eq!(auction.item_count(), 2);
    assert_eq!(auction.bid_count(), 2);
}

#[rstest]
fn load_auction_rejects_invalid_json() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("auction.json");
    write_utf8(&path, b"{ not valid json");

    let err = load_auction(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseAuction { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseAuction, found {other:?}"),
    }
}

#[rstest]
fn load_auction_rejects_unknown_items() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("auction.json");
    write_utf8(
        &path,
        br#"{"items":[{"index":0,"price":5}],"bids":[{"items":[3],"price":5}]}"#,
    );

    let err = load_auction(&path).expect_err("unknown item should error");
    assert!(matches!(err, CliError::ParseAuction { .. }));
}

#[rstest]
fn load_auction_io_error_returns_open_error() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("missing.json");

    let err = load_auction(&path).expect_err("missing auction should error");
    match err {
        CliError::OpenAuction { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenAuction, found {other:?}"),
    }
}

#[rstest]
fn solving_a_stored_auction_reports_both_solvers() {
    let (_tmp, root) = utf8_tempdir();
    let path = root.join("auction.json");
    write_auction(&path, &conflicting_auction());
    let args = SolveArgs {
        auction: Some(path),
        iterations: Some(200),
        format: Some(OutputFormat::Json),
        ..SolveArgs::default()
    };

    let mut buffer = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut buffer).expect("solve succeeds");
    let reports: Vec<SolverReport> = serde_json::from_slice(&buffer).expect("JSON reports");
    let names: Vec<&str> = reports.iter().map(|report| report.solver.as_str()).collect();
    assert_eq!(names, vec!["brute", "whale"]);
    let brute = reports.first().expect("brute report");
    assert_eq!(brute.winners, vec![0]);
    assert_eq!(brute.price, 25);
    assert_eq!(brute.bits, "10");
    assert!(reports.iter().all(|report| report.price <= brute.price));
}

#[rstest]
#[case(SolverChoice::Whale)]
#[case(SolverChoice::Both)]
fn empty_populations_are_rejected_before_solving(#[case] solver: SolverChoice) {
    let args = SolveArgs {
        items: Some(20),
        bidders: Some(20),
        solver: Some(solver),
        population: Some(0),
        ..SolveArgs::default()
    };
    let err = SolveConfig::try_from(args).expect_err("no whales");
    match err {
        CliError::Solve {
            solver: name,
            source,
        } => {
            assert_eq!(name, "whale");
            assert!(matches!(source, SolveError::InvalidConfig { .. }));
        }
        other => panic!("expected Solve, found {other:?}"),
    }
}

#[rstest]
fn brute_only_runs_ignore_whale_settings() {
    let args = SolveArgs {
        solver: Some(SolverChoice::Brute),
        population: Some(0),
        ..SolveArgs::default()
    };
    let config = SolveConfig::try_from(args).expect("whale settings are unused");
    assert_eq!(config.solver, SolverChoice::Brute);
}

#[rstest]
fn run_solve_stops_on_invalid_whale_settings() {
    let args = SolveArgs {
        items: Some(4),
        bidders: Some(3),
        population: Some(0),
        ..SolveArgs::default()
    };
    let mut buffer = Vec::new();
    let err = run_solve_with(args, &DefaultSolveSolverBuilder, &mut buffer)
        .expect_err("no whales");
    assert!(matches!(err, CliError::Solve { solver: "whale", .. }));
    assert!(buffer.is_empty());
}
