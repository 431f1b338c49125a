//! End-to-end pipeline tests: generation -> pairing -> detection -> report

use chrono::NaiveDate;
use parkwatch_core::{LotKind, PairingError};
use parkwatch_datagen::LotGenerator;
use parkwatch_runner::{
    PipelineConfig, PipelineError, SnapshotConfig, demo_lots, lot_snapshot, run,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_pipeline_is_deterministic_for_a_seed() {
    init_logging();
    let config = PipelineConfig::default();

    let a = run(&config, &demo_lots()).unwrap();
    let b = run(&config, &demo_lots()).unwrap();

    assert_eq!(a.pairs.len(), 4);
    assert_eq!(a.lots.len(), 8);
    for (pa, pb) in a.pairs.iter().zip(&b.pairs) {
        assert_eq!(pa.first, pb.first);
        assert_eq!(pa.second, pb.second);
        assert_eq!(pa.regions, pb.regions);
    }
}

#[test]
fn test_pairs_follow_registry_order() {
    init_logging();
    let report = run(&PipelineConfig::default(), &demo_lots()).unwrap();

    let expected = [(935, 922), (924, 921), (923, 920), (1672, 929)];
    for (pair, (first, second)) in report.pairs.iter().zip(expected) {
        assert_eq!(pair.first.value(), first);
        assert_eq!(pair.second.value(), second);
        assert_eq!(pair.first_kind, pair.second_kind);
    }
}

#[test]
fn test_regions_respect_series_bounds() {
    init_logging();
    let config = PipelineConfig::default();
    let report = run(&config, &demo_lots()).unwrap();

    for pair in &report.pairs {
        for region in &pair.regions {
            assert!(region.start < region.end);
            assert!(region.end <= config.series.num_steps);
        }
        for window in pair.regions.windows(2) {
            assert!(window[0].end < window[1].start);
        }
    }
}

#[test]
fn test_pipeline_fails_without_enough_lots() {
    init_logging();
    let config = PipelineConfig::default();
    let three_lots = demo_lots().into_iter().take(3).collect::<Vec<_>>();

    let err = run(&config, &three_lots).unwrap_err();
    match err {
        PipelineError::Pairing(PairingError::NotEnoughItems { needed, available }) => {
            assert_eq!(needed, 4);
            assert_eq!(available, 3);
        }
        other => panic!("Expected pairing error, got {other}"),
    }
}

#[test]
fn test_report_serializes_to_json() {
    init_logging();
    let report = run(&PipelineConfig::default(), &demo_lots()).unwrap();
    let json = report.to_json().unwrap();

    assert!(json.contains("\"pairs\""));
    assert!(json.contains("\"regions\""));
    assert!(json.contains("\"School\""));
}

#[test]
fn test_lot_snapshot_covers_both_charts() {
    init_logging();
    let mut lot_gen = LotGenerator::with_seed(Default::default(), 42);
    let registry = lot_gen.generate(&[(1672, LotKind::Mall)]);

    let history_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let forecast_start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let snapshot = lot_snapshot(
        &SnapshotConfig::default(),
        &registry[0],
        history_start,
        forecast_start,
    );

    assert_eq!(snapshot.lot.id.value(), 1672);
    assert_eq!(snapshot.volume.len(), 37);
    assert_eq!(snapshot.vehicles.len(), 4);

    // Equal configuration reproduces the selection data
    let again = lot_snapshot(
        &SnapshotConfig::default(),
        &registry[0],
        history_start,
        forecast_start,
    );
    assert_eq!(snapshot.volume, again.volume);
    assert_eq!(snapshot.vehicles, again.vehicles);
}
