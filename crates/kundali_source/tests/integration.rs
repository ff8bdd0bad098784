//! Integration tests for kundali_source (fixture feeds under tests/fixtures).

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use kundali_source::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn request() -> BirthRequest {
    let config = ChartConfig::load(fixture("kundali.toml")).unwrap();
    BirthRequest::new("1990-01-25", "04:10:00", 19.07, 72.88, 5.5)
        .unwrap()
        .with_config(config)
}

struct FailingSource;

impl PositionSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn positions(&self, _request: &BirthRequest) -> Result<Vec<BodyPosition>, SourceError> {
        Err(SourceError::Io(std::io::Error::other("ephemeris offline")))
    }
}

#[test]
fn snapshot_fixture_end_to_end() {
    let source = SnapshotSource::load(fixture("snapshot.json")).unwrap();
    let charts = compute_charts(&source, &request()).unwrap();

    assert_eq!(charts.instant.to_rfc3339(), "1990-01-24T22:40:00+00:00");
    assert_eq!(charts.rashi.len(), 9);
    assert_eq!(charts.navamsa.len(), 9);
    assert_eq!(charts.rashi.amsha, Amsha::D1);
    assert_eq!(charts.navamsa.amsha, Amsha::D9);

    let sun = charts.navamsa.graha(Graha::Surya).unwrap();
    assert_eq!(sun.rashi, Rashi::Mesha);
    assert_relative_eq!(sun.longitude, 9.0, epsilon = 1e-9);

    let saturn = charts.navamsa.graha(Graha::Shani).unwrap();
    assert_eq!(saturn.rashi, Rashi::Dhanu);
    assert!(saturn.is_retrograde);
}

#[test]
fn longitude_fixture_end_to_end() {
    let text = std::fs::read_to_string(fixture("longitudes.json")).unwrap();
    let source = LongitudeSource::from_json_str(&text).unwrap();
    let rashi = birth_chart(&source, &request()).unwrap();

    // sun 29 - 24 = 5 -> Mesha 5
    assert_eq!(rashi.bucket(Rashi::Mesha).len(), 1);
    // moon 144 - 24 = 120 -> Simha 0
    assert_eq!(rashi.graha(Graha::Chandra).unwrap().rashi, Rashi::Simha);
    // saturn 350 - 24 = 326 -> Kumbha 26, retrograde
    let saturn = rashi.graha(Graha::Shani).unwrap();
    assert_eq!(saturn.rashi, Rashi::Kumbha);
    assert!(saturn.is_retrograde);
    // rahu 84 - 24 = 60 -> Mithuna 0; ketu derived at 240 -> Dhanu 0
    assert_eq!(rashi.graha(Graha::Rahu).unwrap().rashi, Rashi::Mithuna);
    assert_eq!(rashi.graha(Graha::Ketu).unwrap().rashi, Rashi::Dhanu);
    assert_eq!(rashi.len(), 5);

    let d9 = navamsa_chart(&source, &request()).unwrap();
    // Mesha 5 deg -> 2nd navamsa -> Vrishabha
    assert_eq!(d9.graha(Graha::Surya).unwrap().rashi, Rashi::Vrishabha);
    // Simha 0 deg -> 1st navamsa -> Mesha
    assert_eq!(d9.graha(Graha::Chandra).unwrap().rashi, Rashi::Mesha);
}

#[test]
fn source_errors_propagate() {
    let err = compute_charts(&FailingSource, &request()).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn empty_feed_is_chart_error() {
    let source = SnapshotSource::new(Vec::new());
    let err = birth_chart(&source, &request()).unwrap_err();
    assert!(matches!(err, SourceError::Chart(ChartError::EmptyPositions)));
}

#[test]
fn out_of_range_snapshot_longitude_fails_fast() {
    let source = SnapshotSource::new(vec![BodyPosition::new(
        Graha::Guru,
        Rashi::Meena,
        "Revati",
        31.0,
        false,
    )]);
    let err = birth_chart(&source, &request()).unwrap_err();
    assert!(matches!(
        err,
        SourceError::Chart(ChartError::InvalidLongitude { graha: Graha::Guru, .. })
    ));
}

#[test]
fn sources_behind_trait_objects_across_threads() {
    let sources: Vec<Arc<dyn PositionSource>> = vec![
        Arc::new(SnapshotSource::load(fixture("snapshot.json")).unwrap()),
        Arc::new(
            LongitudeSource::from_json_str(
                &std::fs::read_to_string(fixture("longitudes.json")).unwrap(),
            )
            .unwrap(),
        ),
    ];

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            thread::spawn(move || compute_charts(source.as_ref(), &request()).map(|c| c.navamsa.len()))
        })
        .collect();
    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(counts, vec![9, 5]);
}

#[test]
fn charts_serialize_to_json() {
    let source = SnapshotSource::load(fixture("snapshot.json")).unwrap();
    let charts = compute_charts(&source, &request()).unwrap();
    let json = serde_json::to_string(&charts).unwrap();
    let back: BirthCharts = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rashi, charts.rashi);
    assert_eq!(back.instant, charts.instant);
}
