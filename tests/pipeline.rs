// End-to-end tests: station CSV -> summary CSV -> map image.

use std::{fs, path::{Path, PathBuf}};

use evse_atlas::{
    aggregate, render, AggregateConfig, ImageFormat, NotesMode, RenderConfig,
};
use tempfile::TempDir;

const STATIONS: &str = "\
Fuel Type Code,Station Name,State,EV Level1 EVSE Num,EV Level2 EVSE Num,EV DC Fast Count,EV Other Info
ELEC,Alpha,CA,2,3,1,
ELEC,Bravo,CA,0,0,0,5 units
ELEC,Charlie,TX,,4,,
ELEC,Delta,PR,1,1,1,
ELEC,Echo,NY,,,,\"2 ports, 1 spare\"
ELEC,Foxtrot,AK,,,,
";

const BOUNDARIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "properties": { "name": "California" },
      "geometry": { "type": "Polygon", "coordinates": [[[-124,32],[-114,32],[-114,42],[-124,42],[-124,32]]] } },
    { "type": "Feature", "properties": { "name": "Texas" },
      "geometry": { "type": "Polygon", "coordinates": [[[-106,26],[-94,26],[-94,36],[-106,36],[-106,26]]] } },
    { "type": "Feature", "properties": { "name": "Wyoming" },
      "geometry": { "type": "Polygon", "coordinates": [[[-111,41],[-104,41],[-104,45],[-111,45],[-111,41]]] } },
    { "type": "Feature", "properties": { "name": "Alaska" },
      "geometry": { "type": "MultiPolygon", "coordinates": [[[[-168,54],[-141,54],[-141,71],[-168,71],[-168,54]]]] } },
    { "type": "Feature", "properties": { "name": "Puerto Rico" },
      "geometry": { "type": "Polygon", "coordinates": [[[-67,18],[-65.6,18],[-65.6,18.5],[-67,18.5],[-67,18]]] } }
  ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn aggregate_to(dir: &TempDir, input: &Path, name: &str, config: &AggregateConfig) -> (PathBuf, aggregate::AggregateReport) {
    let output = dir.path().join(name);
    let report = aggregate::run(input, &output, config).unwrap();
    (output, report)
}

fn small_render() -> RenderConfig {
    RenderConfig { dpi: 30, ..RenderConfig::default() }
}

#[test]
fn aggregate_writes_two_column_summary() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", STATIONS);
    let (output, report) = aggregate_to(&dir, &input, "summary.csv", &AggregateConfig::default());

    let text = fs::read_to_string(output).unwrap();
    assert_eq!(text, "State,Total EVSEs\nAlaska,0\nCalifornia,11\nNew York,3\nTexas,4\n");

    assert_eq!(report.rows_read, 6);
    assert_eq!(report.rows_counted, 5);
    assert_eq!(report.unmapped.get("PR"), Some(&1));
    assert_eq!(report.grand_total, 18);
}

#[test]
fn legacy_notes_ignore_note_counts() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", STATIONS);
    let config = AggregateConfig { notes: NotesMode::Legacy, ..AggregateConfig::default() };
    let (output, _) = aggregate_to(&dir, &input, "summary.csv", &config);

    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("California,6\n"));
    assert!(text.contains("New York,0\n"));
}

#[test]
fn aggregate_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", STATIONS);
    let (first, _) = aggregate_to(&dir, &input, "first.csv", &AggregateConfig::default());
    let (second, _) = aggregate_to(&dir, &input, "second.csv", &AggregateConfig::default());
    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn custom_columns_and_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.tsv", "st;l1;l2;dc;info\nWA;1;1;1;x2\nOR;;;;\n");
    let mut config = AggregateConfig { delimiter: ';', ..AggregateConfig::default() };
    config.columns.state = "st".into();
    config.columns.level1 = "l1".into();
    config.columns.level2 = "l2".into();
    config.columns.dc_fast = "dc".into();
    config.columns.notes = "info".into();

    let (output, _) = aggregate_to(&dir, &input, "summary.csv", &config);
    assert_eq!(fs::read_to_string(output).unwrap(), "State,Total EVSEs\nOregon,0\nWashington,5\n");
}

#[test]
fn missing_columns_are_named() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", "State,EV Level1 EVSE Num\nCA,1\n");
    let err = aggregate::run(&input, &dir.path().join("out.csv"), &AggregateConfig::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("\"EV Level2 EVSE Num\""), "{message}");
    assert!(message.contains("\"EV DC Fast Count\""), "{message}");
    assert!(message.contains("\"EV Other Info\""), "{message}");
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = aggregate::run(&dir.path().join("nope.csv"), &dir.path().join("out.csv"), &AggregateConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.csv"));
}

#[test]
fn no_known_states_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", "State,EV Level1 EVSE Num,EV Level2 EVSE Num,EV DC Fast Count,EV Other Info\nON,4,4,4,\n");
    let (output, report) = aggregate_to(&dir, &input, "summary.csv", &AggregateConfig::default());
    assert_eq!(fs::read_to_string(output).unwrap(), "State,Total EVSEs\n");
    assert_eq!(report.states, 0);
}

#[test]
fn render_svg_fills_classes_and_missing_states() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "stations.csv", STATIONS);
    let (summary, _) = aggregate_to(&dir, &input, "summary.csv", &AggregateConfig::default());
    let boundaries = write(&dir, "us-states.json", BOUNDARIES);
    let output = dir.path().join("map.svg");

    let report = render::run(&summary, &boundaries, &output, ImageFormat::Svg, &small_render()).unwrap();
    assert_eq!(report.features, 5);
    assert_eq!(report.matched, 3);
    // Puerto Rico has no label.
    assert_eq!(report.labels, 4);

    let svg = fs::read_to_string(output).unwrap();
    assert!(svg.contains(r##"data-name="California" style="fill:#1a9850""##));
    assert!(svg.contains(r##"data-name="Texas" style="fill:#fee08b""##));
    assert!(svg.contains(r##"data-name="Alaska" style="fill:#d73027""##));
    assert!(svg.contains(r##"data-name="Wyoming" style="fill:#f0f0f0""##));
    assert!(svg.contains(r##"data-name="Puerto Rico" style="fill:#f0f0f0""##));
    assert!(svg.contains(">CA</text>"));
    assert!(!svg.contains(">PR</text>"));
    assert!(svg.contains("Department of Energy &amp; Department of Transportation"));
    assert!(svg.contains(r#"width="450" height="300""#));
}

#[test]
fn render_can_map_another_value_column() {
    let dir = TempDir::new().unwrap();
    let summary = write(&dir, "density.csv", "State,EVSEs/100 miles\nCalifornia,7.5\nTexas,not available\n");
    let boundaries = write(&dir, "us-states.json", BOUNDARIES);
    let output = dir.path().join("map.svg");

    let config = RenderConfig { value_column: "EVSEs/100 miles".into(), ..small_render() };
    let report = render::run(&summary, &boundaries, &output, ImageFormat::Svg, &config).unwrap();
    assert_eq!(report.matched, 1);

    let svg = fs::read_to_string(output).unwrap();
    assert!(svg.contains(r##"data-name="California" style="fill:#a6d96a""##));
    assert!(svg.contains(r##"data-name="Texas" style="fill:#f0f0f0""##));
}

#[test]
fn render_requires_the_value_column() {
    let dir = TempDir::new().unwrap();
    let summary = write(&dir, "summary.csv", "State,Total\nCalifornia,3\n");
    let boundaries = write(&dir, "us-states.json", BOUNDARIES);
    let err = render::run(&summary, &boundaries, &dir.path().join("map.svg"), ImageFormat::Svg, &small_render()).unwrap_err();
    assert!(format!("{err:#}").contains("\"Total EVSEs\""));
}

#[test]
fn render_missing_boundaries_is_fatal() {
    let dir = TempDir::new().unwrap();
    let summary = write(&dir, "summary.csv", "State,Total EVSEs\nCalifornia,3\n");
    let result = render::run(&summary, &dir.path().join("missing.geojson"), &dir.path().join("map.svg"), ImageFormat::Svg, &small_render());
    assert!(result.is_err());
}

#[test]
#[ignore = "needs a system sans-serif font for text rasterisation"]
fn render_png_writes_an_image() {
    let dir = TempDir::new().unwrap();
    let summary = write(&dir, "summary.csv", "State,Total EVSEs\nCalifornia,11\n");
    let boundaries = write(&dir, "us-states.json", BOUNDARIES);
    let output = dir.path().join("map.png");

    render::run(&summary, &boundaries, &output, ImageFormat::Png, &small_render()).unwrap();
    let bytes = fs::read(output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
