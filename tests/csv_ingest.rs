use std::collections::BTreeMap;
use std::error::Error;

use dagview::config::ColumnType;
use dagview::ingest::{
    AttrValue, NO_DATA, build_graph, parse_compact_datetime, read_table_from_reader,
};

type TestResult = Result<(), Box<dyn Error>>;

fn columns() -> BTreeMap<String, ColumnType> {
    BTreeMap::from([
        ("duracion_promedio".to_string(), ColumnType::Number),
        ("fecha_inicio".to_string(), ColumnType::YearMonthDaySecond),
        ("estado".to_string(), ColumnType::Number),
    ])
}

#[test]
fn number_values_round_trip_through_stringification() {
    for raw in ["90", "3.5", "-1", "0"] {
        let value = AttrValue::parse(ColumnType::Number, raw);
        assert_eq!(value.to_string(), raw, "round-trip for {raw}");
    }
}

#[test]
fn compact_timestamps_preserve_their_fields() -> TestResult {
    let ts = parse_compact_datetime("20240131235959")?;
    assert_eq!(ts.format("%Y%m%d%H%M%S").to_string(), "20240131235959");
    Ok(())
}

#[test]
fn fractional_second_digits_are_ignored() -> TestResult {
    let ts = parse_compact_datetime("20240131235959123456")?;
    assert_eq!(ts.format("%Y%m%d%H%M%S").to_string(), "20240131235959");
    Ok(())
}

#[test]
fn malformed_timestamps_are_rejected() {
    for raw in [
        "2024",             // too short
        "2024AB01000000",   // non-numeric month
        "20240001000000",   // month 0
        "20241301000000",   // month 13
        "202401010000",     // no seconds field
    ] {
        assert!(parse_compact_datetime(raw).is_err(), "should reject {raw}");
    }
}

#[test]
fn malformed_timestamp_cells_survive_as_text() {
    let value = AttrValue::parse(ColumnType::YearMonthDaySecond, "not-a-date");
    assert_eq!(value, AttrValue::Text("not-a-date".to_string()));
}

#[test]
fn empty_cells_become_the_no_data_sentinel() {
    let value = AttrValue::parse(ColumnType::Number, "");
    assert!(value.is_no_data());
    assert_eq!(value.to_string(), NO_DATA);
}

#[test]
fn status_text_still_reads_as_a_number() {
    assert_eq!(AttrValue::Text("1".to_string()).as_number(), Some(1.0));
    assert_eq!(AttrValue::Text("oops".to_string()).as_number(), None);
    assert_eq!(AttrValue::NoData.as_number(), None);
}

#[test]
fn table_and_graph_from_csv() -> TestResult {
    let csv = "\
proceso,dependencia,estado,duracion_promedio
load,,1,30
transform,load,0,45
report,transform,,60
";
    let table = read_table_from_reader(csv.as_bytes(), &columns())?;
    assert_eq!(table.headers.len(), 4);
    assert_eq!(table.headers[2].column_type, ColumnType::Number);
    assert_eq!(table.attribute_headers().len(), 2);

    let graph = build_graph(&table);

    assert_eq!(graph.node_count(), 3);
    // `load` has no dependency, so only two edges exist.
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.dependencies_of("transform"), ["load".to_string()]);

    let report = graph.get("report").ok_or("report missing")?;
    assert_eq!(report.attribute("estado"), Some(&AttrValue::NoData));
    assert_eq!(report.attribute("duracion_promedio"), Some(&AttrValue::Number(60.0)));

    Ok(())
}

#[test]
fn dependency_only_nodes_are_stubbed() -> TestResult {
    let csv = "\
proceso,dependencia,estado
child,parent,0
";
    let table = read_table_from_reader(csv.as_bytes(), &columns())?;
    let graph = build_graph(&table);

    let stub = graph.get("parent").ok_or("parent stub missing")?;
    assert!(stub.attributes.is_empty());

    Ok(())
}

#[test]
fn rows_without_a_node_identifier_are_skipped() -> TestResult {
    let csv = "\
proceso,dependencia,estado
,ghost,1
real,,1
";
    let table = read_table_from_reader(csv.as_bytes(), &columns())?;
    let graph = build_graph(&table);

    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains("real"));

    Ok(())
}

#[test]
fn short_rows_read_missing_cells_as_no_data() -> TestResult {
    let csv = "\
proceso,dependencia,estado,duracion_promedio
short,,1
";
    let table = read_table_from_reader(csv.as_bytes(), &columns())?;
    let graph = build_graph(&table);

    let node = graph.get("short").ok_or("short missing")?;
    assert_eq!(node.attribute("duracion_promedio"), Some(&AttrValue::NoData));

    Ok(())
}

#[test]
fn tables_need_at_least_two_columns() {
    let csv = "only_one_column\nvalue\n";
    assert!(read_table_from_reader(csv.as_bytes(), &columns()).is_err());
}

#[test]
fn empty_input_is_rejected() {
    assert!(read_table_from_reader("".as_bytes(), &columns()).is_err());
}
