use box_area::{AreaCalculator, AreaError, BoxDimensions, LineSource, OutputFormat, WriterSink};
use num_bigint::BigInt;
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;

fn run_with_input(input: &str, format: OutputFormat) -> (box_area::Result<box_area::SurfaceArea>, String) {
    let source = LineSource::new(Cursor::new(input.to_string()));
    let sink = WriterSink::new(Vec::new(), format);
    let mut calculator = AreaCalculator::new(source, sink);

    let result = calculator.run();
    let output = String::from_utf8(calculator.into_sink().into_inner()).unwrap();
    (result, output)
}

#[test]
fn test_documented_scenarios() {
    let cases = [
        ("2\n3\n4\n", "52\n"),
        ("1\n1\n1\n", "6\n"),
        ("0\n5\n5\n", "50\n"),
        ("-1\n2\n3\n", "2\n"),
    ];

    for (input, expected) in cases {
        let (result, output) = run_with_input(input, OutputFormat::Text);
        assert!(result.is_ok(), "input {:?} failed: {:?}", input, result);
        assert_eq!(output, expected, "input {:?}", input);
    }
}

#[test]
fn test_swapping_base_dimensions_keeps_area() {
    let (_, forward) = run_with_input("7\n-11\n5\n", OutputFormat::Text);
    let (_, swapped) = run_with_input("-11\n7\n5\n", OutputFormat::Text);
    assert_eq!(forward, swapped);
}

#[test]
fn test_values_wider_than_64_bits() {
    let (result, output) = run_with_input(
        "-9223372036854775808\n-9223372036854775808\n-9223372036854775808\n",
        OutputFormat::Text,
    );
    assert!(result.is_ok());
    assert_eq!(output, "510423550381407695195061911147652317184\n");

    let (_, output) = run_with_input("18446744073709551616\n1\n0\n", OutputFormat::Json);
    assert_eq!(
        output,
        "{\"x\":18446744073709551616,\"y\":1,\"h\":0,\"area\":36893488147419103232}\n"
    );
}

#[test]
fn test_input_without_trailing_newline() {
    let (result, output) = run_with_input("2\n3\n4", OutputFormat::Text);
    assert_eq!(result.unwrap().dimensions, BoxDimensions::new(2, 3, 4));
    assert_eq!(output, "52\n");
}

#[test]
fn test_json_output() {
    let (_, output) = run_with_input("2\n3\n4\n", OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();

    assert_eq!(value["x"], 2);
    assert_eq!(value["y"], 3);
    assert_eq!(value["h"], 4);
    assert_eq!(value["area"], 52);
}

#[test]
fn test_malformed_input_writes_nothing() {
    let (result, output) = run_with_input("2\nfour\n4\n", OutputFormat::Text);

    let err = result.unwrap_err();
    assert!(matches!(err, AreaError::InputParseError { line: 2, .. }));
    assert_ne!(err.exit_code(), 0);
    assert!(output.is_empty());
}

#[test]
fn test_empty_input() {
    let (result, output) = run_with_input("", OutputFormat::Text);

    assert!(matches!(result, Err(AreaError::MissingInput { line: 1 })));
    assert!(output.is_empty());
}

#[test]
fn test_reads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10\n20\n30").unwrap();

    let source = LineSource::open(file.path()).unwrap();
    let mut calculator = AreaCalculator::new(source, WriterSink::new(Vec::new(), OutputFormat::Text));
    let result = calculator.run().unwrap();

    assert_eq!(result.area, BigInt::from(2 * (10 * 20 + 10 * 30 + 20 * 30)));
    assert_eq!(calculator.into_sink().into_inner(), b"2200\n");
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LineSource::open(dir.path().join("missing.txt"));

    assert!(matches!(result, Err(AreaError::IoError(_))));
}
