use vsview_client::{clean, cleanup_pass, decode};
use vsview_testing::fixtures::{ESCAPED_RECORD, SMALLCAPS_RECORD, STREAM_CELL};

const SMALLCAPS_ARRAY: &str = r##""#[1,2]""##;

#[test]
fn test_stream_cell_cleans_to_plain_json() {
    assert_eq!(
        clean(STREAM_CELL),
        r#"{"value":{"blockHeight":"9","values":[{"body":{"n":1},"slots":[]}]}}"#
    );
}

#[test]
fn test_stream_cell_pretty_output() {
    let pretty = decode(STREAM_CELL).unwrap();
    insta::assert_snapshot!(pretty, @r#"
    {
      "value": {
        "blockHeight": "9",
        "values": [
          {
            "body": {
              "n": 1
            },
            "slots": []
          }
        ]
      }
    }
    "#);
}

#[test]
fn test_third_pass_is_noop_on_cleaned_payloads() {
    for raw in [STREAM_CELL, SMALLCAPS_RECORD, ESCAPED_RECORD, SMALLCAPS_ARRAY] {
        let cleaned = clean(raw);
        assert_eq!(cleanup_pass(&cleaned), cleaned, "payload: {}", raw);
    }
}

#[test]
fn test_decoded_output_is_stable_under_redecode() {
    for raw in [STREAM_CELL, SMALLCAPS_RECORD, ESCAPED_RECORD, SMALLCAPS_ARRAY] {
        let cleaned = clean(raw);
        assert_eq!(decode(&cleaned).unwrap(), decode(raw).unwrap());
    }
}
