#![cfg(feature = "serde")]

use l80gps::{decode_log, nmea, AckPolicy, GpsConfig, Sentence};
use serde_json::json;

fn decode_json(line: &str) -> serde_json::Value {
    let sentence: Sentence = line.parse().unwrap();
    serde_json::to_value(nmea::decode(&sentence).unwrap()).unwrap()
}

#[test]
fn test_sentence_record_json() {
    let value = decode_json("$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59");
    assert_eq!("GPGLL", value["message_id"]);
    assert_eq!("Valid", value["status"]);
    assert_eq!(41139.0, value["utc"]);

    let value = decode_json("$PMTK001,161,3*36");
    assert_eq!(json!({"message_id": "PMTK001", "command": 161, "flag": "Success"}), value);
}

#[test]
fn test_pmtklog_mode_json() {
    let value = decode_json("$PMTKLOG,456,0,11,31,2,0,0,0,3769,46*48");
    assert_eq!("PMTKLOG", value["message_id"]);
    assert_eq!("ALWAYS_LOCATE | DISTANCE", value["mode"]);
    assert_eq!("Overlap", value["log_type"]);
}

#[test]
fn test_gprmc_date_json() {
    let value = decode_json("$GPRMC,013732.000,A,3150.7238,N,11711.7278,E,0.00,0.00,220413,,,A*68");
    assert_eq!("2013-04-22", value["date"]);
}

#[test]
fn test_locus_record_json() {
    let record: [u8; 16] = [
        0x0d, 0xe9, 0xe7, 0x53, 0x02, 0xa5, 0x43, 0x56, 0x42, 0x77, 0x75, 0x08, 0xc0, 0xa3, 0x00,
        0xc9,
    ];
    let records = decode_log(&record);
    let value = serde_json::to_value(&records).unwrap();
    assert_eq!("2014-08-10T21:50:05Z", value[0]["utc"]);
    assert_eq!(163, value[0]["altitude"]);
}

#[test]
fn test_config_round_trip() {
    let config: GpsConfig = serde_json::from_value(json!({
        "locus_attempts": 2,
        "locus_ack": "await"
    }))
    .unwrap();
    assert_eq!(2, config.locus_attempts);
    assert_eq!(AckPolicy::Await, config.locus_ack);
    assert_eq!(GpsConfig::default().read_timeout, config.read_timeout);
}
