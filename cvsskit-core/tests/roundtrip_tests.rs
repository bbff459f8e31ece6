//! Codec round-trip and parsing-policy tests

use cvsskit_core::{parse, serialize, MetricsRecord, VectorError, Version};

#[test]
fn test_roundtrip_base_only_all_versions() {
    let vectors = [
        "AV:N/AC:L/Au:N/C:C/I:C/A:C",
        "CVSS:3.0/AV:A/AC:H/PR:L/UI:R/S:C/C:H/I:L/A:N",
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
    ];
    for v in vectors {
        let record = parse(v).unwrap();
        assert_eq!(serialize(&record), v, "canonical form changed for {v}");
        assert_eq!(parse(&serialize(&record)).unwrap(), record);
    }
}

#[test]
fn test_roundtrip_with_optional_metrics() {
    let vectors = [
        "AV:N/AC:L/Au:N/C:C/I:C/A:C/E:F/RL:OF/RC:C/CDP:MH/TD:H/CR:M/IR:H/AR:L",
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F/RL:O/RC:C/CR:H/IR:M/AR:L/MAV:A/MAC:L/MPR:N/MUI:R/MS:C/MC:H/MI:L/MA:N",
        "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:P/CR:M/IR:L/AR:H/MAV:A/MAT:P/MSI:S/S:P/AU:Y/R:U/V:C/RE:M/U:Amber",
    ];
    for v in vectors {
        let record = parse(v).unwrap();
        assert_eq!(serialize(&record), v, "canonical form changed for {v}");
        assert_eq!(parse(&serialize(&record)).unwrap(), record);
    }
}

#[test]
fn test_default_records_roundtrip() {
    for version in [Version::V2, Version::V30, Version::V31, Version::V40] {
        let record = MetricsRecord::new(version);
        let roundtripped = parse(&serialize(&record)).unwrap();
        assert_eq!(roundtripped, record, "default record drifted for {version}");
    }
}

#[test]
fn test_out_of_order_pairs_canonicalize() {
    let record = parse("CVSS:3.1/A:H/C:H/I:H/S:U/UI:N/PR:N/AC:L/AV:N").unwrap();
    assert_eq!(
        serialize(&record),
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"
    );
}

#[test]
fn test_unrecognized_keys_ignored_not_rejected() {
    let record =
        parse("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/FUTURE:Z").unwrap();
    assert_eq!(record.get("FUTURE"), None);
    // and they disappear from the canonical form
    assert!(!serialize(&record).contains("FUTURE"));
}

#[test]
fn test_missing_header_is_the_only_hard_failure() {
    assert!(matches!(
        parse("CVSS:9.9/AV:N"),
        Err(VectorError::UnknownVersion(_))
    ));
    assert!(matches!(
        parse("completely wrong"),
        Err(VectorError::InvalidVectorFormat(_))
    ));
    // tolerant otherwise: unknown option codes parse fine
    let record = parse("CVSS:3.1/AV:WAT/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
    assert_eq!(record.get("AV"), Some("WAT"));
    // ...but strict validation flags them
    assert!(record.validate().is_err());
}

#[test]
fn test_headerless_requires_v2_shape() {
    assert!(parse("AV:N/AC:L/Au:N/C:C/I:C/A:C").is_ok());
    assert!(matches!(
        parse("VC:H/VI:H"),
        Err(VectorError::InvalidVectorFormat(_))
    ));
}
