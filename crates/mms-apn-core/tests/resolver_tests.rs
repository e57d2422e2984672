//! Selection behaviour of the bulk and network APN paths

use mms_apn_core::prelude::*;

fn record(apn_type: &str, mmsc: &str, proxy: &str, port: &str) -> ApnRecord {
    ApnRecord::new()
        .with("type", apn_type)
        .with("mmsc", mmsc)
        .with("mmsproxy", proxy)
        .with("mmsport", port)
}

#[test]
fn test_skips_empty_mmsc_and_normalizes_proxy() {
    let candidates = vec![
        record("*", "", "", ""),
        record("mms", "http://mmsc.example/", "10.000.000.001", "8080"),
    ];

    let settings = resolve(&candidates, APN_TYPE_MMS, "scenario-1").unwrap();
    assert_eq!(settings.mmsc_url(), "http://mmsc.example/");
    assert_eq!(settings.proxy_address(), Some("10.0.0.1"));
    assert_eq!(settings.proxy_port(), 8080);
}

#[test]
fn test_malformed_mmsc_fails() {
    let candidates = vec![record("mms", "not a valid uri://", "", "")];

    match resolve(&candidates, APN_TYPE_MMS, "scenario-2") {
        Err(Error::InvalidMmscUrl(url)) => assert_eq!(url, "not a valid uri://"),
        other => panic!("expected InvalidMmscUrl, got {:?}", other),
    }
}

#[test]
fn test_malformed_mmsc_stops_before_later_valid_row() {
    let candidates = vec![
        record("mms", "http://mmsc.example/a b", "", ""),
        record("mms", "http://mmsc.example/", "", ""),
    ];

    assert!(matches!(
        resolve(&candidates, APN_TYPE_MMS, "abort"),
        Err(Error::InvalidMmscUrl(_))
    ));
}

#[test]
fn test_type_mismatch_fails() {
    let candidates = vec![record("supl", "http://x/", "", "")];

    assert!(matches!(
        resolve(&candidates, APN_TYPE_MMS, "scenario-3"),
        Err(Error::NoValidApn)
    ));
}

#[test]
fn test_no_matching_type_anywhere_fails() {
    let candidates = vec![
        record("default", "http://a/", "", ""),
        record("supl, default", "http://b/", "", ""),
        record("ims", "http://c/", "proxy", "8080"),
    ];

    let err = resolve(&candidates, APN_TYPE_MMS, "none").unwrap_err();
    assert!(matches!(err, Error::NoValidApn));
    assert_eq!(err.to_string(), "Can not find valid APN");
}

#[test]
fn test_untyped_rows_match_any_request() {
    let candidates = vec![
        ApnRecord::new().with("mmsc", "   "),
        ApnRecord::new().with("mmsc", "http://first-usable/"),
        ApnRecord::new().with("mmsc", "http://second-usable/"),
    ];

    for requested in [APN_TYPE_MMS, APN_TYPE_SUPL, APN_TYPE_DEFAULT, "ims"] {
        let settings = resolve(&candidates, requested, "untyped").unwrap();
        assert_eq!(settings.mmsc_url(), "http://first-usable/");
    }
}

#[test]
fn test_empty_mmsc_on_first_match_falls_through() {
    let candidates = vec![
        record("mms", "", "proxy.one", "1111"),
        record("mms", "http://mmsc.two/", "proxy.two", "2222"),
    ];

    let settings = resolve(&candidates, APN_TYPE_MMS, "fallthrough").unwrap();
    assert_eq!(settings.mmsc_url(), "http://mmsc.two/");
    assert_eq!(settings.proxy_address(), Some("proxy.two"));
    assert_eq!(settings.proxy_port(), 2222);
}

#[test]
fn test_proxy_port_defaults() {
    let cases = [
        ("", "8080"),
        ("proxy", ""),
        ("proxy", "eighty"),
        ("proxy", "80.5"),
    ];

    for (proxy, port) in cases {
        let candidates = vec![record("mms", "http://mmsc/", proxy, port)];
        let settings = resolve(&candidates, APN_TYPE_MMS, "ports").unwrap();
        assert_eq!(settings.proxy_port(), DEFAULT_PROXY_PORT, "proxy {:?} port {:?}", proxy, port);
    }
}

#[test]
fn test_all_type_in_list_matches() {
    let candidates = vec![record("default, *", "http://mmsc/", "", "")];
    assert!(resolve(&candidates, APN_TYPE_MMS, "all").is_ok());
}

#[test]
fn test_descriptor_lists_non_empty_columns() {
    let row = record("mms", "http://mmsc/", "", "")
        .with("name", "Operator")
        .with("apn", "mms.op")
        .with("authtype", "0")
        .with("user", "");

    let settings = resolve([&row], APN_TYPE_MMS, "descriptor").unwrap();
    assert_eq!(
        settings.debug_text(),
        "APN [type=mms mmsc=http://mmsc/ name=Operator apn=mms.op authtype=0]"
    );
}

#[test]
fn test_control_characters_around_mmsc_are_trimmed() {
    let candidates = vec![record("mms", "\u{1}http://mmsc.example/\u{1}", "\u{0}proxy\t", "\u{7}8080")];

    let settings = resolve(&candidates, APN_TYPE_MMS, "controls").unwrap();
    assert_eq!(settings.mmsc_url(), "http://mmsc.example/");
    assert_eq!(settings.proxy_address(), Some("proxy"));
    assert_eq!(settings.proxy_port(), 8080);
}

#[test]
fn test_trailing_no_break_space_is_invalid() {
    let candidates = vec![record("mms", "http://mmsc.example/\u{a0}", "", "")];

    match resolve(&candidates, APN_TYPE_MMS, "nbsp") {
        Err(Error::InvalidMmscUrl(url)) => assert_eq!(url, "http://mmsc.example/\u{a0}"),
        other => panic!("expected InvalidMmscUrl, got {:?}", other),
    }
}

#[test]
fn test_network_apn_without_mmsc() {
    let apn = NetworkApnSetting::new("Operator", "mms.op").with_mms_proxy("proxy", Some(8080));
    assert!(ApnSettings::from_network_apn(&apn).is_none());
}

#[test]
fn test_network_apn_keeps_proxy_zero_padding() {
    // The bulk path would rewrite this proxy to 10.0.0.1; the network path
    // only trims it. Known inconsistency between the two paths.
    let apn = NetworkApnSetting::new("Operator", "mms.op")
        .with_mmsc("http://mmsc.op/")
        .with_mms_proxy(" 10.000.000.001 ", Some(3128));

    let settings = ApnSettings::from_network_apn(&apn).unwrap();
    assert_eq!(settings.proxy_address(), Some("10.000.000.001"));
    assert_eq!(settings.proxy_port(), 3128);

    let candidates = vec![record("mms", "http://mmsc.op/", " 10.000.000.001 ", "3128")];
    let bulk = resolve(&candidates, APN_TYPE_MMS, "compare").unwrap();
    assert_eq!(bulk.proxy_address(), Some("10.0.0.1"));
}

#[test]
fn test_network_apn_skips_uri_validation() {
    // The bulk path rejects this MMSC; the network path passes it through.
    let apn = NetworkApnSetting::new("Operator", "mms.op").with_mmsc("not a valid uri://");

    let settings = ApnSettings::from_network_apn(&apn).unwrap();
    assert_eq!(settings.mmsc_url(), "not a valid uri://");
    assert_eq!(settings.debug_text(), apn.to_string());
}

struct FixedApn;

impl std::fmt::Display for FixedApn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("fixed apn")
    }
}

impl NetworkApn for FixedApn {
    fn mmsc(&self) -> Option<&str> {
        Some("http://fixed/")
    }

    fn mms_proxy_address(&self) -> Option<&str> {
        None
    }

    fn mms_proxy_port(&self) -> Option<u16> {
        Some(9000)
    }
}

#[test]
fn test_custom_network_apn() {
    let settings = ApnSettings::from_network_apn(&FixedApn).unwrap();
    assert_eq!(settings.mmsc_url(), "http://fixed/");
    assert_eq!(settings.proxy_port(), DEFAULT_PROXY_PORT);
    assert_eq!(settings.debug_text(), "fixed apn");

    let boxed: Box<dyn NetworkApn> = Box::new(FixedApn);
    assert!(ApnSettings::from_network_apn(boxed.as_ref()).is_some());
}
