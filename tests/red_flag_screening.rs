use house_analysis::{HouseListing, RedFlagDetector, ScreeningRecommendation};

fn park_listing() -> HouseListing {
    serde_json::from_value(serde_json::json!({
        "Identifiers": { "TinyId": "40112233" },
        "ListingDescription": {
            "Title": "Chalet op Recreatiepark De Berkenhorst",
            "Description": "Gezellig chalet op een goed onderhouden park van Landal. \
                            Jaarlijkse parkkosten bedragen 2800 euro."
        },
        "KenmerkSections": [{
            "Title": "Kenmerken",
            "KenmerkenList": [
                { "Label": "Bouwjaar", "Value": "1985" },
                { "Label": "Eigendomssituatie", "Value": "Eigen grond" }
            ]
        }],
        "AddressDetails": { "SubTitle": "8384 AB Wilhelminaoord", "City": "Wilhelminaoord" }
    }))
    .expect("fixture listing deserializes")
}

fn clean_listing() -> HouseListing {
    serde_json::from_value(serde_json::json!({
        "Identifiers": { "TinyId": "40445566" },
        "ListingDescription": {
            "Title": "Vrijstaande recreatiewoning",
            "Description": "Recent gebouwde woning op eigen grond, direct aan het bos."
        }
    }))
    .expect("fixture listing deserializes")
}

#[test]
fn park_operator_listings_are_rejected() {
    let detector = RedFlagDetector::new();
    let scan = detector.scan(&park_listing());

    assert_eq!(scan.recommendation, ScreeningRecommendation::Reject);
    assert!(scan.is_reject());
    assert!(scan
        .dealbreakers
        .iter()
        .any(|flag| flag.pattern.contains("landal")));
}

#[test]
fn clean_listings_come_back_suitable() {
    let detector = RedFlagDetector::new();
    let scan = detector.scan(&clean_listing());

    assert_eq!(scan.recommendation, ScreeningRecommendation::Suitable);
    assert!(scan.dealbreakers.is_empty());
    assert!(scan.warnings.is_empty());
    assert_eq!(scan.total_weight, 0);
}

#[test]
fn feature_rows_are_scanned_alongside_the_description() {
    let mut detector = RedFlagDetector::empty();
    detector.add_warning("1985 bouwjaar", "Ouder chalet, hogere onderhoudskosten", 40);

    let scan = detector.scan(&park_listing());
    assert_eq!(scan.recommendation, ScreeningRecommendation::FurtherReview);
    assert_eq!(scan.total_weight, 40);
}

#[test]
fn custom_warnings_alone_can_force_a_reject() {
    let mut detector = RedFlagDetector::empty();
    detector.add_warning("parkkosten", "Doorlopende parkkosten", 60);
    detector.add_warning("landal", "Parkexploitant beperkt vrije verhuur", 60);

    let scan = detector.scan(&park_listing());
    assert_eq!(scan.recommendation, ScreeningRecommendation::Reject);
    assert!(scan.dealbreakers.is_empty());
    assert_eq!(scan.total_weight, 120);
}

#[test]
fn scan_result_serializes_with_wire_labels() {
    let detector = RedFlagDetector::new();
    let json = serde_json::to_value(detector.scan(&park_listing())).expect("scan serializes");

    assert_eq!(json["recommendation"], "REJECT");
    assert_eq!(json["confidence"], "HIGH");
    assert!(json["dealbreakers"].as_array().is_some());
}
