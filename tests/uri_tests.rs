use bluebird::errors::AppError;
use bluebird::provider::uri::{
    AUTHORITY, ResourceKind, Route, all_boxes_uri, all_observations_uri, box_observations_uri,
    box_uri, observation_uri, route,
};

fn uri(path: &str) -> String {
    format!("content://{}/{}", AUTHORITY, path)
}

fn assert_unrecognized(candidate: &str) {
    match route(candidate) {
        Err(AppError::UnrecognizedResource(u)) => assert_eq!(u, candidate),
        other => panic!("expected UnrecognizedResource for {candidate}, got {other:?}"),
    }
}

#[test]
fn test_routes_every_kind() {
    let cases = [
        ("boxes", ResourceKind::Boxes, None),
        ("box/5", ResourceKind::BoxId, Some(5)),
        ("observations", ResourceKind::Observations, None),
        ("observation/12", ResourceKind::ObservationId, Some(12)),
        ("observations/box/3", ResourceKind::ObservationsBoxId, Some(3)),
    ];

    for (path, kind, id) in cases {
        let r = route(&uri(path)).unwrap();
        assert_eq!(
            r,
            Route { kind, id },
            "routing {path}"
        );
    }
}

#[test]
fn test_trailing_slash_is_tolerated() {
    assert_eq!(route(&uri("boxes/")).unwrap().kind, ResourceKind::Boxes);
    assert_eq!(route(&uri("box/9/")).unwrap().id, Some(9));
}

#[test]
fn test_unknown_paths_are_rejected() {
    for path in [
        "unknown",
        "",
        "box",
        "box/",
        "box//",
        "box/1/2",
        "observations/box",
        "observations/box/",
        "observations/7",
        "boxes?sort=asc",
        "Boxes",
    ] {
        assert_unrecognized(&uri(path));
    }
}

#[test]
fn test_wrong_scheme_or_authority_is_rejected() {
    assert_unrecognized("http://bluebird.tracking.data/boxes");
    assert_unrecognized("content://other.authority/boxes");
    assert_unrecognized("content:/bluebird.tracking.data/boxes");
    assert_unrecognized("bluebird.tracking.data/boxes");
    assert_unrecognized("");
}

#[test]
fn test_id_segment_must_be_numeric() {
    for path in [
        "box/abc",
        "box/12a",
        "box/-1",
        "box/+1",
        "box/1.5",
        "box/%201",
        "observation/x",
        "observations/box/one",
        "box/99999999999999999999",
    ] {
        assert_unrecognized(&uri(path));
    }

    assert_eq!(route(&uri("box/007")).unwrap().id, Some(7));
}

#[test]
fn test_constructors_route_back() {
    assert_eq!(route(&all_boxes_uri()).unwrap().kind, ResourceKind::Boxes);
    assert_eq!(
        route(&all_observations_uri()).unwrap().kind,
        ResourceKind::Observations
    );

    let r = route(&box_uri(7)).unwrap();
    assert_eq!((r.kind, r.id), (ResourceKind::BoxId, Some(7)));

    let r = route(&observation_uri(42)).unwrap();
    assert_eq!(
        (r.kind, r.id),
        (ResourceKind::ObservationId, Some(42))
    );

    let r = route(&box_observations_uri(3)).unwrap();
    assert_eq!(
        (r.kind, r.id),
        (ResourceKind::ObservationsBoxId, Some(3))
    );

    assert_eq!(box_uri(7), "content://bluebird.tracking.data/box/7");
}

#[test]
fn test_mime_types_follow_collection_or_item() {
    assert!(ResourceKind::Boxes.is_collection());
    assert!(ResourceKind::ObservationsBoxId.is_collection());
    assert!(!ResourceKind::BoxId.is_collection());

    for kind in [
        ResourceKind::Boxes,
        ResourceKind::Observations,
        ResourceKind::ObservationsBoxId,
    ] {
        assert!(kind.mime_type().starts_with("vnd.android.cursor.dir/"));
    }
    for kind in [ResourceKind::BoxId, ResourceKind::ObservationId] {
        assert!(kind.mime_type().starts_with("vnd.android.cursor.item/"));
    }
}
