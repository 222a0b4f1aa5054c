//! Tests for the WASM-facing generation helpers.

use super::*;

/// The default record produces the default square ring.
#[test]
fn empty_query_generates_default_ring() {
    let mesh = generate_from_query_internal("").expect("default parameters are valid");

    assert_eq!(mesh.triangle_count(), 2 * 4 * 100);
    assert_eq!(mesh.vertex_count(), 3 * mesh.triangle_count());
    assert_eq!(mesh.colour(), "#3388ff");
}

/// Buffers are flat xyz triples, one per vertex entry.
#[test]
fn buffers_match_counts() {
    let mesh = generate_from_query_internal("?geometryType=rounded&sides=3&segments=12")
        .expect("generation succeeds");

    let expected = mesh.vertex_count() as usize * 3;
    assert_eq!(mesh.vertex_buffer().len(), expected);
    assert_eq!(mesh.normal_buffer().len(), expected);
    assert!(mesh.vertex_buffer().iter().all(|v| v.is_finite()));
    assert!(mesh.normal_buffer().iter().all(|n| n.is_finite()));
}

#[test]
fn query_colour_is_decoded() {
    let mesh = generate_from_query_internal("colour=%23ff0000&segments=4").unwrap();
    assert_eq!(mesh.colour(), "#ff0000");
}

#[test]
fn json_generation() {
    let mesh = generate_from_json_internal(r#"{"sides":3,"segments":8,"twist":0}"#)
        .expect("generation succeeds");
    assert_eq!(mesh.triangle_count(), 48);
    assert!(!mesh.is_empty());
}

/// Invalid records surface explicit errors.
#[test]
fn invalid_parameters_rejected() {
    let err = generate_from_query_internal("sides=2").unwrap_err();
    assert!(err.to_string().contains("sides"));

    assert!(generate_from_query_internal("segments=ten").is_err());
    assert!(generate_from_json_internal("{not json").is_err());
}

#[test]
fn default_query_round_trips() {
    let query = default_query();
    let params = MobiusParams::from_query_string(&query).unwrap();
    assert_eq!(params, MobiusParams::default());
}

#[test]
fn normalize_query_orders_keys() {
    let query = normalize_query("twist=2&geometryType=Rounded").unwrap();
    assert!(query.starts_with("geometryType=rounded&segments=100&"));
    assert!(query.ends_with("&twist=2"));
}

/// Oversized rings fail with an error instead of exhausting memory.
#[test]
fn oversized_query_rejected() {
    let err = generate_from_query_internal("sides=3&segments=1000000000").unwrap_err();
    assert!(matches!(err, MobiusError::TooManyTriangles { .. }));
}
