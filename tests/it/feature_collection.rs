use geojson_codec::model::{FeatureIdentifier, GeoJsonObject, Geometry, Kind, Position};
use geojson_codec::{CodingOptions, GeoJsonDecode, GeoJsonEncode};
use serde_json::{Value, json};

use crate::helpers::{FEATURE_COLLECTION, feature_collection};

#[test]
fn decodes_every_feature() {
    let collection = feature_collection(&CodingOptions::default());
    assert_eq!(collection.features.len(), 4);

    let Some(Geometry::LineString(line)) = &collection.features[0].geometry else {
        panic!("first feature should be a line string");
    };
    assert_eq!(line.coordinates.len(), 5);
    assert_eq!(line.coordinates[0].longitude, 27.977542877197266);
    assert_eq!(line.coordinates[0].latitude, -26.17500493262446);
    assert_eq!(collection.features[0].properties.as_ref().unwrap()["id"], json!(1));

    let Some(Geometry::Polygon(polygon)) = &collection.features[1].geometry else {
        panic!("second feature should be a polygon");
    };
    assert_eq!(polygon.coordinates[0].len(), 4);
    assert_eq!(polygon.coordinates[0][0], Position::new(27.972049713134762, -26.199035448897074));

    let Some(Geometry::Polygon(polygon)) = &collection.features[2].geometry else {
        panic!("third feature should be a polygon");
    };
    assert_eq!(polygon.coordinates.len(), 2);

    let point_feature = &collection.features[3];
    let Some(Geometry::Point(point)) = &point_feature.geometry else {
        panic!("fourth feature should be a point");
    };
    assert_eq!(point.coordinates, Position::new(27.95642852783203, -26.152510345365126));
    assert_eq!(point_feature.identifier, Some(FeatureIdentifier::Number(4.0)));
    assert_eq!(point_feature.properties.as_ref().unwrap()["id"], json!(4));
}

#[test]
fn round_trips_without_foreign_members() {
    let options = CodingOptions::default();
    let collection = feature_collection(&options);

    let encoded = collection.to_json_vec(&options).unwrap();
    let decoded = GeoJsonObject::from_json_slice(&encoded, &options).unwrap();
    assert_eq!(decoded, GeoJsonObject::FeatureCollection(collection));

    // The fixture's collection-level "properties" is not part of the schema
    let value: Value = serde_json::from_slice(&encoded).unwrap();
    assert!(value.get("properties").is_none());
}

#[test]
fn re_encoding_is_value_equivalent() {
    let options = CodingOptions::with_foreign_members();
    let object: GeoJsonObject = GeoJsonObject::from_json_str(FEATURE_COLLECTION, &options).unwrap();
    assert_eq!(object.kind(), Kind::FeatureCollection);

    let encoded = object.encode(&options).unwrap();
    let original: Value = serde_json::from_str(FEATURE_COLLECTION).unwrap();

    assert_eq!(encoded["features"][3]["id"], json!(4));
    assert_eq!(encoded["features"][3]["geometry"], original["features"][3]["geometry"]);
    assert_eq!(encoded["features"][2]["geometry"], original["features"][2]["geometry"]);
    assert_eq!(encoded["properties"], original["properties"]);
}

#[test]
fn decodes_through_serde() {
    let object: GeoJsonObject = serde_json::from_str(FEATURE_COLLECTION).unwrap();
    let GeoJsonObject::FeatureCollection(collection) = object else {
        panic!("expected a feature collection");
    };
    assert_eq!(collection.features.len(), 4);
    assert!(collection.foreign_members.is_empty());
}
