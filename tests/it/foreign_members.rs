use geojson_codec::model::{Feature, FeatureCollection, GeometryCollection, Point};
use geojson_codec::{CodingOptions, GeoJsonDecode, GeoJsonEncode};
use serde_json::json;

use crate::helpers::feature_collection;

#[test]
fn fixture_properties_survive_as_foreign_member() {
    let options = CodingOptions::with_foreign_members();
    let collection = feature_collection(&options);
    assert_eq!(collection.foreign_members["properties"], json!({ "tolerance": 0.01 }));

    let encoded = collection.encode(&options).unwrap();
    let decoded = FeatureCollection::decode(&encoded, &options).unwrap();
    assert_eq!(decoded.foreign_members, collection.foreign_members);
}

#[test]
fn round_trip_preserves_extra_members_at_every_level() {
    let value = json!({
        "type": "FeatureCollection",
        "name": "layers",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "GeometryCollection",
                    "geometries": [{ "type": "Point", "coordinates": [1.0, 2.0] }],
                    "source": "survey"
                },
                "properties": null,
                "style": { "stroke": "#ff0000", "width": 2 }
            }
        ]
    });

    let options = CodingOptions::with_foreign_members();
    let collection = FeatureCollection::decode(&value, &options).unwrap();
    let feature = &collection.features[0];
    assert_eq!(feature.foreign_members["style"], json!({ "stroke": "#ff0000", "width": 2 }));

    let encoded = collection.encode(&options).unwrap();
    assert_eq!(encoded["name"], json!("layers"));
    assert_eq!(encoded["features"][0]["style"], value["features"][0]["style"]);
    assert_eq!(encoded["features"][0]["geometry"], value["features"][0]["geometry"]);

    let decoded = FeatureCollection::decode(&encoded, &options).unwrap();
    assert_eq!(decoded, collection);
}

#[test]
fn disabled_flag_never_emits_foreign_members() {
    let mut collection = GeometryCollection::new(vec![Point::new([1.0, 2.0]).into()]);
    collection.foreign_members.insert("source".into(), json!("survey"));

    let mut feature = Feature::new(collection);
    feature.foreign_members.insert("style".into(), json!("bold"));

    let encoded = feature.encode(&CodingOptions::default()).unwrap();
    assert_eq!(
        encoded,
        json!({
            "type": "Feature",
            "geometry": {
                "type": "GeometryCollection",
                "geometries": [{ "type": "Point", "coordinates": [1.0, 2.0] }]
            }
        })
    );
}
