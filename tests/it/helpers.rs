use geojson_codec::{CodingOptions, GeoJsonDecode, model::FeatureCollection};

pub const FEATURE_COLLECTION: &str = include_str!("fixtures/featurecollection.geojson");

pub fn feature_collection(options: &CodingOptions) -> FeatureCollection {
    FeatureCollection::from_json_str(FEATURE_COLLECTION, options)
        .expect("fixture is a valid FeatureCollection")
}
