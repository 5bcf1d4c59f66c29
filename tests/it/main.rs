/*! Integration tests for geojson-codec.
 *
 * A single integration test binary exercising the public API:
 * - feature_collection: decoding and re-encoding a full FeatureCollection document
 * - foreign_members: round-tripping members outside the GeoJSON schema
 * - stream: newline-delimited reading and writing (`stream` feature)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("geojson_codec=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod feature_collection;
mod foreign_members;
mod helpers;
#[cfg(feature = "stream")]
mod stream;
