use std::io::{BufReader, Cursor};

use geojson_codec::model::{Feature, GeoJsonObject, Point};
use geojson_codec::{CodingOptions, GeoJsonRead, GeoJsonWrite};

#[test]
fn writes_and_reads_a_sequence() {
    let options = CodingOptions::default();
    let objects = vec![
        GeoJsonObject::new(Point::new([1.0, 2.0])),
        GeoJsonObject::new(Feature::new(Point::new([3.0, 4.0])).with_identifier("b")),
        GeoJsonObject::new(Feature::unlocated()),
    ];

    let mut out = Vec::new();
    for object in &objects {
        out.write_object(object, &options).unwrap();
    }

    let mut reader = BufReader::new(Cursor::new(out));
    let mut buf = String::new();
    let mut decoded = Vec::new();
    while let Some(object) = reader.read_object::<GeoJsonObject>(&mut buf, &options).unwrap() {
        decoded.push(object);
    }

    assert_eq!(decoded, objects);
}

#[test]
fn stops_at_the_first_invalid_text() {
    let input = "{\"type\":\"Point\",\"coordinates\":[1,2]}\n{\"type\":\"Bogus\"}\n";
    let mut reader = Cursor::new(input);
    let mut buf = String::new();
    let options = CodingOptions::default();

    let first = reader.read_object::<GeoJsonObject>(&mut buf, &options).unwrap();
    assert!(first.is_some());
    assert!(reader.read_object::<GeoJsonObject>(&mut buf, &options).is_err());
}
