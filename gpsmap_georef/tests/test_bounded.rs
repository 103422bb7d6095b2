/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use gpsmap_common::config::{load_config_path, parse_config};
use gpsmap_georef::{to_pixel, to_pixel_with, to_geo, BoundedRegionConfig, GeoRectBounds, GeorefError, PixelRounding};

// run with "cargo test test_xx -- --nocapture"

fn region_bounds()->GeoRectBounds {
    GeoRectBounds::new( -1.374593, -1.482999, 149.686722, 149.578094).unwrap()
}

#[test]
fn test_region_corners() {
    let bounds = region_bounds();

    let nw = to_pixel( -1.374593, 149.578094, &bounds, 2048, 2048).unwrap();
    println!("north-west corner -> {nw:?}");
    assert_eq!( nw, (0, 0));

    let se = to_pixel( -1.482999, 149.686722, &bounds, 2048, 2048).unwrap();
    println!("south-east corner -> {se:?}");
    assert_eq!( se, (2048, 2048));

    let ne = to_pixel( -1.374593, 149.686722, &bounds, 2048, 2048).unwrap();
    assert_eq!( ne, (2048, 0));

    let (x,y) = to_pixel( -1.42, 149.63, &bounds, 2048, 2048).unwrap();
    println!("(-1.42, 149.63) -> ({x}, {y})");
    assert!( x > 900 && x < 1000);
    assert!( y > 800 && y < 900);
}

#[test]
fn test_out_of_bounds() {
    let bounds = region_bounds();
    assert!( matches!( to_pixel( 0.0, 0.0, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_))));
    assert!( matches!( to_pixel( -1.37, 149.6, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_)))); // north of region
    assert!( matches!( to_pixel( -1.4, 149.7, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_)))); // east of region
    assert!( matches!( to_pixel( f64::NAN, 149.6, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_))));
}

#[test]
fn test_invalid_region() {
    assert!( matches!( GeoRectBounds::new( -1.5, -1.4, 149.7, 149.5), Err(GeorefError::InvalidBounds(_))));
    assert!( matches!( GeoRectBounds::new( -1.4, -1.5, 149.5, 149.7), Err(GeorefError::InvalidBounds(_))));
    assert!( matches!( GeoRectBounds::new( -1.4, -1.4, 149.7, 149.5), Err(GeorefError::InvalidBounds(_))));

    // unchecked bounds are still rejected on use
    let bounds = GeoRectBounds { north: -1.5, south: -1.4, east: 149.7, west: 149.5 };
    assert!( matches!( to_pixel( -1.45, 149.6, &bounds, 2048, 2048), Err(GeorefError::InvalidBounds(_))));

    let bounds = region_bounds();
    assert!( matches!( to_pixel( -1.4, 149.6, &bounds, 0, 2048), Err(GeorefError::InvalidDimensions(_))));
    assert!( matches!( to_pixel( -1.4, 149.6, &bounds, 2048, 0), Err(GeorefError::InvalidDimensions(_))));
}

#[test]
fn test_unresolvable_region() {
    // valid ordering, but the per-pixel step underflows to zero or a subnormal
    for east in [f64::MIN_POSITIVE * 1e-10, 1e-310, 5e-324] {
        let bounds = GeoRectBounds::new( -1.374593, -1.482999, east, 0.0).unwrap();
        match to_pixel( -1.4, 0.0, &bounds, 2048, 2048) {
            Err(GeorefError::InvalidBounds(msg)) => println!("east={east:e}: {msg}"),
            other => panic!("east={east:e}: expected InvalidBounds, got {other:?}")
        }
    }

    let bounds = GeoRectBounds::new( 1e-320, 0.0, 149.686722, 149.578094).unwrap();
    assert!( matches!( to_pixel( 0.0, 149.6, &bounds, 2048, 2048), Err(GeorefError::InvalidBounds(_))));
}

#[test]
fn test_rounding_ties() {
    // one degree per pixel so that fractional positions are exact
    let bounds = GeoRectBounds::new( 4.0, 0.0, 4.0, 0.0).unwrap();

    let even = |lat: f64, lon: f64| to_pixel_with( lat, lon, &bounds, 4, 4, PixelRounding::TiesEven).unwrap();
    let away = |lat: f64, lon: f64| to_pixel_with( lat, lon, &bounds, 4, 4, PixelRounding::TiesAway).unwrap();

    // x = lon, y = 4 - lat
    assert_eq!( even( 3.5, 0.5), (0, 0));
    assert_eq!( away( 3.5, 0.5), (1, 1));

    assert_eq!( even( 2.5, 1.5), (2, 2));
    assert_eq!( away( 2.5, 1.5), (2, 2));

    assert_eq!( even( 1.5, 2.5), (2, 2));
    assert_eq!( away( 1.5, 2.5), (3, 3));

    assert_eq!( even( 0.5, 3.5), (4, 4));
    assert_eq!( away( 0.5, 3.5), (4, 4));

    // the default policy is ties-to-even
    assert_eq!( to_pixel( 1.5, 2.5, &bounds, 4, 4).unwrap(), (2, 2));
    assert_eq!( PixelRounding::default(), PixelRounding::TiesEven);
}

#[test]
fn test_pixel_range() {
    let bounds = region_bounds();
    let n = 37;

    for i in 0..=n {
        let lat = (bounds.south + (bounds.north - bounds.south) * i as f64 / n as f64).min( bounds.north);
        for j in 0..=n {
            let lon = (bounds.west + (bounds.east - bounds.west) * j as f64 / n as f64).min( bounds.east);
            let (x,y) = to_pixel( lat, lon, &bounds, 2048, 2048).unwrap();
            assert!( x <= 2048 && y <= 2048, "({lat},{lon}) -> ({x},{y})");
        }
    }
}

#[test]
fn test_to_geo_roundtrip() {
    let bounds = region_bounds();

    for px in (0..=2048).step_by(128) {
        for py in (0..=2048).step_by(256) {
            let g = to_geo( px as f64, py as f64, &bounds, 2048, 2048).unwrap();
            let p = to_pixel( g.y, g.x, &bounds, 2048, 2048).unwrap();
            assert_eq!( p, (px, py));
        }
    }

    let g = to_geo( 0.0, 0.0, &bounds, 2048, 2048).unwrap();
    assert_eq!( (g.x, g.y), (bounds.west, bounds.north));

    assert!( matches!( to_geo( -1.0, 0.0, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_))));
    assert!( matches!( to_geo( 0.0, 2049.0, &bounds, 2048, 2048), Err(GeorefError::OutOfBounds(_))));
}

#[test]
fn test_region_config() {
    let config = BoundedRegionConfig::default();
    config.check().unwrap();
    assert_eq!( config.bounds, region_bounds());
    assert_eq!( config.to_pixel( -1.374593, 149.578094).unwrap(), (0, 0));
    assert_eq!( config.to_pixel( -1.482999, 149.686722).unwrap(), (2048, 2048));

    let g = config.to_geo( 2048.0, 2048.0).unwrap();
    assert!( (g.x - 149.686722).abs() < 1e-12 && (g.y - -1.482999).abs() < 1e-12);

    let path = concat!( env!("CARGO_MANIFEST_DIR"), "/configs/geo_to_pixel.ron");
    let shipped: BoundedRegionConfig = load_config_path( path).unwrap();
    println!("shipped config: {shipped:?}");
    assert_eq!( shipped, config);

    let small: BoundedRegionConfig = parse_config( r#"(
        bounds: ( north: 4.0, south: 0.0, east: 4.0, west: 0.0 ),
        image_width: 4,
        image_height: 4,
    )"#).unwrap();
    assert_eq!( small.rounding, PixelRounding::TiesEven);
    assert_eq!( small.to_pixel( 3.5, 0.5).unwrap(), (0, 0));

    let away = BoundedRegionConfig { rounding: PixelRounding::TiesAway, ..small };
    assert_eq!( away.to_pixel( 3.5, 0.5).unwrap(), (1, 1));
}
