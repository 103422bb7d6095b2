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

use anyhow::Result;
use serde::Serialize;
use gpsmap_common::{define_cli, check_cli, BoundingBox, fs::filename};
use gpsmap_georef::{load_control_points, fit_report, image_corners, format_corner, FitReport, ImageCorners};

define_cli! { ARGS [about="coordinate_transform - fit a linear pixel-to-geographic transform from control points and compute image bounds"] =
    width: u32 [help="image width in pixels", long],
    height: u32 [help="image height in pixels", long],
    json: bool [help="print results as JSON", long],
    control_points: String [help="CSV file with control points (description,latitude,longitude,image_x,image_y)"]
}

#[derive(Serialize)]
struct TransformResult<'a> {
    fit: &'a FitReport,
    corners: &'a ImageCorners,
    image_bounds: &'a BoundingBox<f64>,
}

fn main()->Result<()> {
    check_cli!(ARGS);
    gpsmap_common::init_env_tracing();

    let control_points = load_control_points( &ARGS.control_points)?;
    let report = fit_report( &control_points)?;
    let corners = image_corners( &report.transform, ARGS.width, ARGS.height)?;
    let image_bounds = corners.bounds();

    if ARGS.json {
        let res = TransformResult { fit: &report, corners: &corners, image_bounds: &image_bounds };
        println!("{}", serde_json::to_string_pretty( &res)?);
    } else {
        print_report( &report, &corners, &image_bounds);
    }

    Ok(())
}

fn print_report (report: &FitReport, corners: &ImageCorners, image_bounds: &BoundingBox<f64>) {
    let t = &report.transform;
    let src = filename( &ARGS.control_points).unwrap_or( ARGS.control_points.as_str());

    println!("Transform parameters ({} control points from {src}):", report.n_points);
    println!("  Scale factors: x={:.6}, y={:.6}", t.scale_x(), t.scale_y());
    println!("  Offsets: x={:.6}, y={:.6}", t.offset_x(), t.offset_y());

    let cb = &report.control_bounds;
    println!("\nControl point bounds:");
    println!("  Longitude: {:.6} to {:.6}", cb.min_lon(), cb.max_lon());
    println!("  Latitude:  {:.6} to {:.6}", cb.min_lat(), cb.max_lat());

    println!("\nTransformed corners (lon, lat):");
    for (name,c) in corners.named() {
        println!("  {}", format_corner( name, &c));
    }

    println!("\nTransformed image bounds:");
    println!("  Longitude: {:.6} to {:.6}", image_bounds.min_lon(), image_bounds.max_lon());
    println!("  Latitude:  {:.6} to {:.6}", image_bounds.min_lat(), image_bounds.max_lat());
}
