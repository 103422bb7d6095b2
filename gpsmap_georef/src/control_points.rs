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

//! control points are verified correspondences between pixel and geographic coordinates, which
//! are the samples of the transform fit. They usually come from CSV files with a header row and
//! `description,latitude,longitude,image_x,image_y` columns

use std::io::Read;
use std::path::Path;
use serde::Serialize;
use csv::StringRecord;
use gpsmap_common::fs::existing_non_empty_file_from_path;

use crate::{GeoCoord, PixelCoord};
use crate::errors::{Result, malformed_input};

const LAT_COL: usize = 1;
const LON_COL: usize = 2;
const IMG_X_COL: usize = 3;
const IMG_Y_COL: usize = 4;
const MIN_COLS: usize = 5;

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct ControlPoint {
    pub description: String,
    pub pixel: PixelCoord,
    pub geo: GeoCoord, // x: longitude, y: latitude
}

impl ControlPoint {
    pub fn new (pixel: PixelCoord, geo: GeoCoord)->Result<Self> {
        if !(pixel.x.is_finite() && pixel.y.is_finite()) {
            return Err( malformed_input( format!("non-finite pixel coordinate {:?}", pixel)))
        }
        if !(geo.x.is_finite() && geo.y.is_finite()) {
            return Err( malformed_input( format!("non-finite geographic coordinate {:?}", geo)))
        }
        Ok( ControlPoint { description: String::new(), pixel, geo } )
    }

    pub fn from_pixel_lon_lat (img_x: f64, img_y: f64, lon: f64, lat: f64)->Result<Self> {
        Self::new( PixelCoord{ x: img_x, y: img_y }, GeoCoord{ x: lon, y: lat })
    }

    pub fn with_description (mut self, description: impl ToString)->Self {
        self.description = description.to_string();
        self
    }

    #[inline] pub fn longitude (&self)->f64 { self.geo.x }
    #[inline] pub fn latitude (&self)->f64 { self.geo.y }
}

/// read control points from CSV formatted input. The first row is a header and always skipped,
/// columns beyond the 5th are ignored
pub fn read_control_points (reader: impl Read)->Result<Vec<ControlPoint>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut control_points: Vec<ControlPoint> = Vec::new();

    for res in csv_reader.records() {
        let record = res?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < MIN_COLS {
            return Err( malformed_input( format!("line {line}: expected description,latitude,longitude,image_x,image_y but got {} columns", record.len())))
        }

        let lat = parse_field( &record, LAT_COL, "latitude", line)?;
        let lon = parse_field( &record, LON_COL, "longitude", line)?;
        let img_x = parse_field( &record, IMG_X_COL, "image_x", line)?;
        let img_y = parse_field( &record, IMG_Y_COL, "image_y", line)?;
        let description = record.get(0).unwrap_or_default();

        let cp = ControlPoint::from_pixel_lon_lat( img_x, img_y, lon, lat)?.with_description( description);
        control_points.push( cp);
    }

    tracing::debug!("read {} control points", control_points.len());
    Ok(control_points)
}

pub fn load_control_points (path: impl AsRef<Path>)->Result<Vec<ControlPoint>> {
    let file = existing_non_empty_file_from_path( path)?;
    read_control_points( file)
}

fn parse_field (record: &StringRecord, idx: usize, name: &str, line: u64)->Result<f64> {
    let s = record.get(idx).unwrap_or_default();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err( malformed_input( format!("line {line}: {name} is not a finite number: '{s}'")))
    }
}
