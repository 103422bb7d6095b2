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

use serde::Serialize;

use crate::GeoCoord;
use crate::errors::Result;

/// output formats for pixel coordinates
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,clap::ValueEnum)]
pub enum PixelOutputFormat {
    /// "x y"
    #[default]
    Plain,
    /// {"x": .., "y": ..}
    Json,
    /// "x,y" header line followed by the values
    Csv,
}

#[derive(Debug,Serialize)]
struct Pixel {
    x: u32,
    y: u32,
}

pub fn format_pixel (x: u32, y: u32, format: PixelOutputFormat)->Result<String> {
    let s = match format {
        PixelOutputFormat::Plain => format!("{x} {y}"),
        PixelOutputFormat::Json => serde_json::to_string_pretty( &Pixel{x,y})?,
        PixelOutputFormat::Csv => format!("x,y\n{x},{y}"),
    };
    Ok(s)
}

/// a named corner line of the transform report, e.g. "Top-left   : (149.578094, -1.374593)"
pub fn format_corner (name: &str, c: &GeoCoord)->String {
    format!("{name:11}: ({:.6}, {:.6})", c.x, c.y)
}
