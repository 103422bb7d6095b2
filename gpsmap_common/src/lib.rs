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

//! shared infrastructure of the gpsmap tool crates: CLI and error definition macros, file and config
//! helpers, tracing setup and generic geometric value types

use serde::{Serialize,Deserialize};
use num::Num;
use geo_types::{Coord,CoordNum,Rect};
use tracing_subscriber::EnvFilter;

pub mod macros;
pub mod fs;
pub mod config;

pub use config::ConfigError;

/// a generic bounding box without semantics for the coordinate type.
/// For geographic coordinates `west`/`east` are the min/max longitude and `south`/`north` the min/max latitude
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    #[inline] pub fn min_lon (&self)->T { self.west }
    #[inline] pub fn max_lon (&self)->T { self.east }
    #[inline] pub fn min_lat (&self)->T { self.south }
    #[inline] pub fn max_lat (&self)->T { self.north }

    pub fn width (&self)->T { self.east - self.west }
    pub fn height (&self)->T { self.north - self.south }

    /// inclusive on all edges
    pub fn contains (&self, x: T, y: T)->bool {
        x >= self.west && x <= self.east && y >= self.south && y <= self.north
    }
}

impl <T: Num + CoordNum> From<Rect<T>> for BoundingBox<T> {
    fn from (rect: Rect<T>)->Self {
        let Coord{ x: west, y: south } = rect.min();
        let Coord{ x: east, y: north } = rect.max();
        BoundingBox{ west, south, east, north }
    }
}

/// install a `tracing` fmt subscriber that is configured through the `RUST_LOG` env var.
/// Output goes to stderr so that stdout stays reserved for tool results
pub fn init_env_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .init();
}
