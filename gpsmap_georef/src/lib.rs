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

//! georeferencing core of the gpsmap tools: fitting axis independent affine transforms between pixel and
//! geographic coordinates from control points (`estimator`), applying them to points, geometries and
//! image rectangles (`mapper`), and direct geographic-to-pixel conversion for fixed regions (`bounded`).
//!
//! All operations are pure functions of their inputs. Errors are returned to the caller, this crate
//! never prints or exits

use geo_types::Coord;

pub mod errors;
pub use errors::{GeorefError, Result};

pub mod transform;
pub use transform::AffineTransform;

pub mod control_points;
pub use control_points::{ControlPoint, read_control_points, load_control_points};

pub mod estimator;
pub use estimator::{fit, fit_report, FitReport};

pub mod mapper;
pub use mapper::{apply, apply_point, apply_geometry, corner_bounds, image_corners, ImageCorners};

pub mod bounded;
pub use bounded::{to_pixel, to_pixel_with, to_geo, BoundedRegionConfig, GeoRectBounds, PixelRounding};

pub mod output;
pub use output::{format_pixel, format_corner, PixelOutputFormat};

/// pixel space coordinate (x: column, y: row, origin at top-left)
pub type PixelCoord = Coord<f64>;

/// geographic coordinate in decimal degrees (x: longitude, y: latitude)
pub type GeoCoord = Coord<f64>;
