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

use std::fmt;
use serde::Serialize;

use crate::{GeoCoord, PixelCoord};
use crate::errors::{Result, degenerate_fit};

/// axis independent affine transform from pixel into geographic space:
/// ```text
///   lon = scale_x * pixel_x + offset_x
///   lat = scale_y * pixel_y + offset_y
/// ```
/// There are no rotation or shear terms, each axis is a separate 1-D scale+offset mapping.
/// Values can only be created through `new(..)` (or a fit), which guarantees finite terms and non-zero scales
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct AffineTransform {
    scale_x: f64,
    offset_x: f64,
    scale_y: f64,
    offset_y: f64,
}

impl AffineTransform {
    pub fn new (scale_x: f64, offset_x: f64, scale_y: f64, offset_y: f64)->Result<Self> {
        check_axis_terms( "x", scale_x, offset_x)?;
        check_axis_terms( "y", scale_y, offset_y)?;
        Ok( AffineTransform { scale_x, offset_x, scale_y, offset_y } )
    }

    #[inline] pub fn scale_x (&self)->f64 { self.scale_x }
    #[inline] pub fn offset_x (&self)->f64 { self.offset_x }
    #[inline] pub fn scale_y (&self)->f64 { self.scale_y }
    #[inline] pub fn offset_y (&self)->f64 { self.offset_y }

    #[inline]
    pub fn transform_coord (&self, c: PixelCoord)->GeoCoord {
        GeoCoord { x: self.scale_x * c.x + self.offset_x, y: self.scale_y * c.y + self.offset_y }
    }

    /// the transform for the opposite direction (geographic to pixel)
    pub fn inverse (&self)->Result<AffineTransform> {
        AffineTransform::new( 
            1.0 / self.scale_x, -self.offset_x / self.scale_x,
            1.0 / self.scale_y, -self.offset_y / self.scale_y
        )
    }

    /// the equivalent 6 parameter `geo` transform (cross terms are always zero)
    pub fn to_geo_affine (&self)->geo::AffineTransform<f64> {
        geo::AffineTransform::new( self.scale_x, 0.0, self.offset_x, 0.0, self.scale_y, self.offset_y)
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale=({:.6},{:.6}) offset=({:.6},{:.6})", self.scale_x, self.scale_y, self.offset_x, self.offset_y)
    }
}

fn check_axis_terms (axis: &str, scale: f64, offset: f64)->Result<()> {
    if !scale.is_finite() || !offset.is_finite() {
        Err( degenerate_fit( format!("non-finite {axis}-axis terms (scale={scale}, offset={offset})")))
    } else if scale == 0.0 {
        Err( degenerate_fit( format!("zero {axis}-axis scale")))
    } else {
        Ok(())
    }
}
