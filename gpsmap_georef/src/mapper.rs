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

//! application of fitted (or externally supplied) transforms to points, geometries and image rectangles

use serde::Serialize;
use geo::AffineOps;
use geo_types::Coord;
use gpsmap_common::BoundingBox;

use crate::{GeoCoord, PixelCoord};
use crate::transform::AffineTransform;
use crate::output::format_corner;
use crate::errors::{Result, invalid_dimensions};

/// map each point independently. Output has the same order and count as the input
pub fn apply (transform: &AffineTransform, points: &[Coord<f64>])->Vec<Coord<f64>> {
    points.iter().map(|p| transform.transform_coord(*p)).collect()
}

#[inline]
pub fn apply_point (transform: &AffineTransform, point: Coord<f64>)->Coord<f64> {
    transform.transform_coord(point)
}

/// transform arbitrary `geo` geometries such as GPS track LineStrings
pub fn apply_geometry<G> (transform: &AffineTransform, geometry: &G)->G where G: AffineOps<f64> {
    geometry.affine_transform( &transform.to_geo_affine())
}

/// the transformed corners of an image rectangle
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct ImageCorners {
    pub top_left: GeoCoord,
    pub top_right: GeoCoord,
    pub bottom_right: GeoCoord,
    pub bottom_left: GeoCoord,
}

impl ImageCorners {
    pub const NAMES: [&'static str;4] = ["Top-left", "Top-right", "Bottom-right", "Bottom-left"];

    /// corners in fixed top-left, top-right, bottom-right, bottom-left order
    pub fn to_array (&self)->[GeoCoord;4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    pub fn named (&self)->impl Iterator<Item=(&'static str,GeoCoord)> {
        Self::NAMES.into_iter().zip( self.to_array())
    }

    pub fn bounds (&self)->BoundingBox<f64> {
        let tl = self.top_left;
        self.to_array().iter().skip(1).fold( BoundingBox::new( tl.x, tl.y, tl.x, tl.y), |bb,c| {
            BoundingBox::new( bb.west.min(c.x), bb.south.min(c.y), bb.east.max(c.x), bb.north.max(c.y))
        })
    }
}

/// the corners (0,0),(w,0),(w,h),(0,h) of a `width` x `height` image in pixel space
pub fn pixel_corners (width: u32, height: u32)->Result<[PixelCoord;4]> {
    if width == 0 || height == 0 {
        return Err( invalid_dimensions( format!("image dimensions must be positive, got {width}x{height}")))
    }
    let w = width as f64;
    let h = height as f64;

    Ok( [ PixelCoord{x: 0.0, y: 0.0}, PixelCoord{x: w, y: 0.0}, PixelCoord{x: w, y: h}, PixelCoord{x: 0.0, y: h} ] )
}

pub fn image_corners (transform: &AffineTransform, width: u32, height: u32)->Result<ImageCorners> {
    let corners = apply( transform, &pixel_corners( width, height)?);
    let ic = ImageCorners {
        top_left: corners[0],
        top_right: corners[1],
        bottom_right: corners[2],
        bottom_left: corners[3],
    };

    for (name,c) in ic.named() {
        tracing::debug!("{}", format_corner( name, &c));
    }
    Ok(ic)
}

/// geographic bounding box of a transformed `width` x `height` image
pub fn corner_bounds (transform: &AffineTransform, width: u32, height: u32)->Result<BoundingBox<f64>> {
    Ok( image_corners( transform, width, height)?.bounds() )
}
