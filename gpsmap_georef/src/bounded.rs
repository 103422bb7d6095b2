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

//! direct conversion between geographic and pixel coordinates for a fixed geographic rectangle that
//! is mapped onto an image. This is a plain linear approximation that is only suitable for small
//! areas, it does not involve any fitted transform.
//! Pixel row 0 is the northernmost row (top-left pixel origin)

use serde::{Serialize,Deserialize};
use gpsmap_common::BoundingBox;

use crate::GeoCoord;
use crate::errors::{Result, invalid_bounds, invalid_dimensions, out_of_bounds};

/// geographic rectangle in decimal degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoRectBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoRectBounds {
    pub fn new (north: f64, south: f64, east: f64, west: f64)->Result<Self> {
        let bounds = GeoRectBounds { north, south, east, west };
        bounds.check()?;
        Ok(bounds)
    }

    pub fn check (&self)->Result<()> {
        let GeoRectBounds { north, south, east, west } = *self;
        if !(north.is_finite() && south.is_finite() && east.is_finite() && west.is_finite()) {
            Err( invalid_bounds( format!("non-finite bounds {:?}", self)))
        } else if north <= south {
            Err( invalid_bounds( format!("north ({north}) has to be greater than south ({south})")))
        } else if east <= west {
            Err( invalid_bounds( format!("east ({east}) has to be greater than west ({west})")))
        } else {
            Ok(())
        }
    }

    /// inclusive on all edges. NaN coordinates are never contained
    pub fn contains (&self, lat: f64, lon: f64)->bool {
        self.to_bbox().contains( lon, lat)
    }

    pub fn to_bbox (&self)->BoundingBox<f64> {
        BoundingBox::new( self.west, self.south, self.east, self.north)
    }
}

/// how fractional pixel positions are rounded to pixel indices. Both only differ for exact .5 positions
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize,clap::ValueEnum)]
pub enum PixelRounding {
    /// round half to even (0.5 -> 0, 1.5 -> 2, 2.5 -> 2)
    #[default]
    TiesEven,
    /// round half away from zero (0.5 -> 1, 1.5 -> 2, 2.5 -> 3)
    TiesAway,
}

impl PixelRounding {
    #[inline]
    pub fn round (&self, v: f64)->f64 {
        match self {
            PixelRounding::TiesEven => v.round_ties_even(),
            PixelRounding::TiesAway => v.round(),
        }
    }
}

/// the explicit configuration of a bounded region mapping
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct BoundedRegionConfig {
    pub bounds: GeoRectBounds,
    pub image_width: u32,
    pub image_height: u32,

    #[serde(default)]
    pub rounding: PixelRounding,
}

impl Default for BoundedRegionConfig {
    fn default()->Self {
        BoundedRegionConfig {
            bounds: GeoRectBounds { north: -1.374593, south: -1.482999, east: 149.686722, west: 149.578094 },
            image_width: 2048,
            image_height: 2048,
            rounding: PixelRounding::TiesEven,
        }
    }
}

impl BoundedRegionConfig {
    pub fn check (&self)->Result<()> {
        self.bounds.check()?;
        check_dimensions( self.image_width, self.image_height)
    }

    pub fn to_pixel (&self, lat: f64, lon: f64)->Result<(u32,u32)> {
        to_pixel_with( lat, lon, &self.bounds, self.image_width, self.image_height, self.rounding)
    }

    pub fn to_geo (&self, x: f64, y: f64)->Result<GeoCoord> {
        to_geo( x, y, &self.bounds, self.image_width, self.image_height)
    }
}

/// map a geographic coordinate to the (x,y) pixel of a `image_width` x `image_height` image covering `bounds`,
/// using the default `PixelRounding`. Results are within `0..=image_width` and `0..=image_height`
pub fn to_pixel (lat: f64, lon: f64, bounds: &GeoRectBounds, image_width: u32, image_height: u32)->Result<(u32,u32)> {
    to_pixel_with( lat, lon, bounds, image_width, image_height, PixelRounding::default())
}

pub fn to_pixel_with (lat: f64, lon: f64, bounds: &GeoRectBounds, image_width: u32, image_height: u32, rounding: PixelRounding)->Result<(u32,u32)> {
    bounds.check()?;
    check_dimensions( image_width, image_height)?;

    if !bounds.contains( lat, lon) {
        return Err( out_of_bounds( format!("lat={lat}, lon={lon} outside of {bounds:?}")))
    }

    let bbox = bounds.to_bbox();
    let lon_per_pixel = bbox.width() / image_width as f64;
    let lat_per_pixel = bbox.height() / image_height as f64;
    if !(lon_per_pixel.is_normal() && lat_per_pixel.is_normal()) {
        return Err( invalid_bounds( format!("{bounds:?} too small for {image_width}x{image_height} pixels")))
    }

    let x = rounding.round( (lon - bounds.west) / lon_per_pixel);
    let y = rounding.round( (bounds.north - lat) / lat_per_pixel); // y axis is flipped

    Ok( (x as u32, y as u32) )
}

/// the inverse of `to_pixel` (without rounding): geographic coordinate of a (fractional) pixel position
pub fn to_geo (x: f64, y: f64, bounds: &GeoRectBounds, image_width: u32, image_height: u32)->Result<GeoCoord> {
    bounds.check()?;
    check_dimensions( image_width, image_height)?;

    let w = image_width as f64;
    let h = image_height as f64;
    if !(x >= 0.0 && x <= w && y >= 0.0 && y <= h) {
        return Err( out_of_bounds( format!("pixel ({x},{y}) outside of {image_width}x{image_height} image")))
    }

    let lon = bounds.west + x * (bounds.east - bounds.west) / w;
    let lat = bounds.north - y * (bounds.north - bounds.south) / h;

    Ok( GeoCoord { x: lon, y: lat } )
}

fn check_dimensions (image_width: u32, image_height: u32)->Result<()> {
    if image_width == 0 || image_height == 0 {
        Err( invalid_dimensions( format!("image dimensions must be positive, got {image_width}x{image_height}")))
    } else {
        Ok(())
    }
}
