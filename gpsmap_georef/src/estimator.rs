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

//! least squares estimation of pixel-to-geographic transforms from control points.
//! The x- and y-axis are fitted as two independent 1-D linear regressions
//! (pixel_x -> longitude and pixel_y -> latitude). Cross terms are never modeled, i.e.
//! rotated control point layouts are not compensated

use serde::Serialize;
use geo::BoundingRect;
use geo_types::MultiPoint;
use linreg::linear_regression;
use gpsmap_common::BoundingBox;

use crate::control_points::ControlPoint;
use crate::transform::AffineTransform;
use crate::errors::{GeorefError, Result, degenerate_fit};

pub const MIN_CONTROL_POINTS: usize = 2;

/// the structured result of a fit, for callers that want to report more than the transform itself
#[derive(Debug,Clone,Serialize)]
pub struct FitReport {
    pub transform: AffineTransform,
    pub control_bounds: BoundingBox<f64>, // geographic range covered by the control points
    pub n_points: usize,
}

/// fit an axis independent affine transform to the given control points
pub fn fit (control_points: &[ControlPoint])->Result<AffineTransform> {
    let n = control_points.len();
    if n < MIN_CONTROL_POINTS {
        return Err( GeorefError::InsufficientData(n))
    }

    let pixel_xs: Vec<f64> = control_points.iter().map(|cp| cp.pixel.x).collect();
    let pixel_ys: Vec<f64> = control_points.iter().map(|cp| cp.pixel.y).collect();
    let lons: Vec<f64> = control_points.iter().map(|cp| cp.geo.x).collect();
    let lats: Vec<f64> = control_points.iter().map(|cp| cp.geo.y).collect();

    let (scale_x, offset_x) = fit_axis( "x", &pixel_xs, &lons)?;
    let (scale_y, offset_y) = fit_axis( "y", &pixel_ys, &lats)?;

    let transform = AffineTransform::new( scale_x, offset_x, scale_y, offset_y)?;
    tracing::debug!( scale_x, scale_y, offset_x, offset_y, n_points = n, "fitted transform");

    Ok(transform)
}

/// fit and collect the geographic bounds of the control points
pub fn fit_report (control_points: &[ControlPoint])->Result<FitReport> {
    let transform = fit( control_points)?;
    let control_bounds = geo_bounds( control_points)?;

    Ok( FitReport { transform, control_bounds, n_points: control_points.len() } )
}

/// bounding box of the geographic coordinates of the control points
pub fn geo_bounds (control_points: &[ControlPoint])->Result<BoundingBox<f64>> {
    let mp: MultiPoint<f64> = control_points.iter().map(|cp| cp.geo).collect();
    mp.bounding_rect()
        .map( BoundingBox::from)
        .ok_or( GeorefError::InsufficientData(control_points.len()))
}

/// ordinary least squares for `geo ≈ scale * pixel + offset`
fn fit_axis (axis: &str, pixels: &[f64], geos: &[f64])->Result<(f64,f64)> {
    let p0 = pixels[0];
    if pixels.iter().all(|p| *p == p0) {
        return Err( degenerate_fit( format!("all control points share pixel_{axis} = {p0}")))
    }

    let g0 = geos[0];
    if geos.iter().all(|g| *g == g0) {
        return Err( degenerate_fit( format!("no geographic variation along {axis}-axis (all {g0})")))
    }

    let (scale, offset): (f64,f64) = linear_regression( pixels, geos)
        .map_err(|e| degenerate_fit( format!("{axis}-axis regression failed: {e}")))?;

    // the geo range spanned by the fitted scale has to be resolvable at the magnitude of the samples
    let (pmin, pmax) = pixels.iter().fold( (f64::INFINITY, f64::NEG_INFINITY), |(lo,hi),p| (lo.min(*p), hi.max(*p)));
    let geo_magnitude = geos.iter().fold( 0.0f64, |m,g| m.max( g.abs()));
    if scale.abs() * (pmax - pmin) <= f64::EPSILON * geo_magnitude {
        return Err( degenerate_fit( format!("near-zero {axis}-axis scale {scale}")))
    }

    Ok( (scale, offset) )
}
