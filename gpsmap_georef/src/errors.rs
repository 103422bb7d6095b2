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

use gpsmap_common::{define_error, ConfigError};

pub type Result<T> = std::result::Result<T, GeorefError>;

define_error!{ pub GeorefError = 
    InsufficientData(usize) : "insufficient data: at least 2 control points required, got {0}",
    DegenerateFit(String) : "degenerate fit: {0}",
    InvalidDimensions(String) : "invalid dimensions: {0}",
    OutOfBounds(String) : "coordinate out of bounds: {0}",
    InvalidBounds(String) : "invalid bounds: {0}",
    MalformedInput(String) : "malformed input: {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    CsvError(#[from] csv::Error) : "CSV error: {0}",
    ConfigError(#[from] ConfigError) : "config error: {0}",
    JsonError(#[from] serde_json::Error) : "JSON error: {0}"
}

pub fn degenerate_fit<S: ToString> (msg: S)->GeorefError {
    GeorefError::DegenerateFit(msg.to_string())
}

pub fn invalid_dimensions<S: ToString> (msg: S)->GeorefError {
    GeorefError::InvalidDimensions(msg.to_string())
}

pub fn out_of_bounds<S: ToString> (msg: S)->GeorefError {
    GeorefError::OutOfBounds(msg.to_string())
}

pub fn invalid_bounds<S: ToString> (msg: S)->GeorefError {
    GeorefError::InvalidBounds(msg.to_string())
}

pub fn malformed_input<S: ToString> (msg: S)->GeorefError {
    GeorefError::MalformedInput(msg.to_string())
}
