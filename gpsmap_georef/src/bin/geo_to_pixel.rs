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
use gpsmap_common::{define_cli, check_cli, config::load_config_or_default};
use gpsmap_georef::{format_pixel, BoundedRegionConfig, PixelOutputFormat, PixelRounding};

define_cli! { ARGS [about="geo_to_pixel - convert WGS84 coordinates to pixel coordinates of a bounded region image"] =
    format: PixelOutputFormat [help="output format", long, value_enum, default_value="plain"],
    config: Option<String> [help="RON file with region bounds and image size (default is the built-in 2048x2048 region)", long, short],
    rounding: Option<PixelRounding> [help="rounding policy for positions that fall on exact .5 pixels", long, value_enum],
    latitude: f64 [help="latitude in WGS84 decimal degrees", allow_negative_numbers=true],
    longitude: f64 [help="longitude in WGS84 decimal degrees", allow_negative_numbers=true]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    gpsmap_common::init_env_tracing();

    let mut config: BoundedRegionConfig = load_config_or_default( ARGS.config.as_ref())?;
    if let Some(rounding) = ARGS.rounding {
        config.rounding = rounding;
    }
    config.check()?;
    tracing::debug!("using region {:?}", config);

    let (x,y) = config.to_pixel( ARGS.latitude, ARGS.longitude)?;
    println!("{}", format_pixel( x, y, ARGS.format)?);

    Ok(())
}
