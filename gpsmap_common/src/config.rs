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

//! RON based configuration loading
//! configs are plain serde structs - this module only knows how to get them from files or strings

use std::path::Path;
use serde::Deserialize;

use crate::define_error;
use crate::fs::filepath_contents;

define_error!{ pub ConfigError = 
    IOError(#[from] std::io::Error) : "config IO error: {0}",
    RonError(#[from] ron::error::SpannedError) : "config RON error: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// load a config struct from a RON file
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = filepath_contents( &path.as_ref())?;
    let config = ron::de::from_bytes( data.as_slice())?;
    tracing::debug!("loaded config {:?}", path.as_ref());
    Ok(config)
}

/// parse a config struct from an in-memory RON string
pub fn parse_config<C> (src: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    Ok( ron::from_str(src)? )
}

/// load config from the given path if there is one, use the type default otherwise
pub fn load_config_or_default<C,P> (maybe_path: Option<P>) -> Result<C> where C: for <'a> Deserialize<'a> + Default, P: AsRef<Path> {
    match maybe_path {
        Some(path) => load_config_path(path),
        None => Ok(C::default())
    }
}
