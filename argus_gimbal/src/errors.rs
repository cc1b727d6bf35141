/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ARGUS” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;
use argus_common::gpstime::InvalidDateError;

pub type Result<T> = std::result::Result<T,ArgusGimbalError>;

/// every failure in here is local and recoverable - the caller skips the sample,
/// keeps its previous state or requests a retransmission, never terminates
#[derive(Error,Debug)]
pub enum ArgusGimbalError {

    #[error("packet type mismatch (expected {expected:#04x}, got {got:#04x})")]
    PacketType { expected: u8, got: u8 },

    #[error("packet length mismatch (expected {expected}, got {got})")]
    PacketLength { expected: usize, got: usize },

    #[error("packet payload exhausted at offset {0}")]
    TruncatedPacket(usize),

    #[error("invalid calendar date: {0}")]
    InvalidDate( #[from] InvalidDateError),

    #[error("no ground intersection: {0}")]
    NoGroundIntersection(String)
}

macro_rules! no_intersection {
    ($fmt:literal $(, $arg:expr )* ) => {
        ArgusGimbalError::NoGroundIntersection( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use no_intersection;
