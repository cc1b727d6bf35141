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
#![allow(unused)]

/// geolocation telemetry of a gimbal mounted camera - everything needed to project its
/// line of sight onto the ground. The GEOLOCATE_TELEMETRY packet transmits the minimum
/// amount of information (GeolocateTelemetryCore); the full GeolocateTelemetry holds
/// position, velocity, time and attitude in redundant forms for the convenience of
/// whoever receives the data, reconstructed on every decode by the derivation unit

use std::fmt;
use serde::{Serialize,Deserialize};

use argus_common::{
    attitude::{Attitude, Dcm, EulerAngles},
    cartesian3::Cartesian3,
    cartographic::{Cartographic, LlaTrig},
    gpstime::CalendarDate,
};

pub mod errors;
pub mod codec;
pub mod derive;
pub mod projector;

pub use codec::{form_geolocate_telemetry, decode_geolocate_telemetry, decode_geolocate_core,
                GEOLOCATE_TELEMETRY, GEOLOCATE_PAYLOAD_LEN};
pub use derive::{derive_geolocate_telemetry, derive_with_ground_height};
pub use projector::{offset_image_location, angles_from_pixel};

/// the minimal geolocation state that is actually transmitted.
/// Field order and widths are the wire contract of the GEOLOCATE_TELEMETRY packet
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeolocateTelemetryCore {
    /// GPS week number, epoch-relative (rollover resolved upstream)
    pub week: u16,

    /// time of week in milliseconds
    pub itow_ms: u32,

    /// geodetic latitude in radians
    pub latitude: f64,

    /// geodetic longitude in radians
    pub longitude: f64,

    /// height above ellipsoid in meters
    pub altitude: f32,

    /// velocity in NED meters per second
    pub vel_ned: [f32;3],

    /// gimbal attitude quaternion w,x,y,z (body→NED)
    pub gimbal_quat: [f32;4],

    /// camera attitude quaternion w,x,y,z (body→NED)
    pub camera_quat: [f32;4],

    /// horizontal sensor field of view in radians
    pub hfov: f32,
}

impl GeolocateTelemetryCore {
    pub fn position (&self)->Cartographic {
        Cartographic::new( self.longitude, self.latitude, self.altitude as f64)
    }
}

impl fmt::Display for GeolocateTelemetryCore {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeolocateTelemetryCore( week: {}, itow: {}ms, pos: {}, vel: [{:.1},{:.1},{:.1}]m/s, hfov: {:.2}°)",
            self.week, self.itow_ms, self.position(),
            self.vel_ned[0], self.vel_ned[1], self.vel_ned[2],
            (self.hfov as f64).to_degrees())
    }
}

/// the information needed to determine the location of the gimbal image.
/// Everything below `core` is reconstructed from it at decode time and never transmitted.
/// One instance exists per received sample, owned by the caller of the decode operation
/// and treated as immutable until replaced wholesale by the next sample
#[derive(Debug,Clone)]
pub struct GeolocateTelemetry {
    /// the geolocation data that is transmitted and received in the packet
    pub core: GeolocateTelemetryCore,

    /// calendar fields expanded from week/itow
    pub date: CalendarDate,

    /// geodetic position, canonical source for the trig cache and ECEF state
    pub position: Cartographic,

    /// cached latitude/longitude trigonometry of `position`
    pub lla_trig: LlaTrig,

    /// position in ECEF meters
    pub pos_ecef: Cartesian3,

    /// velocity in ECEF meters per second
    pub vel_ecef: Cartesian3,

    /// normalized gimbal attitude (identity if the wire quaternion was degenerate)
    pub gimbal_att: Attitude,

    /// Euler attitude of the gimbal (roll, pitch, yaw) in radians
    pub gimbal_euler: EulerAngles,

    /// the DCM of the gimbal (body to nav NED)
    pub gimbal_dcm: Dcm,

    /// normalized camera attitude (identity if the wire quaternion was degenerate)
    pub camera_att: Attitude,

    /// Euler attitude of the camera (roll, pitch, yaw) in radians
    pub camera_euler: EulerAngles,

    /// the DCM of the camera (body to nav NED)
    pub camera_dcm: Dcm,

    /// slant range to the flat-ground intersection in meters, 0.0 if the line of
    /// sight does not hit the ground
    pub slant_range: f64,

    /// set if a degenerate wire quaternion was replaced by the identity attitude
    pub attitude_degraded: bool,
}

impl fmt::Display for GeolocateTelemetry {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeolocateTelemetry( {}, pos: {}, ecef: {}", self.date, self.position, self.pos_ecef)?;
        write!(f, ", gimbal: {}, camera: {}", self.gimbal_euler, self.camera_euler)?;
        if self.slant_range > 0.0 { write!(f, ", slant range: {:.0}m", self.slant_range)?; }
        if self.attitude_degraded { write!(f, ", DEGRADED ATTITUDE")?; }
        write!(f, ")")
    }
}
