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

/// the geodetic derivation unit - expands a minimal GeolocateTelemetryCore into the full
/// redundant GeolocateTelemetry. All derived fields are recomputed from scratch on every
/// decode, none persist across samples. That trades a few trig calls per sample for the
/// guarantee that quaternion, Euler and DCM representations can never drift apart

use tracing::warn;

use argus_common::attitude::Attitude;
use argus_common::cartesian3::Cartesian3;
use argus_common::cartographic::{self, Cartographic, LlaTrig};
use argus_common::gpstime;

use crate::{GeolocateTelemetry, GeolocateTelemetryCore};

/// derive against the ellipsoid surface as the assumed ground plane
pub fn derive_geolocate_telemetry (core: &GeolocateTelemetryCore)->GeolocateTelemetry {
    derive_with_ground_height( core, 0.0)
}

/// derive against a flat ground plane at the given height above the ellipsoid (e.g. from
/// an external terrain model). A degenerate wire quaternion does not abort the derivation -
/// the identity attitude is substituted and the sample is flagged as degraded
pub fn derive_with_ground_height (core: &GeolocateTelemetryCore, ground_height: f64)->GeolocateTelemetry {
    let date = gpstime::date_from_week_and_itow( core.week, core.itow_ms);

    let position = core.position();
    let lla_trig = position.trig();
    let pos_ecef = position.to_ecef_with_trig( &lla_trig);

    let vel_ned = Cartesian3::new( core.vel_ned[0] as f64, core.vel_ned[1] as f64, core.vel_ned[2] as f64);
    let vel_ecef = cartographic::ned_to_ecef( &vel_ned, &lla_trig);

    let mut attitude_degraded = false;

    let gimbal_att = Attitude::from_wire( &core.gimbal_quat).unwrap_or_else( || {
        warn!("degenerate gimbal quaternion at week {} itow {}, substituting identity attitude", core.week, core.itow_ms);
        attitude_degraded = true;
        Attitude::identity()
    });
    let camera_att = Attitude::from_wire( &core.camera_quat).unwrap_or_else( || {
        warn!("degenerate camera quaternion at week {} itow {}, substituting identity attitude", core.week, core.itow_ms);
        attitude_degraded = true;
        Attitude::identity()
    });

    let gimbal_euler = gimbal_att.euler();
    let gimbal_dcm = gimbal_att.dcm();
    let camera_euler = camera_att.euler();
    let camera_dcm = camera_att.dcm();

    // 0.0 marks a line of sight that never reaches the ground plane
    let slant_range = cartographic::ray_ground_intersection(
            &position, &pos_ecef, &lla_trig, &camera_dcm.line_of_sight(), ground_height)
        .map( |(_point,range)| range)
        .unwrap_or(0.0);

    GeolocateTelemetry {
        core: *core,
        date,
        position, lla_trig, pos_ecef, vel_ecef,
        gimbal_att, gimbal_euler, gimbal_dcm,
        camera_att, camera_euler, camera_dcm,
        slant_range,
        attitude_degraded
    }
}
