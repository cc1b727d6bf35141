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

/// re-projects an operator image click into a ground coordinate. The telemetry sample is
/// read-only input here - a projection never mutates the sample it was computed from

use argus_common::cartesian3::Cartesian3;
use argus_common::cartographic::{self, Cartographic, GROUND_RAY_MIN_DOWN};

use crate::GeolocateTelemetry;
use crate::errors::{no_intersection, ArgusGimbalError, Result};

/// compute the ground point for a click at (ydev,zdev) radians off the image center.
/// +ydev is right and +zdev is down in the image. `image_pos` is the point currently shown
/// at image center, its height defines the flat local ground plane the new line of sight
/// is intersected with. Degenerate geometry (a ray at or above the horizon, or a sensor
/// below the ground plane) is an error - the caller keeps its previous location
pub fn offset_image_location (geo: &GeolocateTelemetry, image_pos: &Cartographic,
                              ydev: f64, zdev: f64)->Result<Cartographic> {
    // unit line of sight in camera body axes, deflected off the boresight
    let dir_cam = Cartesian3::new(
        zdev.cos() * ydev.cos(),
        zdev.cos() * ydev.sin(),
        zdev.sin()
    );
    let dir_ned = geo.camera_dcm.rotate( &dir_cam);

    match cartographic::ray_ground_intersection( &geo.position, &geo.pos_ecef, &geo.lla_trig, &dir_ned, image_pos.height) {
        Some((point,_range)) => Ok( Cartographic::from( &point)),
        None => {
            if dir_ned.z <= GROUND_RAY_MIN_DOWN {
                Err( no_intersection!( "line of sight {} at or above the horizon", dir_ned))
            } else {
                Err( no_intersection!( "sensor at {:.0}m below image plane at {:.0}m", geo.position.height, image_pos.height))
            }
        }
    }
}

/// map a clicked pixel to the angular deviations from the image center, using the
/// transmitted horizontal field of view and a pinhole projection with square pixels
pub fn angles_from_pixel (px: f64, py: f64, width: f64, height: f64, hfov: f64)->(f64,f64) {
    let tan_half = (hfov / 2.0).tan();
    let aspect = height / width;

    let ydev = ((2.0*px/width - 1.0) * tan_half).atan();
    let zdev = ((2.0*py/height - 1.0) * tan_half * aspect).atan();

    (ydev, zdev)
}
