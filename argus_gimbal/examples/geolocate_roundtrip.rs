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

/// form a GEOLOCATE_TELEMETRY packet, decode it back into the full telemetry and
/// re-project a couple of simulated operator clicks

use anyhow::Result;
use argus_common::attitude::{Attitude, EulerAngles};
use argus_common::cartographic::Cartographic;
use argus_common::rad;
use argus_gimbal::*;

fn main ()->Result<()> {
    tracing_subscriber::fmt::init();

    // an aircraft over the South Bay with the camera pitched steeply down
    let core = GeolocateTelemetryCore {
        week: 2190,
        itow_ms: 12_345_678,
        latitude: rad(37.337),
        longitude: rad(-122.039),
        altitude: 1850.0,
        vel_ned: [62.0, -4.5, 0.0],
        gimbal_quat: Attitude::from_euler( &EulerAngles::new( 0.0, rad(-35.0), rad(180.0))).wire(),
        camera_quat: Attitude::from_euler( &EulerAngles::new( 0.0, rad(-75.0), rad(180.0))).wire(),
        hfov: rad(8.0) as f32,
    };

    let pkt = form_geolocate_telemetry( &core);
    println!("formed {:#04x} packet, {} payload bytes", pkt.msg_type(), pkt.len());

    let geo = decode_geolocate_telemetry( &pkt)?;
    println!("{}", geo);

    // the point currently under the image center
    let center = offset_image_location( &geo, &Cartographic::new( geo.position.longitude, geo.position.latitude, 0.0), 0.0, 0.0)?;
    println!("image center:   {}", center);

    // operator clicks, first in angular then in pixel coordinates
    let p = offset_image_location( &geo, &center, rad(2.0), rad(1.0))?;
    println!("click right/low: {}", p);

    let (ydev,zdev) = angles_from_pixel( 480.0, 270.0, 1920.0, 1080.0, core.hfov as f64);
    let p = offset_image_location( &geo, &center, ydev, zdev)?;
    println!("click upper left quadrant: {}", p);

    Ok(())
}
