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

use argus_common::HALF_PI;
use argus_common::attitude::{Attitude, EulerAngles};
use argus_common::cartographic::Cartographic;
use argus_common::geo_constants::EQUATORIAL_EARTH_RADIUS;
use argus_gimbal::*;

// run with "cargo test test_projection_identity -- --nocapture"

/// camera at 1000m over the equator/prime meridian, looking straight down
fn overhead_telemetry ()->GeolocateTelemetry {
    let down = Attitude::from_euler( &EulerAngles::new( 0.0, -HALF_PI, 0.0)).wire();

    derive_geolocate_telemetry( &GeolocateTelemetryCore {
        week: 2190,
        itow_ms: 12_345_678,
        latitude: 0.0,
        longitude: 0.0,
        altitude: 1000.0,
        vel_ned: [0.0, 0.0, 0.0],
        gimbal_quat: down,
        camera_quat: down,
        hfov: 0.0349,
    })
}

#[test]
fn test_projection_identity () {
    let geo = overhead_telemetry();
    let center = Cartographic::from_degrees( 0.0, 0.0, 0.0);

    // zero deviation means no movement
    let p = offset_image_location( &geo, &center, 0.0, 0.0).unwrap();
    println!("identity projection: {}", p);

    assert!( (p.latitude - center.latitude).abs() <= 1e-9);
    assert!( (p.longitude - center.longitude).abs() <= 1e-9);
    assert!( (p.height - center.height).abs() <= 1e-3);
}

#[test]
fn test_offset_directions () {
    let geo = overhead_telemetry();
    let center = Cartographic::from_degrees( 0.0, 0.0, 0.0);

    // a click to the right of center walks the impact point east by ~alt*tan(ydev)
    let ydev = 0.01;
    let p = offset_image_location( &geo, &center, ydev, 0.0).unwrap();
    let east_m = p.longitude * EQUATORIAL_EARTH_RADIUS;
    let expected = 1000.0 * ydev.tan();
    println!("ydev {} -> {:.3}m east (expected {:.3}m)", ydev, east_m, expected);
    assert!( (east_m - expected).abs() <= 0.01 * expected);
    assert!( (p.latitude).abs() <= 1e-9);

    // with this camera yaw, image-down is south
    let p = offset_image_location( &geo, &center, 0.0, 0.01).unwrap();
    assert!( p.latitude < 0.0);
    assert!( (p.longitude).abs() <= 1e-9);
}

#[test]
fn test_degenerate_geometry () {
    let geo = overhead_telemetry();
    let center = Cartographic::from_degrees( 0.0, 0.0, 0.0);

    // deflecting the line of sight to the horizon or beyond cannot intersect
    let e = offset_image_location( &geo, &center, 0.0, -HALF_PI).unwrap_err();
    println!("horizon click: {}", e);
    assert!( matches!( e, errors::ArgusGimbalError::NoGroundIntersection(_)));

    assert!( offset_image_location( &geo, &center, 0.0, -2.0).is_err());

    // an image plane above the sensor is equally hopeless
    let high_plane = Cartographic::from_degrees( 0.0, 0.0, 2000.0);
    assert!( offset_image_location( &geo, &high_plane, 0.0, 0.0).is_err());
}

#[test]
fn test_projection_reads_only () {
    // projecting must not change the sample it projects from
    let geo = overhead_telemetry();
    let before = format!("{}", geo);

    let center = Cartographic::from_degrees( 0.0, 0.0, 0.0);
    let _ = offset_image_location( &geo, &center, 0.02, -0.01);

    assert_eq!( format!("{}", geo), before);
}

#[test]
fn test_angles_from_pixel () {
    let (w,h) = (1920.0, 1080.0);
    let hfov = 0.6;

    // image center clicks map to the boresight
    let (ydev,zdev) = angles_from_pixel( 960.0, 540.0, w, h, hfov);
    assert!( ydev.abs() <= 1e-12 && zdev.abs() <= 1e-12);

    // the right image edge is half the horizontal field of view out
    let (ydev,_) = angles_from_pixel( w, 540.0, w, h, hfov);
    assert!( (ydev - hfov/2.0).abs() <= 1e-12);

    // left/up clicks deflect negative
    let (ydev,zdev) = angles_from_pixel( 100.0, 100.0, w, h, hfov);
    assert!( ydev < 0.0 && zdev < 0.0);

    // a corner click stays consistent with the projector conventions end to end
    let geo = overhead_telemetry();
    let center = Cartographic::from_degrees( 0.0, 0.0, 0.0);
    let (ydev,zdev) = angles_from_pixel( 1920.0, 1080.0, w, h, (geo.core.hfov) as f64);
    let p = offset_image_location( &geo, &center, ydev, zdev).unwrap();
    assert!( p.longitude > 0.0 && p.latitude < 0.0); // lower right = south east
}
