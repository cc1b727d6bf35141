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

use argus_common::packet::Packet;
use argus_gimbal::*;

// run with "cargo test test_wire_roundtrip -- --nocapture"

fn sample_core ()->GeolocateTelemetryCore {
    GeolocateTelemetryCore {
        week: 2190,
        itow_ms: 12_345_678,
        // values chosen to be inexact in binary so a widening/narrowing slip would show
        latitude: 0.1 + 0.2,
        longitude: -(1.0/3.0),
        altitude: 1234.5678,
        vel_ned: [1.0/3.0, -2.0/7.0, 0.1],
        gimbal_quat: [0.9961947, 0.0, 0.08715574, 0.0],
        camera_quat: [0.70710677, 0.0, -0.70710677, 0.0],
        hfov: 0.03490659,
    }
}

#[test]
fn test_wire_roundtrip () {
    let core = sample_core();
    let pkt = form_geolocate_telemetry( &core);

    println!("formed {:#04x} packet with {} payload bytes", pkt.msg_type(), pkt.len());
    assert_eq!( pkt.len(), GEOLOCATE_PAYLOAD_LEN);

    // every minimal field comes back bit-for-bit
    let decoded = decode_geolocate_core( &pkt).unwrap();
    assert_eq!( decoded, core);
}

#[test]
fn test_wire_layout () {
    // the first fields of the wire contract, little-endian: week at 0, itow at 2
    let core = sample_core();
    let pkt = form_geolocate_telemetry( &core);
    let buf = pkt.payload();

    assert_eq!( u16::from_le_bytes( [buf[0], buf[1]]), 2190);
    assert_eq!( u32::from_le_bytes( [buf[2], buf[3], buf[4], buf[5]]), 12_345_678);
    assert_eq!( f64::from_le_bytes( buf[6..14].try_into().unwrap()), core.latitude);
}

#[test]
fn test_decode_fills_derived_state () {
    let core = sample_core();
    let geo = decode_geolocate_telemetry( &form_geolocate_telemetry( &core)).unwrap();
    println!("{}", geo);

    assert_eq!( geo.core, core);
    assert_eq!( geo.date, argus_common::gpstime::date_from_week_and_itow( core.week, core.itow_ms));
    assert_eq!( geo.position, core.position());
    assert!( !geo.attitude_degraded);
}

#[test]
fn test_mismatched_packets_rejected () {
    let pkt = form_geolocate_telemetry( &sample_core());

    let other_type = Packet::with_payload( 0x11, pkt.payload().to_vec());
    assert!( decode_geolocate_telemetry( &other_type).is_err());

    let mut truncated = pkt.payload().to_vec();
    truncated.truncate( 20);
    assert!( decode_geolocate_telemetry( &Packet::with_payload( pkt.msg_type(), truncated)).is_err());

    let mut padded = pkt.payload().to_vec();
    padded.push(0);
    assert!( decode_geolocate_telemetry( &Packet::with_payload( pkt.msg_type(), padded)).is_err());
}

#[test]
fn test_core_json_roundtrip () {
    let core = sample_core();
    let json = serde_json::to_string( &core).unwrap();
    println!("core as json: {}", json);

    let back: GeolocateTelemetryCore = serde_json::from_str( &json).unwrap();
    assert_eq!( back, core);
}
