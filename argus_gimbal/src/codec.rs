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

/// the GEOLOCATE_TELEMETRY wire codec. Only the GeolocateTelemetryCore fields are
/// serialized - form and decode must agree on byte order and field order exactly,
/// decode(form(core)) is bit identical to core

use argus_common::packet::{Packet, PacketReader, WireField};

use crate::{GeolocateTelemetry, GeolocateTelemetryCore};
use crate::derive::derive_geolocate_telemetry;
use crate::errors::{ArgusGimbalError, Result};

/// message type code of the geolocate telemetry packet
pub const GEOLOCATE_TELEMETRY: u8 = 0x43;

/// payload bytes of a GEOLOCATE_TELEMETRY packet
pub const GEOLOCATE_PAYLOAD_LEN: usize = 74;

/// serialize the minimal core fields into a packet. Any core value is representable,
/// range checking is one layer up
pub fn form_geolocate_telemetry (core: &GeolocateTelemetryCore)->Packet {
    let mut pkt = Packet::new( GEOLOCATE_TELEMETRY);

    pkt.put( core.week)
       .put( core.itow_ms)
       .put( core.latitude)
       .put( core.longitude)
       .put( core.altitude);

    for v in core.vel_ned { pkt.put(v); }
    for q in core.gimbal_quat { pkt.put(q); }
    for q in core.camera_quat { pkt.put(q); }

    pkt.put( core.hfov);
    pkt
}

/// parse a GEOLOCATE_TELEMETRY packet back into the minimal core fields.
/// The only error paths are a wrong message type or payload length - nothing partial
/// is produced in that case
pub fn decode_geolocate_core (pkt: &Packet)->Result<GeolocateTelemetryCore> {
    if pkt.msg_type() != GEOLOCATE_TELEMETRY {
        return Err( ArgusGimbalError::PacketType { expected: GEOLOCATE_TELEMETRY, got: pkt.msg_type() })
    }
    if pkt.len() != GEOLOCATE_PAYLOAD_LEN {
        return Err( ArgusGimbalError::PacketLength { expected: GEOLOCATE_PAYLOAD_LEN, got: pkt.len() })
    }

    let mut r = pkt.reader();

    let week = next( &mut r)?;
    let itow_ms = next( &mut r)?;
    let latitude = next( &mut r)?;
    let longitude = next( &mut r)?;
    let altitude = next( &mut r)?;

    let mut vel_ned = [0f32;3];
    for v in vel_ned.iter_mut() { *v = next( &mut r)?; }

    let mut gimbal_quat = [0f32;4];
    for q in gimbal_quat.iter_mut() { *q = next( &mut r)?; }

    let mut camera_quat = [0f32;4];
    for q in camera_quat.iter_mut() { *q = next( &mut r)?; }

    let hfov = next( &mut r)?;

    Ok( GeolocateTelemetryCore { week, itow_ms, latitude, longitude, altitude, vel_ned, gimbal_quat, camera_quat, hfov })
}

/// decode a GEOLOCATE_TELEMETRY packet and expand it into the full redundant telemetry
pub fn decode_geolocate_telemetry (pkt: &Packet)->Result<GeolocateTelemetry> {
    let core = decode_geolocate_core(pkt)?;
    Ok( derive_geolocate_telemetry( &core))
}

fn next<T: WireField> (r: &mut PacketReader)->Result<T> {
    let pos = r.pos();
    r.read().ok_or( ArgusGimbalError::TruncatedPacket(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_core ()->GeolocateTelemetryCore {
        GeolocateTelemetryCore {
            week: 2190,
            itow_ms: 12_345_678,
            latitude: 0.6516537249,   // ~37.337°
            longitude: -2.1366218688, // ~-122.419°
            altitude: 1200.5,
            vel_ned: [31.0, -2.5, 0.25],
            gimbal_quat: [0.996, 0.0, 0.087, 0.0],
            camera_quat: [0.707, 0.0, -0.707, 0.0],
            hfov: 0.0349,
        }
    }

    #[test]
    fn test_payload_len () {
        let pkt = form_geolocate_telemetry( &sample_core());
        assert_eq!( pkt.len(), GEOLOCATE_PAYLOAD_LEN);
        assert_eq!( pkt.msg_type(), GEOLOCATE_TELEMETRY);
    }

    #[test]
    fn test_wrong_type_rejected () {
        let core = sample_core();
        let pkt = form_geolocate_telemetry( &core);
        let bad = argus_common::packet::Packet::with_payload( 0x44, pkt.payload().to_vec());
        assert!( matches!( decode_geolocate_core( &bad), Err(ArgusGimbalError::PacketType{..})));
    }

    #[test]
    fn test_wrong_length_rejected () {
        let core = sample_core();
        let pkt = form_geolocate_telemetry( &core);

        let mut short = pkt.payload().to_vec();
        short.pop();
        let bad = argus_common::packet::Packet::with_payload( GEOLOCATE_TELEMETRY, short);
        assert!( matches!( decode_geolocate_core( &bad), Err(ArgusGimbalError::PacketLength{..})));
    }
}
