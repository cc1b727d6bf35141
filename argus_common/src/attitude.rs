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

/// body→NED attitude representations.
/// Following ARGUS design principles we build on an existing crate, which in this domain
/// is [nalgebra](https://docs.rs/nalgebra/latest/nalgebra/). We employ the Rust new type
/// pattern to pin down the frame semantics (body→NED, aerospace ZYX Euler sequence) and
/// still retain the capability to use the rotation algorithms of the foundation crate.
/// The wire quaternion is the canonical attitude - Euler angles and the direction cosine
/// matrix are always recomputed from it, never stored as independent ground truth

use std::fmt;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion};
use serde::{Serialize,Deserialize};

use crate::cartesian3::Cartesian3;

/// wire quaternions with a magnitude at or below this carry no usable attitude
pub const QUAT_DEGENERATE_NORM: f64 = 1.0e-6;

/// aerospace roll/pitch/yaw in radians, body→NED with the ZYX rotation sequence
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64
}

impl EulerAngles {
    pub fn new (roll: f64, pitch: f64, yaw: f64)->Self {
        EulerAngles { roll, pitch, yaw }
    }

    pub fn zero ()->Self {
        EulerAngles { roll: 0.0, pitch: 0.0, yaw: 0.0 }
    }
}

impl fmt::Display for EulerAngles {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ roll: {:.3}°, pitch: {:.3}°, yaw: {:.3}° }}",
            self.roll.to_degrees(), self.pitch.to_degrees(), self.yaw.to_degrees())
    }
}

/// a normalized body→NED rotation
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Attitude(UnitQuaternion<f64>);

impl Attitude {
    pub fn identity ()->Self {
        Attitude( UnitQuaternion::identity())
    }

    /// normalize a transmitted w,x,y,z quaternion.
    /// Returns None if the magnitude is degenerate - the caller decides which default to
    /// substitute and how to report the degradation
    pub fn from_wire (q: &[f32;4])->Option<Self> {
        let q = Quaternion::new( q[0] as f64, q[1] as f64, q[2] as f64, q[3] as f64);
        if q.norm() <= QUAT_DEGENERATE_NORM {
            None
        } else {
            Some( Attitude( UnitQuaternion::from_quaternion(q)))
        }
    }

    pub fn from_euler (e: &EulerAngles)->Self {
        Attitude( UnitQuaternion::from_euler_angles( e.roll, e.pitch, e.yaw))
    }

    /// the w,x,y,z representation as transmitted on the wire
    pub fn wire (&self)->[f32;4] {
        let q = self.0.quaternion();
        [q.w as f32, q.i as f32, q.j as f32, q.k as f32]
    }

    pub fn euler (&self)->EulerAngles {
        let (roll,pitch,yaw) = self.0.euler_angles();
        EulerAngles { roll, pitch, yaw }
    }

    pub fn dcm (&self)->Dcm {
        Dcm( *self.0.to_rotation_matrix().matrix())
    }
}

/// direction cosine matrix, a fixed 3×3 rotation from body axes to NED
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Dcm(Matrix3<f64>);

impl Dcm {
    pub fn identity ()->Self {
        Dcm( Matrix3::identity())
    }

    pub fn matrix (&self)->&Matrix3<f64> { &self.0 }

    pub fn get (&self, row: usize, col: usize)->f64 { self.0[(row,col)] }

    /// rotate a body frame vector into NED
    pub fn rotate (&self, v: &Cartesian3)->Cartesian3 {
        Cartesian3::from_col( &(self.0 * v.as_col()))
    }

    /// rotate a NED vector back into body axes
    pub fn rotate_transposed (&self, v: &Cartesian3)->Cartesian3 {
        Cartesian3::from_col( &(self.0.transpose() * v.as_col()))
    }

    /// the body x axis expressed in NED - for a gimbal camera this is the line of sight
    pub fn line_of_sight (&self)->Cartesian3 {
        Cartesian3::new( self.0[(0,0)], self.0[(1,0)], self.0[(2,0)])
    }
}
