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

/// this module provides the typed byte packet abstraction message codecs are written
/// against. A Packet is a message-type code plus a payload of fixed-width little-endian
/// fields - sync bytes, framing and checksums are the transport layer's business and
/// never appear in here

use serde::{Serialize,Deserialize};

/// a type with a fixed-width little-endian wire representation
pub trait WireField: Sized {
    const WIRE_SIZE: usize;

    /// return the value if buf holds at least WIRE_SIZE bytes at i, None otherwise
    fn read_le (buf: &[u8], i: usize)->Option<Self>;

    fn write_le (&self, buf: &mut Vec<u8>);
}

macro_rules! impl_wire_field {
    ($t:ty) => {
        impl WireField for $t {
            const WIRE_SIZE: usize = size_of::<$t>();

            fn read_le (buf: &[u8], i: usize)->Option<$t> {
                let bytes = buf.get( i..i + Self::WIRE_SIZE)?;
                Some( <$t>::from_le_bytes( bytes.try_into().ok()?))
            }

            fn write_le (&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice( &self.to_le_bytes());
            }
        }
    };
}

impl_wire_field!{ u8 }
impl_wire_field!{ u16 }
impl_wire_field!{ u32 }
impl_wire_field!{ i16 }
impl_wire_field!{ i32 }
impl_wire_field!{ f32 }
impl_wire_field!{ f64 }

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Packet {
    msg_type: u8,
    payload: Vec<u8>
}

impl Packet {
    pub fn new (msg_type: u8)->Self {
        Packet { msg_type, payload: Vec::new() }
    }

    pub fn with_payload (msg_type: u8, payload: Vec<u8>)->Self {
        Packet { msg_type, payload }
    }

    pub fn msg_type (&self)->u8 { self.msg_type }

    pub fn len (&self)->usize { self.payload.len() }

    pub fn is_empty (&self)->bool { self.payload.is_empty() }

    pub fn payload (&self)->&[u8] { self.payload.as_slice() }

    /// append one field in wire byte order, chainable
    pub fn put<T: WireField> (&mut self, v: T)->&mut Self {
        v.write_le( &mut self.payload);
        self
    }

    pub fn reader (&self)->PacketReader<'_> {
        PacketReader { buf: self.payload.as_slice(), pos: 0 }
    }
}

/// bounds-checked forward cursor over a packet payload
pub struct PacketReader<'a> {
    buf: &'a [u8],
    pos: usize
}

impl<'a> PacketReader<'a> {
    pub fn pos (&self)->usize { self.pos }

    pub fn remaining (&self)->usize { self.buf.len() - self.pos }

    /// read the next field and advance, None once the payload is exhausted
    pub fn read<T: WireField> (&mut self)->Option<T> {
        let v = T::read_le( self.buf, self.pos)?;
        self.pos += T::WIRE_SIZE;
        Some(v)
    }
}
