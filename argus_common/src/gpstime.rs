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

/// conversion between GPS time (week number plus time-of-week) and the proleptic
/// Gregorian calendar. GPS time carries no leap seconds so this is pure day/millisecond
/// arithmetic against the 1980-01-06 epoch. The week number is epoch-relative - resolving
/// the 10 bit broadcast rollover is an upstream responsibility

use std::fmt;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Serialize,Deserialize};
use thiserror::Error;

pub const MS_PER_SECOND: u32 = 1_000;
pub const MS_PER_MINUTE: u32 = 60_000;
pub const MS_PER_HOUR: u32   = 3_600_000;
pub const MS_PER_DAY: u32    = 86_400_000;
pub const MS_PER_WEEK: u32   = 604_800_000;
pub const DAYS_PER_WEEK: u32 = 7;

pub const GPS_EPOCH_YEAR: u16 = 1980;
/// 0-based day-of-year of the GPS epoch 1980-01-06
const GPS_EPOCH_DOY: u32 = 5;

pub type Result<T> = std::result::Result<T,InvalidDateError>;

#[derive(Error,Debug,Clone,Copy,PartialEq,Eq)]
pub enum InvalidDateError {

    #[error("{year:04}-{month:02}-{day:02} precedes the GPS epoch 1980-01-06")]
    PreEpoch { year: u16, month: u8, day: u8 },

    #[error("month {0} out of range")]
    BadMonth(u8),

    #[error("day {day} out of range for {year:04}-{month:02}")]
    BadDay { year: u16, month: u8, day: u8 },

    #[error("time of day {hour:02}:{minute:02}:{second:02}.{millis:03} out of range")]
    BadTimeOfDay { hour: u8, minute: u8, second: u8, millis: u16 },

    #[error("{year:04}-{month:02}-{day:02} exceeds the representable GPS week range")]
    WeekOutOfRange { year: u16, month: u8, day: u8 },
}

/// one Gregorian calendar instant at second resolution
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct CalendarDate {
    pub year: u16,   // full 4-digit year
    pub month: u8,   // 1..=12
    pub day: u8,     // 1..=31
    pub hour: u8,    // 0..=23
    pub minute: u8,  // 0..=59
    pub second: u8,  // 0..=59
}

impl CalendarDate {
    pub fn new (year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8)->Self {
        CalendarDate { year, month, day, hour, minute, second }
    }

    /// interop with chrono for display and logging. GPS time has no leap seconds, i.e.
    /// this is not corrected to true UTC. None if the fields do not form a valid date
    pub fn to_utc (&self)->Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms( self.year as i32, self.month as u32, self.day as u32,
                              self.hour as u32, self.minute as u32, self.second as u32).single()
    }

    pub fn from_utc (dt: &DateTime<Utc>)->Self {
        CalendarDate {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second)
    }
}

/// Gregorian leap year rule - divisible by 4, not by 100 unless by 400
#[inline]
pub fn is_leap_year (year: u16)->bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[inline]
pub fn days_in_year (year: u16)->u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub fn days_in_month (year: u16, month: u8)->u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => if is_leap_year(year) { 29 } else { 28 },
        _ => 0
    }
}

/// expand a GPS week number and time-of-week in milliseconds into calendar fields.
/// Total on all inputs - a time-of-week at or beyond one week simply spills into
/// subsequent weeks
pub fn date_from_week_and_itow (week: u16, itow_ms: u32)->CalendarDate {
    let mut days = week as u32 * DAYS_PER_WEEK + itow_ms / MS_PER_DAY + GPS_EPOCH_DOY;

    let mut year = GPS_EPOCH_YEAR;
    while days >= days_in_year(year) {
        days -= days_in_year(year);
        year += 1;
    }

    let mut month: u8 = 1;
    while days >= days_in_month(year,month) as u32 {
        days -= days_in_month(year,month) as u32;
        month += 1;
    }
    let day = days as u8 + 1;

    let ms = itow_ms % MS_PER_DAY;

    CalendarDate {
        year, month, day,
        hour:   (ms / MS_PER_HOUR) as u8,
        minute: (ms % MS_PER_HOUR / MS_PER_MINUTE) as u8,
        second: (ms % MS_PER_MINUTE / MS_PER_SECOND) as u8
    }
}

/// the exact inverse of date_from_week_and_itow, with explicit sub-second milliseconds.
/// Fails on out-of-range calendar fields - the caller must not use the result in that case
pub fn week_and_itow_from_date (date: &CalendarDate, millis: u16)->Result<(u16,u32)> {
    let CalendarDate { year, month, day, hour, minute, second } = *date;

    if year < GPS_EPOCH_YEAR {
        return Err( InvalidDateError::PreEpoch { year, month, day })
    }
    if month < 1 || month > 12 {
        return Err( InvalidDateError::BadMonth(month))
    }
    if day < 1 || day > days_in_month(year,month) {
        return Err( InvalidDateError::BadDay { year, month, day })
    }
    if hour > 23 || minute > 59 || second > 59 || millis > 999 {
        return Err( InvalidDateError::BadTimeOfDay { hour, minute, second, millis })
    }

    let mut days: u32 = 0;
    for y in GPS_EPOCH_YEAR..year {
        days += days_in_year(y);
    }
    for m in 1..month {
        days += days_in_month(year,m) as u32;
    }
    days += day as u32 - 1;

    if days < GPS_EPOCH_DOY {  // 1980-01-01 .. 1980-01-05
        return Err( InvalidDateError::PreEpoch { year, month, day })
    }
    days -= GPS_EPOCH_DOY;

    let week = days / DAYS_PER_WEEK;
    if week > u16::MAX as u32 {
        return Err( InvalidDateError::WeekOutOfRange { year, month, day })
    }

    let itow = (days % DAYS_PER_WEEK) * MS_PER_DAY
        + hour as u32 * MS_PER_HOUR
        + minute as u32 * MS_PER_MINUTE
        + second as u32 * MS_PER_SECOND
        + millis as u32;

    Ok( (week as u16, itow) )
}
