// Copyright (c) 2024 The EnokCalc Developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): The EnokCalc Developers

/*!
Horario de funcionamiento
=========================

Hora del día y horario semanal/anual de funcionamiento de un sistema.
*/

use std::convert::TryFrom;
use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EnokError;
use crate::schedule::annual_hours_from_schedule;

/// Hora del día (HH:MM)
///
/// Clock time of day. `24:00` is accepted as the end of the day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    /// Hour [0, 24]
    pub hour: u8,
    /// Minute [0, 59]
    pub minute: u8,
}

impl ClockTime {
    /// Constructor, devuelve None si la hora no es válida
    ///
    /// Build a clock time, None if out of range
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 24 || minute > 59 || (hour == 24 && minute != 0) {
            None
        } else {
            Some(Self { hour, minute })
        }
    }

    /// Hora como número decimal de horas
    ///
    /// Time of day as decimal hours
    pub fn as_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl str::FromStr for ClockTime {
    type Err = EnokError;

    /// Get ClockTime from
    ///     HH:MM
    ///     HH
    fn from_str(s: &str) -> Result<ClockTime, Self::Err> {
        let s = s.trim();
        let (hour, minute) = match s.splitn(2, ':').collect::<Vec<_>>().as_slice() {
            [h] => (h.trim().parse::<u8>()?, 0),
            [h, m] => (h.trim().parse::<u8>()?, m.trim().parse::<u8>()?),
            _ => return Err(EnokError::ParseError(s.into())),
        };
        ClockTime::new(hour, minute)
            .ok_or_else(|| EnokError::ParseError(format!("klokkeslett utenfor døgnet: {}", s)))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EnokError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

fn default_weeks_per_year() -> f64 {
    52.0
}

/// Horario de funcionamiento
///
/// Daily operating window repeated on a weekly and yearly cadence
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingSchedule {
    /// Start of the daily window
    pub start: ClockTime,
    /// End of the daily window (may be earlier than start when crossing midnight)
    pub end: ClockTime,
    /// Operating days per week [1, 7]
    pub days_per_week: u8,
    /// Operating weeks per year [1, 52]
    #[serde(default = "default_weeks_per_year")]
    pub weeks_per_year: f64,
}

impl OperatingSchedule {
    /// Horario con 52 semanas de funcionamiento
    ///
    /// Schedule running all 52 weeks of the year
    pub fn new(start: ClockTime, end: ClockTime, days_per_week: u8) -> Self {
        Self {
            start,
            end,
            days_per_week,
            weeks_per_year: default_weeks_per_year(),
        }
    }

    /// Horas anuales de funcionamiento [0, 8760]
    ///
    /// Annual operating hours [0, 8760]
    pub fn annual_hours(&self) -> f64 {
        annual_hours_from_schedule(
            self.start,
            self.end,
            self.days_per_week,
            self.weeks_per_year,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clocktime_parse() {
        assert_eq!("07:30".parse::<ClockTime>().unwrap(), ClockTime { hour: 7, minute: 30 });
        assert_eq!("22".parse::<ClockTime>().unwrap(), ClockTime { hour: 22, minute: 0 });
        assert_eq!("24:00".parse::<ClockTime>().unwrap().as_hours(), 24.0);
        assert!("24:30".parse::<ClockTime>().is_err());
        assert!("7:75".parse::<ClockTime>().is_err());
        assert!("sju".parse::<ClockTime>().is_err());
    }

    #[test]
    fn clocktime_roundtrip_string() {
        let t = ClockTime::new(6, 5).unwrap();
        assert_eq!(t.to_string(), "06:05");
        assert_eq!(t.as_hours(), 6.0 + 5.0 / 60.0);
    }

    #[test]
    fn schedule_deserialize_default_weeks() {
        let sched: OperatingSchedule =
            serde_json::from_str(r#"{ "start": "07:00", "end": "17:00", "days_per_week": 5 }"#)
                .unwrap();
        assert_eq!(sched.weeks_per_year, 52.0);
        assert_eq!(sched.annual_hours(), 2600.0);
    }
}
