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
Conversión de horarios
======================

Conversión de una ventana diaria de funcionamiento y su cadencia semanal y anual
en horas anuales de funcionamiento.

- Las ventanas que cruzan la medianoche (p.e. 22:00-06:00) suman 24 h a la diferencia
- Las horas diarias se limitan a [0, 24] y las anuales a [0, 8760]
*/

use crate::{
    enok::HOURS_PER_YEAR,
    numops::clamp,
    types::ClockTime,
};

/// Horas diarias de funcionamiento
///
/// Daily operating hours of the window [start, end], in [0, 24].
/// A window whose end is earlier than its start crosses midnight.
pub fn daily_hours(start: ClockTime, end: ClockTime) -> f64 {
    let mut hours = end.as_hours() - start.as_hours();
    if hours < 0.0 {
        hours += 24.0;
    }
    clamp(hours, 0.0, 24.0)
}

/// Horas anuales de funcionamiento
///
/// Annual operating hours for a daily window repeated `days_per_week` days a week
/// during `weeks_per_year` weeks, in [0, 8760].
pub fn annual_hours_from_schedule(
    start: ClockTime,
    end: ClockTime,
    days_per_week: u8,
    weeks_per_year: f64,
) -> f64 {
    let hours = daily_hours(start, end) * f64::from(days_per_week) * weeks_per_year;
    clamp(hours, 0.0, HOURS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn schedule_daily_hours() {
        assert_eq!(daily_hours(t("07:00"), t("17:00")), 10.0);
        assert_eq!(daily_hours(t("07:30"), t("16:00")), 8.5);
        assert_eq!(daily_hours(t("08:00"), t("08:00")), 0.0);
        assert_eq!(daily_hours(t("00:00"), t("24:00")), 24.0);
    }

    #[test]
    fn schedule_midnight_crossing() {
        // 22:00-06:00 son 8 h, igual que una ventana de 8 h sin cruce
        assert_eq!(daily_hours(t("22:00"), t("06:00")), 8.0);
        assert_eq!(
            daily_hours(t("22:00"), t("06:00")),
            daily_hours(t("08:00"), t("16:00"))
        );
        assert_eq!(
            annual_hours_from_schedule(t("22:00"), t("06:00"), 5, 52.0),
            annual_hours_from_schedule(t("08:00"), t("16:00"), 5, 52.0)
        );
    }

    #[test]
    fn schedule_annual_hours() {
        assert_eq!(
            annual_hours_from_schedule(t("07:00"), t("17:00"), 5, 52.0),
            2600.0
        );
        assert_eq!(
            annual_hours_from_schedule(t("07:00"), t("17:00"), 5, 46.0),
            2300.0
        );
        // 24 h x 7 d x 52 semanas = 8736 h
        assert_eq!(
            annual_hours_from_schedule(t("00:00"), t("24:00"), 7, 52.0),
            8736.0
        );
    }

    #[test]
    fn schedule_annual_hours_clamped() {
        assert_eq!(
            annual_hours_from_schedule(t("00:00"), t("24:00"), 7, 53.0),
            HOURS_PER_YEAR
        );
    }
}
