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
Medidas
=======

Tipos de medida de ahorro y resultado del cálculo de ahorro energético.
*/

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{EnokError, Result};

/// Tipo de medida de ahorro
///
/// Retrofit measure kind. Its key identifies the measure in a portfolio.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum MeasureKind {
    /// Envelope insulation upgrade (walls, roof, windows)
    #[strum(to_string = "etterisolering")]
    #[serde(rename = "etterisolering")]
    Insulation,
    /// Better heat recovery unit
    #[strum(to_string = "varmegjenvinner")]
    #[serde(rename = "varmegjenvinner")]
    HeatRecovery,
    /// Lower specific fan power
    #[strum(to_string = "sfp")]
    #[serde(rename = "sfp")]
    FanPower,
    /// Heat pump replacing a boiler
    #[strum(to_string = "varmepumpe")]
    #[serde(rename = "varmepumpe")]
    HeatPump,
    /// Lower indoor temperature setpoint
    #[strum(to_string = "temperatur")]
    #[serde(rename = "temperatur")]
    Setpoint,
    /// Night temperature setback
    #[strum(to_string = "nattsenking")]
    #[serde(rename = "nattsenking")]
    NightSetback,
    /// LED lighting retrofit
    #[strum(to_string = "led")]
    #[serde(rename = "led")]
    Led,
    /// Rooftop solar PV
    #[strum(to_string = "solcelle")]
    #[serde(rename = "solcelle")]
    SolarPv,
}

/// Lista de medidas, en orden de presentación
///
/// List of measure kinds, in display order
pub const MEASURE_KINDS: [MeasureKind; 8] = [
    MeasureKind::Insulation,
    MeasureKind::HeatRecovery,
    MeasureKind::FanPower,
    MeasureKind::HeatPump,
    MeasureKind::Setpoint,
    MeasureKind::NightSetback,
    MeasureKind::Led,
    MeasureKind::SolarPv,
];

impl MeasureKind {
    /// Clave de la medida en la cartera
    ///
    /// Portfolio key of the measure
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Nombre para mostrar
    ///
    /// Display name
    pub fn display_name(self) -> &'static str {
        match self {
            MeasureKind::Insulation => "Etterisolering",
            MeasureKind::HeatRecovery => "Bedre varmegjenvinner",
            MeasureKind::FanPower => "Lavere SFP (vifter)",
            MeasureKind::HeatPump => "Varmepumpe",
            MeasureKind::Setpoint => "Senket innetemperatur",
            MeasureKind::NightSetback => "Nattsenking",
            MeasureKind::Led => "LED-belysning",
            MeasureKind::SolarPv => "Solceller",
        }
    }

    /// Obtiene la medida a partir de su clave
    ///
    /// Get measure kind from its key
    pub fn from_key(key: &str) -> Result<Self> {
        Self::from_str(key.trim()).map_err(|_| EnokError::MeasureUnknown(key.into()))
    }

    /// Todas las medidas, en orden de presentación
    ///
    /// All measure kinds, in display order
    pub fn all() -> Vec<MeasureKind> {
        MEASURE_KINDS.to_vec()
    }
}

/// Resultado del cálculo de una medida
///
/// Annual energy savings of a measure [kWh/year], never negative
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureResult {
    /// Annual energy savings [kWh/year]
    pub energy_kwh: f64,
}

impl From<f64> for MeasureResult {
    fn from(energy_kwh: f64) -> Self {
        Self { energy_kwh }
    }
}

/// Estimación de producción fotovoltaica
///
/// Solar PV estimate
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PvEstimate {
    /// Installed peak power [kWp]
    pub installed_kwp: f64,
    /// Annual electricity yield [kWh/year]
    pub annual_yield_kwh: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn measure_kind_keys() {
        assert_eq!(MeasureKind::Insulation.key(), "etterisolering");
        assert_eq!(MeasureKind::SolarPv.to_string(), "solcelle");
        assert_eq!(MeasureKind::from_key("led").unwrap(), MeasureKind::Led);
        assert_eq!(
            MeasureKind::from_key(" nattsenking ").unwrap(),
            MeasureKind::NightSetback
        );
        assert!(MeasureKind::from_key("vindmølle").is_err());
    }

    #[test]
    fn measure_kind_all_in_order() {
        let all = MeasureKind::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], MeasureKind::Insulation);
        assert_eq!(all[7], MeasureKind::SolarPv);
    }

    #[test]
    fn measure_kind_serde_uses_key() {
        let json = serde_json::to_string(&MeasureKind::HeatPump).unwrap();
        assert_eq!(json, "\"varmepumpe\"");
    }
}
