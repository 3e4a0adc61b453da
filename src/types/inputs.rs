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
Datos de entrada de las medidas
===============================

Datos de entrada, ya validados por la capa de entrada, de cada medida de ahorro.

Los flujos de aire se expresan en m3/h y las horas de funcionamiento pueden darse
directamente o mediante un horario de funcionamiento.
*/

use serde::{Deserialize, Serialize};

use super::{MeasureKind, OperatingSchedule};
use crate::enok::{HOURS_PER_YEAR, MODULE_DENSITY_DEFAULT};

/// Horas anuales de funcionamiento
///
/// Annual operating hours, given directly or derived from a schedule
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperatingHours {
    /// Annual hours [h/year]
    Annual(f64),
    /// Operating schedule
    Schedule(OperatingSchedule),
}

impl OperatingHours {
    /// Horas anuales de funcionamiento
    ///
    /// Annual operating hours
    pub fn annual_hours(&self) -> f64 {
        match self {
            OperatingHours::Annual(hours) => *hours,
            OperatingHours::Schedule(schedule) => schedule.annual_hours(),
        }
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        OperatingHours::Annual(HOURS_PER_YEAR)
    }
}

impl From<f64> for OperatingHours {
    fn from(hours: f64) -> Self {
        OperatingHours::Annual(hours)
    }
}

impl From<OperatingSchedule> for OperatingHours {
    fn from(schedule: OperatingSchedule) -> Self {
        OperatingHours::Schedule(schedule)
    }
}

fn full_coverage() -> f64 {
    1.0
}

fn default_module_density() -> f64 {
    MODULE_DENSITY_DEFAULT
}

/// Etterisolering: mejora del aislamiento
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulationInput {
    /// Insulated area [m2]
    pub area: f64,
    /// U-value before [W/m2K]
    pub u_before: f64,
    /// U-value after [W/m2K]
    pub u_after: f64,
}

/// Varmegjenvinner: mejora del recuperador de calor
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatRecoveryInput {
    /// Airflow [m3/h]
    pub airflow_m3h: f64,
    /// Temperature efficiency before [-]
    pub efficiency_before: f64,
    /// Temperature efficiency after [-]
    pub efficiency_after: f64,
    /// Annual operating hours (full year by default)
    #[serde(default)]
    pub operating_hours: OperatingHours,
}

/// SFP: reducción de la potencia específica de ventiladores
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanPowerInput {
    /// Airflow [m3/h]
    pub airflow_m3h: f64,
    /// Specific fan power before [kW/(m3/s)]
    pub sfp_before: f64,
    /// Specific fan power after [kW/(m3/s)]
    pub sfp_after: f64,
    /// Annual operating hours
    pub operating_hours: OperatingHours,
}

/// Varmepumpe: sustitución de caldera por bomba de calor
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatPumpInput {
    /// Annual net heat demand [kWh/year]
    pub heat_demand_kwh: f64,
    /// Efficiency of the old system [-]
    pub efficiency_old: f64,
    /// Heat pump coefficient of performance [-]
    pub cop: f64,
    /// Fraction of the demand covered by the heat pump [0, 1]
    #[serde(default = "full_coverage")]
    pub coverage: f64,
}

/// Temperatur: reducción de la temperatura de consigna
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetpointInput {
    /// Annual space heating demand [kWh/year]
    pub heat_demand_kwh: f64,
    /// Setpoint reduction [°C]
    pub temperature_reduction: f64,
}

/// Nattsenking: reducción nocturna de temperatura
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightSetbackInput {
    /// Annual space heating demand [kWh/year]
    pub heat_demand_kwh: f64,
    /// Setback temperature reduction [°C]
    pub setback: f64,
    /// Hours per day in setback [0, 24]
    pub hours_per_day: f64,
}

/// LED: sustitución de luminarias
///
/// Wattages not given are taken from the luminaire catalog archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedInput {
    /// Number of fixtures
    pub fixture_count: u32,
    /// Luminaire archetype name in the catalog
    #[serde(default)]
    pub archetype: Option<String>,
    /// Power of the old fixture [W]
    #[serde(default)]
    pub old_wattage: Option<f64>,
    /// Power of the LED fixture [W]
    #[serde(default)]
    pub new_wattage: Option<f64>,
    /// Annual operating hours
    pub operating_hours: OperatingHours,
}

/// Solcelle: instalación fotovoltaica en cubierta
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarPvInput {
    /// Roof area [m2]
    pub roof_area: f64,
    /// Usable roof fraction [0, 1]
    pub usable_fraction: f64,
    /// Module power density [kWp/m2]
    #[serde(default = "default_module_density")]
    pub module_density: f64,
    /// Specific yield [kWh/kWp.year]
    pub specific_yield: f64,
}

/// Datos de entrada de una medida
///
/// Input data of a measure, tagged with the measure key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "measure")]
pub enum MeasureInput {
    /// Insulation upgrade
    #[serde(rename = "etterisolering")]
    Insulation(InsulationInput),
    /// Heat recovery upgrade
    #[serde(rename = "varmegjenvinner")]
    HeatRecovery(HeatRecoveryInput),
    /// Fan power reduction
    #[serde(rename = "sfp")]
    FanPower(FanPowerInput),
    /// Heat pump conversion
    #[serde(rename = "varmepumpe")]
    HeatPump(HeatPumpInput),
    /// Setpoint reduction
    #[serde(rename = "temperatur")]
    Setpoint(SetpointInput),
    /// Night setback
    #[serde(rename = "nattsenking")]
    NightSetback(NightSetbackInput),
    /// LED retrofit
    #[serde(rename = "led")]
    Led(LedInput),
    /// Solar PV
    #[serde(rename = "solcelle")]
    SolarPv(SolarPvInput),
}

impl MeasureInput {
    /// Tipo de medida
    ///
    /// Kind of measure described by these inputs
    pub fn kind(&self) -> MeasureKind {
        match self {
            MeasureInput::Insulation(_) => MeasureKind::Insulation,
            MeasureInput::HeatRecovery(_) => MeasureKind::HeatRecovery,
            MeasureInput::FanPower(_) => MeasureKind::FanPower,
            MeasureInput::HeatPump(_) => MeasureKind::HeatPump,
            MeasureInput::Setpoint(_) => MeasureKind::Setpoint,
            MeasureInput::NightSetback(_) => MeasureKind::NightSetback,
            MeasureInput::Led(_) => MeasureKind::Led,
            MeasureInput::SolarPv(_) => MeasureKind::SolarPv,
        }
    }
}
