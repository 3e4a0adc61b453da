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
Fórmulas de ahorro de las medidas
=================================

Estimación simplificada del ahorro energético anual [kWh/año] de cada medida de rehabilitación.

Hipótesis:

- Se usan coeficientes únicos y grados-día constantes (4800 K·d), sin simulación horaria
- El ahorro nunca es negativo: una medida que empeora la situación de partida ahorra 0
- Los denominadores (COP, rendimientos) se limitan inferiormente a un valor muy pequeño
- Las horas de funcionamiento se limitan a [0, 8760] y las horas diarias a [0, 24]
- No se corrige la interacción entre medidas (doble contabilidad)
*/

use tracing::{info, trace};

use crate::{
    catalog::{lookup, suggest_led_wattage},
    enok::{
        AIR_DENSITY, AIR_HEAT_CAPACITY, DEGREE_HOURS, HOURS_PER_YEAR, SETPOINT_SAVING_PER_DEGREE,
    },
    error::{EnokError, Result},
    numops::{clamp, floor_eps, floor_zero, posdif, EPSILON},
    types::{LedInput, MeasureInput, MeasureResult, PvEstimate},
};

/// Convierte m3/h a m3/s
fn m3h_to_m3s(airflow_m3h: f64) -> f64 {
    airflow_m3h / 3600.0
}

/// Limita las horas anuales a [0, 8760]
fn annual_hours(hours: f64) -> f64 {
    clamp(hours, 0.0, HOURS_PER_YEAR)
}

/// Ahorro por mejora del aislamiento (etterisolering) [kWh/año]
///
/// Insulation upgrade savings [kWh/year]
///
/// * `area` - insulated area [m2]
/// * `u_before` - U-value before [W/m2K]
/// * `u_after` - U-value after [W/m2K]
pub fn insulation(area: f64, u_before: f64, u_after: f64) -> f64 {
    floor_zero(posdif(u_before, u_after) * area * DEGREE_HOURS / 1000.0)
}

/// Ahorro por mejora del recuperador de calor (varmegjenvinner) [kWh/año]
///
/// Heat recovery upgrade savings [kWh/year]
///
/// The ventilation heat loss coefficient ρ·c_p·q [kW/K] is scaled by the degree hours and by
/// the fraction of the year the unit runs.
///
/// * `airflow_m3h` - airflow [m3/h]
/// * `eff_before` - temperature efficiency before [-]
/// * `eff_after` - temperature efficiency after [-]
/// * `hours` - annual operating hours [h]
pub fn heat_recovery(airflow_m3h: f64, eff_before: f64, eff_after: f64, hours: f64) -> f64 {
    let h_ve = AIR_DENSITY * AIR_HEAT_CAPACITY * m3h_to_m3s(airflow_m3h) / 1000.0; // kW/K
    let duty = annual_hours(hours) / HOURS_PER_YEAR;
    floor_zero(posdif(eff_after, eff_before) * h_ve * DEGREE_HOURS * duty)
}

/// Ahorro por reducción de la SFP de ventiladores [kWh/año]
///
/// Fan power reduction savings [kWh/year]
///
/// * `airflow_m3h` - airflow [m3/h]
/// * `sfp_before` - specific fan power before [kW/(m3/s)]
/// * `sfp_after` - specific fan power after [kW/(m3/s)]
/// * `hours` - annual operating hours [h]
pub fn fan_power(airflow_m3h: f64, sfp_before: f64, sfp_after: f64, hours: f64) -> f64 {
    floor_zero(posdif(sfp_before, sfp_after) * m3h_to_m3s(airflow_m3h) * annual_hours(hours))
}

/// Ahorro de energía suministrada por conversión a bomba de calor [kWh/año]
///
/// Heat pump conversion savings of delivered energy [kWh/year]
///
/// * `heat_demand` - annual net heat demand [kWh/year]
/// * `eff_old` - efficiency of the old system [-]
/// * `cop` - heat pump coefficient of performance [-]
/// * `coverage` - fraction of the demand covered by the heat pump [0, 1]
pub fn heat_pump(heat_demand: f64, eff_old: f64, cop: f64, coverage: f64) -> f64 {
    let eff_old = floor_eps(eff_old, EPSILON);
    let cop = floor_eps(cop, EPSILON);
    let coverage = clamp(coverage, 0.0, 1.0);
    floor_zero(heat_demand * coverage * (1.0 / eff_old - 1.0 / cop))
}

/// Ahorro por reducción de la temperatura de consigna [kWh/año]
///
/// Setpoint reduction savings [kWh/year], 5% of the heating demand per °C
pub fn setpoint(heat_demand: f64, delta_t: f64) -> f64 {
    floor_zero(heat_demand * SETPOINT_SAVING_PER_DEGREE * delta_t)
}

/// Ahorro por reducción nocturna de temperatura (nattsenking) [kWh/año]
///
/// Night setback savings [kWh/year], setpoint heuristic scaled by the daily setback fraction
pub fn night_setback(heat_demand: f64, delta_t: f64, hours_per_day: f64) -> f64 {
    let duty = clamp(hours_per_day, 0.0, 24.0) / 24.0;
    floor_zero(heat_demand * SETPOINT_SAVING_PER_DEGREE * delta_t * duty)
}

/// Ahorro por sustitución de luminarias por LED [kWh/año]
///
/// LED retrofit savings [kWh/year]
///
/// * `count` - number of fixtures
/// * `old_wattage` - power of the old fixture [W]
/// * `new_wattage` - power of the LED fixture [W]
/// * `hours` - annual operating hours [h]
pub fn led(count: u32, old_wattage: f64, new_wattage: f64, hours: f64) -> f64 {
    floor_zero(posdif(old_wattage, new_wattage) * f64::from(count) * annual_hours(hours) / 1000.0)
}

/// Potencia instalada y producción anual de una instalación fotovoltaica
///
/// Solar PV installed power and annual yield
///
/// * `roof_area` - roof area [m2]
/// * `usable_fraction` - usable fraction of the roof [0, 1]
/// * `module_density` - module power density [kWp/m2]
/// * `specific_yield` - specific yield [kWh/kWp.year]
pub fn solar_pv(
    roof_area: f64,
    usable_fraction: f64,
    module_density: f64,
    specific_yield: f64,
) -> PvEstimate {
    let installed_kwp =
        floor_zero(roof_area * clamp(usable_fraction, 0.0, 1.0) * module_density);
    PvEstimate {
        installed_kwp,
        annual_yield_kwh: floor_zero(installed_kwp * specific_yield),
    }
}

/// Potencias de luminaria antigua y nueva para una medida LED
///
/// Old and new wattages of a LED measure. Values not given by the user come from the
/// catalog archetype.
///
/// # Errors
///
/// * Unknown archetype name
/// * Missing wattages when no archetype is given
pub fn led_wattages(input: &LedInput) -> Result<(f64, f64)> {
    match &input.archetype {
        Some(name) => {
            let archetype = lookup(name)?;
            let old = input
                .old_wattage
                .unwrap_or_else(|| suggest_old_wattage(archetype.nominal_wattage));
            let new = input
                .new_wattage
                .unwrap_or_else(|| suggest_led_wattage(archetype, Some(old)));
            Ok((old, new))
        }
        None => match (input.old_wattage, input.new_wattage) {
            (Some(old), Some(new)) => Ok((old, new)),
            _ => Err(EnokError::WrongInput(
                "LED-tiltak uten armaturtype må oppgi både gammel og ny effekt".into(),
            )),
        },
    }
}

fn suggest_old_wattage(nominal: Option<f64>) -> f64 {
    nominal.unwrap_or(crate::catalog::CUSTOM_BASELINE_WATTAGE)
}

impl MeasureInput {
    /// Ahorro energético anual de la medida
    ///
    /// Annual energy savings of the measure [kWh/year]
    ///
    /// # Errors
    ///
    /// * LED measures with an unknown archetype or missing wattages
    pub fn energy_savings(&self) -> Result<MeasureResult> {
        let energy_kwh = match self {
            MeasureInput::Insulation(i) => insulation(i.area, i.u_before, i.u_after),
            MeasureInput::HeatRecovery(i) => heat_recovery(
                i.airflow_m3h,
                i.efficiency_before,
                i.efficiency_after,
                i.operating_hours.annual_hours(),
            ),
            MeasureInput::FanPower(i) => fan_power(
                i.airflow_m3h,
                i.sfp_before,
                i.sfp_after,
                i.operating_hours.annual_hours(),
            ),
            MeasureInput::HeatPump(i) => {
                heat_pump(i.heat_demand_kwh, i.efficiency_old, i.cop, i.coverage)
            }
            MeasureInput::Setpoint(i) => setpoint(i.heat_demand_kwh, i.temperature_reduction),
            MeasureInput::NightSetback(i) => {
                night_setback(i.heat_demand_kwh, i.setback, i.hours_per_day)
            }
            MeasureInput::Led(i) => {
                let (old, new) = led_wattages(i)?;
                led(i.fixture_count, old, new, i.operating_hours.annual_hours())
            }
            MeasureInput::SolarPv(i) => {
                let pv = solar_pv(
                    i.roof_area,
                    i.usable_fraction,
                    i.module_density,
                    i.specific_yield,
                );
                info!(
                    installed_kwp = pv.installed_kwp,
                    "Solcelleanlegg: {:.1} kWp installert effekt",
                    pv.installed_kwp
                );
                pv.annual_yield_kwh
            }
        };
        trace!(measure = %self.kind(), energy_kwh, "Ahorro calculado");
        Ok(energy_kwh.into())
    }
}
