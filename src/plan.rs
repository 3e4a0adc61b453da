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
Plan de medidas
===============

Lectura de un plan de medidas en formato JSON y su inclusión en la cartera.

Un plan define, opcionalmente, las hipótesis económicas (precio, factor de emisión y precios
para el análisis de sensibilidad) y una lista de medidas con sus datos de entrada y su inversión.

```json
{
    "price_per_kwh": 1.25,
    "measures": [
        { "measure": "etterisolering", "investment": 450000,
          "area": 1800, "u_before": 0.30, "u_after": 0.18 }
    ]
}
```
*/

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    enok::{SENSITIVITY_PRICES_DEFAULT, SPECIFIC_YIELD_OPTIONS},
    error::{EnokError, Result},
    portfolio::Portfolio,
    types::{EconomicAssumptions, MeasureInput, OperatingHours},
};

/// Medida de un plan
///
/// Planned measure: inputs and investment cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeasure {
    /// Display name. Defaults to the name of the measure kind
    #[serde(default)]
    pub name: Option<String>,
    /// Investment cost [kr]
    #[serde(default)]
    pub investment: f64,
    /// Measure inputs
    #[serde(flatten)]
    pub input: MeasureInput,
}

impl PlannedMeasure {
    /// Nombre mostrado de la medida
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.input.kind().display_name().to_string(),
        }
    }
}

/// Plan de medidas
///
/// Measure plan with optional economic assumptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurePlan {
    /// Energy price [kr/kWh]
    #[serde(default)]
    pub price_per_kwh: Option<f64>,
    /// Emission factor [g CO2/kWh]
    #[serde(default)]
    pub emission_g_per_kwh: Option<f64>,
    /// Prices for the sensitivity analysis [kr/kWh]
    #[serde(default)]
    pub sensitivity_prices: Option<Vec<f64>>,
    /// Planned measures
    #[serde(default)]
    pub measures: Vec<PlannedMeasure>,
}

impl FromStr for MeasurePlan {
    type Err = EnokError;

    fn from_str(s: &str) -> Result<MeasurePlan> {
        let plan: MeasurePlan = serde_json::from_str(s)?;
        plan.validate()?;
        debug!(n = plan.measures.len(), "Plan de medidas leído");
        Ok(plan)
    }
}

/// Comprueba que un valor no sea negativo ni infinito
fn check_non_negative(value: f64, descr: &str) -> Result<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(EnokError::WrongInput(format!(
            "{} kan ikke være negativ og er {}",
            descr, value
        )));
    }
    Ok(())
}

impl MeasurePlan {
    /// Comprueba los valores del plan
    ///
    /// Check the plan values that the formulas do not clamp: price, emission factor,
    /// sensitivity prices and investments must be non negative, and operating schedules
    /// must run between 1 and 7 days per week and 1 and 52 weeks per year.
    ///
    /// # Errors
    ///
    /// * `WrongInput` for the first offending value
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price_per_kwh {
            check_non_negative(price, "Energiprisen")?;
        }
        if let Some(emission) = self.emission_g_per_kwh {
            check_non_negative(emission, "Utslippsfaktoren")?;
        }
        for price in self.sensitivity_prices.iter().flatten() {
            check_non_negative(*price, "Prisen for følsomhetsanalyse")?;
        }
        for planned in &self.measures {
            let name = planned.display_name();
            check_non_negative(planned.investment, &format!("Investeringen i \"{}\"", name))?;
            let hours = match &planned.input {
                MeasureInput::HeatRecovery(i) => Some(&i.operating_hours),
                MeasureInput::FanPower(i) => Some(&i.operating_hours),
                MeasureInput::Led(i) => Some(&i.operating_hours),
                _ => None,
            };
            if let Some(OperatingHours::Schedule(schedule)) = hours {
                if !(1..=7).contains(&schedule.days_per_week) {
                    return Err(EnokError::WrongInput(format!(
                        "Driftsdager per uke i \"{}\" må være mellom 1 og 7 og er {}",
                        name, schedule.days_per_week
                    )));
                }
                if !(1.0..=52.0).contains(&schedule.weeks_per_year) {
                    return Err(EnokError::WrongInput(format!(
                        "Driftsuker per år i \"{}\" må være mellom 1 og 52 og er {}",
                        name, schedule.weeks_per_year
                    )));
                }
            }
        }
        Ok(())
    }

    /// Hipótesis económicas del plan, con valores por defecto si no se indican
    ///
    /// Economic assumptions of the plan, falling back to the defaults
    pub fn assumptions(&self) -> EconomicAssumptions {
        let defaults = EconomicAssumptions::default();
        EconomicAssumptions::new(
            self.price_per_kwh.unwrap_or(defaults.price_per_kwh),
            self.emission_g_per_kwh.unwrap_or(defaults.emission_g_per_kwh),
        )
    }

    /// Precios del análisis de sensibilidad, con valores por defecto si no se indican
    pub fn sensitivity_prices(&self) -> Vec<f64> {
        self.sensitivity_prices
            .clone()
            .unwrap_or_else(|| SENSITIVITY_PRICES_DEFAULT.to_vec())
    }

    /// Incluye las medidas del plan en la cartera
    ///
    /// Compute the energy savings of every planned measure and upsert it in the portfolio,
    /// keyed by the measure kind. A later measure of the same kind replaces an earlier one.
    ///
    /// # Errors
    ///
    /// * LED measures with an unknown archetype or missing wattages.
    ///   Measures before the failing one stay in the portfolio.
    pub fn apply(&self, portfolio: &mut Portfolio) -> Result<()> {
        for planned in &self.measures {
            let kind = planned.input.kind();
            let key = kind.key();
            if portfolio.get(&key).is_some() {
                warn!(
                    "Tiltaket \"{}\" er allerede med i porteføljen og blir overskrevet",
                    kind.display_name()
                );
            }
            if let MeasureInput::SolarPv(pv) = &planned.input {
                if !SPECIFIC_YIELD_OPTIONS.contains(&pv.specific_yield) {
                    warn!(
                        "Spesifikk produksjon {} kWh/kWp utenfor standardverdiene",
                        pv.specific_yield
                    );
                }
            }
            let result = planned.input.energy_savings()?;
            portfolio.upsert(
                &key,
                &planned.display_name(),
                result.energy_kwh,
                planned.investment,
            );
        }
        Ok(())
    }
}
