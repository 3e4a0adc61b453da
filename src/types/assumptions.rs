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
Hipótesis económicas
====================

Precio de la energía y factor de emisión usados para derivar ahorros económicos y de CO2.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enok::{EMISSION_DEFAULT, PRICE_DEFAULT};

/// Hipótesis económicas globales
///
/// Economic assumptions used at read time for every derived figure.
/// They are passed explicitly to the economics and portfolio functions.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicAssumptions {
    /// Energy price [kr/kWh]
    pub price_per_kwh: f64,
    /// Emission factor [g CO2/kWh]
    pub emission_g_per_kwh: f64,
}

impl EconomicAssumptions {
    /// Constructor
    pub fn new(price_per_kwh: f64, emission_g_per_kwh: f64) -> Self {
        Self {
            price_per_kwh,
            emission_g_per_kwh,
        }
    }

    /// Copia con otro precio de la energía
    ///
    /// Same assumptions with a different energy price
    pub fn with_price(self, price_per_kwh: f64) -> Self {
        Self {
            price_per_kwh,
            ..self
        }
    }
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self::new(PRICE_DEFAULT, EMISSION_DEFAULT)
    }
}

impl fmt::Display for EconomicAssumptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ pris: {:.2} kr/kWh, utslipp: {:.1} g CO2/kWh }}",
            self.price_per_kwh, self.emission_g_per_kwh
        )
    }
}

/// Resultados económicos derivados de un ahorro energético
///
/// Economic figures derived from an energy saving
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedEconomics {
    /// Annual cost savings [kr/year]
    pub cost_saving: f64,
    /// Annual CO2 reduction [kg/year]
    pub co2_kg: f64,
    /// Simple payback [years], None when the cost saving is not positive
    pub payback_years: Option<f64>,
}
