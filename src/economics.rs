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
Conversión económica
====================

Conversión del ahorro energético anual en ahorro económico y reducción de emisiones de CO2,
y cálculo del periodo de retorno simple de la inversión.

No se redondea ningún valor: el redondeo corresponde a la presentación de resultados.
*/

use crate::types::{DerivedEconomics, EconomicAssumptions};

/// Ahorro económico [kr/año] y reducción de emisiones [kg CO2/año]
///
/// Annual cost savings and CO2 reduction of an energy saving
///
/// * `kwh` - annual energy savings [kWh/year]
/// * `price` - energy price [kr/kWh]
/// * `emission_g` - emission factor [g CO2/kWh]
pub fn derive_economics(kwh: f64, price: f64, emission_g: f64) -> (f64, f64) {
    (kwh * price, kwh * emission_g / 1000.0)
}

/// Periodo de retorno simple [años]
///
/// Simple payback in years. None when the annual cost saving is not positive.
pub fn payback_years(investment: f64, cost_saving: f64) -> Option<f64> {
    if cost_saving <= 0.0 {
        None
    } else {
        Some(investment / cost_saving)
    }
}

/// Resultados económicos de un ahorro energético con unas hipótesis dadas
///
/// Economic figures of an energy saving and its investment under the given assumptions
pub fn economics_for(
    kwh: f64,
    investment: f64,
    assumptions: &EconomicAssumptions,
) -> DerivedEconomics {
    let (cost_saving, co2_kg) = derive_economics(
        kwh,
        assumptions.price_per_kwh,
        assumptions.emission_g_per_kwh,
    );
    DerivedEconomics {
        cost_saving,
        co2_kg,
        payback_years: payback_years(investment, cost_saving),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn economics_derive_exact() {
        let (cost, co2) = derive_economics(24_883.2, 1.25, 20.0);
        assert_eq!(cost, 24_883.2 * 1.25);
        assert_eq!(co2, 24_883.2 * 20.0 / 1000.0);
        assert_eq!(derive_economics(0.0, 1.25, 20.0), (0.0, 0.0));
    }

    #[test]
    fn economics_payback() {
        assert_eq!(payback_years(100_000.0, 0.0), None);
        assert_eq!(payback_years(100_000.0, -50.0), None);
        assert_eq!(payback_years(100_000.0, 25_000.0), Some(4.0));
        assert_eq!(payback_years(0.0, 25_000.0), Some(0.0));
    }

    #[test]
    fn economics_for_assumptions() {
        let assumptions = EconomicAssumptions::new(1.0, 100.0);
        let eco = economics_for(10_000.0, 50_000.0, &assumptions);
        assert_eq!(
            eco,
            DerivedEconomics {
                cost_saving: 10_000.0,
                co2_kg: 1000.0,
                payback_years: Some(5.0),
            }
        );
        let eco = economics_for(10_000.0, 50_000.0, &assumptions.with_price(0.0));
        assert_eq!(eco.payback_years, None);
    }
}
