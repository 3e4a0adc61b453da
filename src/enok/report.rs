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
Informes de la cartera
======================

Conversión de la cartera de medidas a un informe en texto simple o serializable a JSON.

El redondeo de los resultados se hace solamente aquí.
*/

use itertools::Itertools;
use serde::Serialize;

use crate::{
    catalog::LUMINAIRE_CATALOG,
    portfolio::{Portfolio, PortfolioRow, PortfolioTotals, SensitivityPoint},
    types::EconomicAssumptions,
};

/// Muestra en formato simple
///
/// Compact plain text representation
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

/// Informe de la cartera con las hipótesis económicas vigentes
///
/// Portfolio report, derived from the current economic assumptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    /// Economic assumptions used for the report
    pub assumptions: EconomicAssumptions,
    /// Results by measure
    pub rows: Vec<PortfolioRow>,
    /// Portfolio totals
    pub totals: PortfolioTotals,
    /// Price sensitivity of the portfolio
    pub sensitivity: Vec<SensitivityPoint>,
}

impl PortfolioReport {
    /// Genera el informe de la cartera
    ///
    /// Build the report of a portfolio for the given assumptions and sensitivity prices
    pub fn new(portfolio: &Portfolio, assumptions: &EconomicAssumptions, prices: &[f64]) -> Self {
        Self {
            assumptions: *assumptions,
            rows: portfolio.rows(assumptions),
            totals: portfolio.aggregate(assumptions),
            sensitivity: portfolio.sensitivity_sweep(prices, assumptions),
        }
    }
}

/// Número redondeado a entero con separador de miles (espacio)
fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let groups = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .join(" ");
    if rounded < 0.0 {
        format!("-{}", groups)
    } else {
        groups
    }
}

/// Muestra un periodo de retorno o un guion si no está definido
fn payback_or_dash(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.1} år", v),
        None => "-".to_string(),
    }
}

fn row_to_plain(row: &PortfolioRow) -> String {
    format!(
        "- {}: {} kWh/år, {} kr/år, {} kg CO2/år, investering {} kr, tilbakebetaling {}",
        row.display_name,
        thousands(row.energy_kwh),
        thousands(row.cost_saving),
        thousands(row.co2_kg),
        thousands(row.investment),
        payback_or_dash(row.payback_years)
    )
}

fn sensitivity_to_plain(point: &SensitivityPoint) -> String {
    format!(
        "- {:.2} kr/kWh: {} kr/år, tilbakebetaling {}",
        point.price,
        thousands(point.cost_saving),
        payback_or_dash(point.payback_years)
    )
}

impl AsPlain for PortfolioReport {
    fn to_plain(&self) -> String {
        let price = self.assumptions.price_per_kwh;
        let emission = self.assumptions.emission_g_per_kwh;
        let rows = if self.rows.is_empty() {
            "Ingen tiltak valgt".to_string()
        } else {
            self.rows.iter().map(row_to_plain).join("\n")
        };
        let sensitivity = self.sensitivity.iter().map(sensitivity_to_plain).join("\n");
        let t = &self.totals;

        format!(
            "** Tiltaksportefølje

Energipris: {:.2} kr/kWh
Utslippsfaktor: {:.1} g CO2/kWh

** Tiltak

{}

** Sum

Energisparing: {} kWh/år
Kostnadsbesparelse: {} kr/år
CO2-reduksjon: {} kg/år
Investering: {} kr
Tilbakebetalingstid: {}

** Følsomhet for energipris

{}

Merk: Grove estimat. Samspill mellom tiltak (dobbelttelling) er ikke korrigert.",
            price,
            emission,
            rows,
            thousands(t.energy_kwh),
            thousands(t.cost_saving),
            thousands(t.co2_kg),
            thousands(t.investment),
            payback_or_dash(t.payback_years),
            sensitivity
        )
    }
}

/// Informe en formato simple de una cartera
///
/// Plain text report of a portfolio
pub fn portfolio_to_plain(
    portfolio: &Portfolio,
    assumptions: &EconomicAssumptions,
    prices: &[f64],
) -> String {
    PortfolioReport::new(portfolio, assumptions, prices).to_plain()
}

/// Lista de tipos de luminaria en formato simple
///
/// Plain text listing of the luminaire catalog
pub fn catalog_to_plain() -> String {
    LUMINAIRE_CATALOG
        .iter()
        .map(|a| {
            let nominal = match a.nominal_wattage {
                Some(w) => format!("{:.0} W", w),
                None => "egendefinert".to_string(),
            };
            format!("- {}: {}, LED-faktor {:.2}", a.name, nominal, a.led_factor)
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(24_883.2), "24 883");
        assert_eq!(thousands(1_234_567.8), "1 234 568");
        assert_eq!(thousands(-4_500.0), "-4 500");
    }

    #[test]
    fn report_plain() {
        let mut p = Portfolio::new();
        p.upsert("a", "Tiltak A", 10_000.0, 50_000.0);
        p.upsert("b", "Tiltak B", 40_000.0, 50_000.0);
        let plain = portfolio_to_plain(&p, &EconomicAssumptions::new(1.0, 20.0), &[0.0, 1.0]);
        assert!(plain.contains(
            "- Tiltak A: 10 000 kWh/år, 10 000 kr/år, 200 kg CO2/år, investering 50 000 kr, tilbakebetaling 5.0 år"
        ));
        assert!(plain.contains("Tilbakebetalingstid: 2.0 år"));
        assert!(plain.contains("- 0.00 kr/kWh: 0 kr/år, tilbakebetaling -"));
        assert!(plain.contains("- 1.00 kr/kWh: 50 000 kr/år, tilbakebetaling 2.0 år"));
    }

    #[test]
    fn report_plain_empty() {
        let plain = portfolio_to_plain(&Portfolio::new(), &EconomicAssumptions::default(), &[]);
        assert!(plain.contains("Ingen tiltak valgt"));
        assert!(plain.contains("Tilbakebetalingstid: -"));
    }

    #[test]
    fn report_json() {
        let mut p = Portfolio::new();
        p.upsert("a", "Tiltak A", 10_000.0, 0.0);
        let report = PortfolioReport::new(&p, &EconomicAssumptions::new(0.0, 0.0), &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rows"][0]["measure_key"], "a");
        assert!(json["totals"]["payback_years"].is_null());
    }

    #[test]
    fn report_catalog() {
        let plain = catalog_to_plain();
        assert!(plain.starts_with("- Egendefinert: egendefinert, LED-faktor 0.50"));
        assert!(plain.contains("- T8 lysrør 2x36 W: 72 W, LED-faktor 0.50"));
    }
}
