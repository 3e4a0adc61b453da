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
Cartera de medidas
==================

Lista de medidas seleccionadas, identificadas por su clave, con su ahorro energético anual
y su inversión.

- Solo se guardan el ahorro energético y la inversión de cada medida
- Los resultados económicos se calculan siempre al consultar, con las hipótesis económicas
  vigentes en ese momento, de modo que un cambio de precio o de factor de emisión afecta
  a todas las medidas ya incluidas
- Volver a incluir una medida con la misma clave sustituye sus datos y mantiene su posición
- Solo se puede vaciar la cartera completa
- No se corrige la doble contabilidad de ahorros entre medidas
*/

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    economics::{economics_for, payback_years},
    types::EconomicAssumptions,
};

/// Medida incluida en la cartera
///
/// Portfolio entry. Economic figures are not stored, see `Portfolio::compute_row`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Unique key (measure kind key)
    pub measure_key: String,
    /// Display name
    pub display_name: String,
    /// Annual energy savings [kWh/year]
    pub energy_kwh: f64,
    /// Investment cost [kr]
    pub investment: f64,
}

/// Fila de resultados de una medida de la cartera
///
/// Portfolio row with economics derived from the current assumptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRow {
    /// Unique key
    pub measure_key: String,
    /// Display name
    pub display_name: String,
    /// Annual energy savings [kWh/year]
    pub energy_kwh: f64,
    /// Annual cost savings [kr/year]
    pub cost_saving: f64,
    /// Annual CO2 reduction [kg/year]
    pub co2_kg: f64,
    /// Investment cost [kr]
    pub investment: f64,
    /// Simple payback [years]
    pub payback_years: Option<f64>,
}

/// Totales de la cartera
///
/// Portfolio totals. Payback is computed from the summed investment and cost savings.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct PortfolioTotals {
    /// Annual energy savings [kWh/year]
    pub energy_kwh: f64,
    /// Annual cost savings [kr/year]
    pub cost_saving: f64,
    /// Annual CO2 reduction [kg/year]
    pub co2_kg: f64,
    /// Investment cost [kr]
    pub investment: f64,
    /// Simple payback of the whole portfolio [years]
    pub payback_years: Option<f64>,
}

/// Resultado de la cartera para un precio de la energía
///
/// Portfolio cost savings and payback for a given energy price
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct SensitivityPoint {
    /// Energy price [kr/kWh]
    pub price: f64,
    /// Annual cost savings [kr/year]
    pub cost_saving: f64,
    /// Simple payback of the whole portfolio [years]
    pub payback_years: Option<f64>,
}

/// Cartera de medidas seleccionadas
///
/// Keyed collection of selected measures, in insertion order.
/// Serialised as the list of entries. Deserialising goes through `upsert`, so a repeated
/// key keeps its first position and the data of its last appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PortfolioEntry>", into = "Vec<PortfolioEntry>")]
pub struct Portfolio {
    entries: Vec<PortfolioEntry>,
}

impl From<Vec<PortfolioEntry>> for Portfolio {
    fn from(entries: Vec<PortfolioEntry>) -> Self {
        let mut portfolio = Portfolio::new();
        for e in entries {
            portfolio.upsert(&e.measure_key, &e.display_name, e.energy_kwh, e.investment);
        }
        portfolio
    }
}

impl From<Portfolio> for Vec<PortfolioEntry> {
    fn from(portfolio: Portfolio) -> Self {
        portfolio.entries
    }
}

/// Precios de sensibilidad ordenados y sin duplicados
///
/// Sensitivity prices sorted in ascending order, without duplicates
pub fn normalize_prices(prices: &[f64]) -> Vec<f64> {
    prices
        .iter()
        .cloned()
        .sorted_by(|a, b| a.total_cmp(b))
        .dedup()
        .collect()
}

impl Portfolio {
    /// Cartera vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Incluye o sustituye una medida
    ///
    /// Insert the measure or fully replace the entry with the same key.
    /// A replaced entry keeps its position.
    pub fn upsert(
        &mut self,
        measure_key: &str,
        display_name: &str,
        energy_kwh: f64,
        investment: f64,
    ) {
        let entry = PortfolioEntry {
            measure_key: measure_key.to_string(),
            display_name: display_name.to_string(),
            energy_kwh,
            investment,
        };
        match self.entries.iter_mut().find(|e| e.measure_key == measure_key) {
            Some(existing) => {
                debug!(key = measure_key, energy_kwh, investment, "Medida sustituida");
                *existing = entry;
            }
            None => {
                debug!(key = measure_key, energy_kwh, investment, "Medida incluida");
                self.entries.push(entry);
            }
        }
    }

    /// Vacía la cartera
    pub fn clear_all(&mut self) {
        if !self.entries.is_empty() {
            debug!(n = self.entries.len(), "Cartera vaciada");
        }
        self.entries.clear();
    }

    /// Medidas en orden de inclusión
    ///
    /// Entries in insertion order
    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Medida con la clave indicada
    pub fn get(&self, measure_key: &str) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|e| e.measure_key == measure_key)
    }

    /// Número de medidas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// La cartera no tiene medidas
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resultados de una medida con las hipótesis económicas vigentes
    ///
    /// Row for an entry, derived from the current assumptions
    pub fn compute_row(entry: &PortfolioEntry, assumptions: &EconomicAssumptions) -> PortfolioRow {
        let eco = economics_for(entry.energy_kwh, entry.investment, assumptions);
        PortfolioRow {
            measure_key: entry.measure_key.clone(),
            display_name: entry.display_name.clone(),
            energy_kwh: entry.energy_kwh,
            cost_saving: eco.cost_saving,
            co2_kg: eco.co2_kg,
            investment: entry.investment,
            payback_years: eco.payback_years,
        }
    }

    /// Resultados de todas las medidas
    ///
    /// Rows for all entries, in insertion order
    pub fn rows(&self, assumptions: &EconomicAssumptions) -> Vec<PortfolioRow> {
        self.entries
            .iter()
            .map(|e| Self::compute_row(e, assumptions))
            .collect()
    }

    /// Totales de la cartera
    ///
    /// Aggregate the portfolio. Each quantity is summed independently and the payback is
    /// computed from the totals, not from the individual paybacks.
    pub fn aggregate(&self, assumptions: &EconomicAssumptions) -> PortfolioTotals {
        let mut totals = self
            .rows(assumptions)
            .iter()
            .fold(PortfolioTotals::default(), |mut acc, row| {
                acc.energy_kwh += row.energy_kwh;
                acc.cost_saving += row.cost_saving;
                acc.co2_kg += row.co2_kg;
                acc.investment += row.investment;
                acc
            });
        totals.payback_years = payback_years(totals.investment, totals.cost_saving);
        totals
    }

    /// Sensibilidad al precio de la energía
    ///
    /// Portfolio cost savings and payback for each distinct price, in ascending order,
    /// keeping the energy savings of the portfolio fixed
    pub fn sensitivity_sweep(
        &self,
        prices: &[f64],
        assumptions: &EconomicAssumptions,
    ) -> Vec<SensitivityPoint> {
        let totals = self.aggregate(assumptions);
        normalize_prices(prices)
            .into_iter()
            .map(|price| {
                let eco = economics_for(
                    totals.energy_kwh,
                    totals.investment,
                    &assumptions.with_price(price),
                );
                SensitivityPoint {
                    price,
                    cost_saving: eco.cost_saving,
                    payback_years: eco.payback_years,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn portfolio_ab() -> Portfolio {
        let mut p = Portfolio::new();
        p.upsert("a", "A", 10_000.0, 50_000.0);
        p.upsert("b", "B", 40_000.0, 50_000.0);
        p
    }

    #[test]
    fn portfolio_upsert_overwrites() {
        let mut p = Portfolio::new();
        p.upsert("a", "A", 100.0, 1000.0);
        p.upsert("a", "A2", 200.0, 2000.0);
        assert_eq!(p.len(), 1);
        assert_eq!(
            p.entries()[0],
            PortfolioEntry {
                measure_key: "a".into(),
                display_name: "A2".into(),
                energy_kwh: 200.0,
                investment: 2000.0,
            }
        );
    }

    #[test]
    fn portfolio_upsert_keeps_position() {
        let mut p = portfolio_ab();
        p.upsert("c", "C", 1.0, 1.0);
        p.upsert("a", "A", 5.0, 5.0);
        let keys: Vec<_> = p.entries().iter().map(|e| e.measure_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(p.get("a").unwrap().energy_kwh, 5.0);
        assert!(p.get("z").is_none());
    }

    #[test]
    fn portfolio_clear_idempotent() {
        let mut p = portfolio_ab();
        p.clear_all();
        assert!(p.is_empty());
        p.clear_all();
        assert!(p.is_empty());
    }

    #[test]
    fn portfolio_rows_use_current_assumptions() {
        let p = portfolio_ab();
        let row = Portfolio::compute_row(&p.entries()[0], &EconomicAssumptions::new(1.0, 20.0));
        assert_eq!(row.cost_saving, 10_000.0);
        assert_eq!(row.co2_kg, 200.0);
        assert_eq!(row.payback_years, Some(5.0));
        // Cambio de precio después de incluir la medida
        let row = Portfolio::compute_row(&p.entries()[0], &EconomicAssumptions::new(2.0, 50.0));
        assert_eq!(row.cost_saving, 20_000.0);
        assert_eq!(row.co2_kg, 500.0);
        assert_eq!(row.payback_years, Some(2.5));
    }

    #[test]
    fn portfolio_aggregate_payback_from_totals() {
        let p = portfolio_ab();
        let assumptions = EconomicAssumptions::new(1.0, 20.0);
        // Retornos individuales: 5 y 1.25 años
        let rows = p.rows(&assumptions);
        assert_eq!(rows[0].payback_years, Some(5.0));
        assert_eq!(rows[1].payback_years, Some(1.25));
        let totals = p.aggregate(&assumptions);
        assert_eq!(totals.energy_kwh, 50_000.0);
        assert_eq!(totals.cost_saving, 50_000.0);
        assert_eq!(totals.co2_kg, 1000.0);
        assert_eq!(totals.investment, 100_000.0);
        // 100000 / 50000 = 2, ni la media (3.125) ni la suma (6.25)
        assert_eq!(totals.payback_years, Some(2.0));
    }

    #[test]
    fn portfolio_empty_aggregate() {
        let p = Portfolio::new();
        let totals = p.aggregate(&EconomicAssumptions::default());
        assert_eq!(totals, PortfolioTotals::default());
        assert_eq!(totals.payback_years, None);
        assert!(p.rows(&EconomicAssumptions::default()).is_empty());
    }

    #[test]
    fn portfolio_sensitivity_sweep() {
        let p = portfolio_ab();
        let assumptions = EconomicAssumptions::new(1.0, 20.0);
        let sweep = p.sensitivity_sweep(&[2.0, 0.5, 1.0, 2.0, 0.0], &assumptions);
        let prices: Vec<_> = sweep.iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![0.0, 0.5, 1.0, 2.0]);
        assert_eq!(
            sweep[0],
            SensitivityPoint {
                price: 0.0,
                cost_saving: 0.0,
                payback_years: None
            }
        );
        assert_eq!(sweep[1].cost_saving, 25_000.0);
        assert_eq!(sweep[1].payback_years, Some(4.0));
        assert_eq!(sweep[3].payback_years, Some(1.0));
    }

    #[test]
    fn portfolio_normalize_prices() {
        assert_eq!(normalize_prices(&[2.0, 1.0, 1.0]), vec![1.0, 2.0]);
        assert_eq!(normalize_prices(&[1.0, 0.5]), vec![0.5, 1.0]);
        assert!(normalize_prices(&[]).is_empty());
    }

    #[test]
    fn portfolio_deserialize_repeated_key() {
        let p: Portfolio = serde_json::from_str(
            r#"[
                { "measure_key": "a", "display_name": "A", "energy_kwh": 100, "investment": 1000 },
                { "measure_key": "b", "display_name": "B", "energy_kwh": 50, "investment": 500 },
                { "measure_key": "a", "display_name": "A2", "energy_kwh": 200, "investment": 2000 }
            ]"#,
        )
        .unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.entries()[0].display_name, "A2");
        let totals = p.aggregate(&EconomicAssumptions::new(1.0, 20.0));
        assert_eq!(totals.energy_kwh, 250.0);
        assert_eq!(totals.investment, 2500.0);
    }

    #[test]
    fn portfolio_serialize_entries() {
        let p = portfolio_ab();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json[1]["measure_key"], "b");
        let back: Portfolio = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
