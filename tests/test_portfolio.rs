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

use std::fs::read_to_string;

use enokcalc::enok::{PortfolioReport, SENSITIVITY_PRICES_DEFAULT};
use enokcalc::types::*;
use enokcalc::*;
use pretty_assertions::assert_eq;

fn approx_equal(expected: f64, got: f64) -> bool {
    (expected - got).abs() < 1e-6 * expected.abs().max(1.0)
}

fn plan_from_file(path: &str) -> MeasurePlan {
    read_to_string(path).unwrap().parse().unwrap()
}

fn portfolio_from_file(path: &str) -> Portfolio {
    let mut portfolio = Portfolio::new();
    plan_from_file(path).apply(&mut portfolio).unwrap();
    portfolio
}

#[test]
fn portfolio_skole() {
    let portfolio = portfolio_from_file("test_data/tiltaksplan_skole.json");
    let keys: Vec<_> = portfolio
        .entries()
        .iter()
        .map(|e| e.measure_key.as_str())
        .collect();
    assert_eq!(keys, vec!["etterisolering", "nattsenking", "led"]);

    let totals = portfolio.aggregate(&EconomicAssumptions::new(1.0, 20.0));
    assert!(approx_equal(66_483.2, totals.energy_kwh));
    assert!(approx_equal(66_483.2, totals.cost_saving));
    assert!(approx_equal(1_329.664, totals.co2_kg));
    assert_eq!(totals.investment, 610_000.0);
    assert!(approx_equal(
        610_000.0 / 66_483.2,
        totals.payback_years.unwrap()
    ));
}

#[test]
fn portfolio_price_change_applies_to_all_rows() {
    let portfolio = portfolio_from_file("test_data/tiltaksplan_skole.json");
    let low = portfolio.rows(&EconomicAssumptions::new(1.0, 20.0));
    let high = portfolio.rows(&EconomicAssumptions::new(2.0, 20.0));
    for (l, h) in low.iter().zip(high.iter()) {
        assert_eq!(l.energy_kwh, h.energy_kwh);
        assert!(approx_equal(2.0 * l.cost_saving, h.cost_saving));
        assert!(approx_equal(
            l.payback_years.unwrap() / 2.0,
            h.payback_years.unwrap()
        ));
    }
}

#[test]
fn portfolio_ventilasjon_schedule() {
    let plan = plan_from_file("test_data/tiltaksplan_ventilasjon.json");
    let mut portfolio = Portfolio::new();
    plan.apply(&mut portfolio).unwrap();

    // 06:00 - 18:00, 5 días por semana, 52 semanas
    let expected = heat_recovery(20_000.0, 0.70, 0.85, 12.0 * 5.0 * 52.0);
    let entry = portfolio.get("varmegjenvinner").unwrap();
    assert!(approx_equal(expected, entry.energy_kwh));

    // Densidad de módulos por defecto
    let pv = portfolio.get("solcelle").unwrap();
    assert!(approx_equal(120_000.0, pv.energy_kwh));

    assert_eq!(plan.assumptions(), EconomicAssumptions::new(1.5, 100.0));
    let sweep = portfolio.sensitivity_sweep(&plan.sensitivity_prices(), &plan.assumptions());
    let prices: Vec<_> = sweep.iter().map(|s| s.price).collect();
    assert_eq!(prices, vec![1.0, 2.0]);
}

#[test]
fn portfolio_schedule_midnight() {
    let schedule = OperatingSchedule::new(
        "22:00".parse().unwrap(),
        "06:00".parse().unwrap(),
        7,
    );
    assert_eq!(schedule.annual_hours(), 8.0 * 7.0 * 52.0);
    let input = MeasureInput::FanPower(FanPowerInput {
        airflow_m3h: 3600.0,
        sfp_before: 2.0,
        sfp_after: 1.0,
        operating_hours: schedule.into(),
    });
    assert!(approx_equal(
        2912.0,
        input.energy_savings().unwrap().energy_kwh
    ));
}

#[test]
fn portfolio_clear_and_reuse() {
    let mut portfolio = portfolio_from_file("test_data/tiltaksplan_skole.json");
    portfolio.clear_all();
    assert!(portfolio.is_empty());
    let totals = portfolio.aggregate(&EconomicAssumptions::default());
    assert_eq!(totals.payback_years, None);
    assert_eq!(totals.energy_kwh, 0.0);

    let kind = MeasureKind::Setpoint;
    let saving = setpoint(100_000.0, 1.0);
    portfolio.upsert(&kind.key(), kind.display_name(), saving, 5_000.0);
    assert_eq!(portfolio.len(), 1);
}

#[test]
fn portfolio_led_from_selection() {
    let mut selection = LuminaireSelection::new("T8 lysrør 2x58 W").unwrap();
    selection.set_new_wattage(50.0);
    let saving = led(100, selection.old_wattage(), selection.new_wattage(), 4000.0);
    // (116 - 50) W x 100 x 4000 h / 1000
    assert!(approx_equal(26_400.0, saving));
}

#[test]
fn portfolio_report_json() {
    let portfolio = portfolio_from_file("test_data/tiltaksplan_skole.json");
    let report = PortfolioReport::new(
        &portfolio,
        &EconomicAssumptions::default(),
        &SENSITIVITY_PRICES_DEFAULT,
    );
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.sensitivity.len(), 6);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rows"][2]["measure_key"], "led");
    assert_eq!(json["assumptions"]["price_per_kwh"], 1.25);
}
