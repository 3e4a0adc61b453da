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
EnokCalc
========

This crate provides a library and binary for a **rough estimation of the energy savings of
building retrofit measures** and of their economics.

Supported measures are envelope insulation (etterisolering), heat recovery upgrade
(varmegjenvinner), specific fan power reduction (SFP), heat pump conversion (varmepumpe),
indoor setpoint reduction, night setback (nattsenking), LED lighting retrofit and rooftop
solar PV (solcelle).

Selected measures are collected in a portfolio that only stores the annual energy savings
and the investment of each measure. Cost savings, CO2 reduction and simple payback are
derived on every read from the economic assumptions in effect, so that a price change
applies to every measure already in the portfolio.

It also holds the following assumptions:

- single coefficients and constant heating degree days (4800 K·d), no hourly simulation
- savings are never negative, a measure that worsens the initial state saves nothing
- portfolio payback is computed from total investment and total cost savings
- no correction for interaction between measures (double counting)

Este *crate* proporciona una biblioteca y un programa para la **estimación aproximada del ahorro
energético de medidas de rehabilitación de edificios** y de sus resultados económicos.

Las medidas seleccionadas se agrupan en una cartera que solo guarda el ahorro energético anual
y la inversión de cada medida. El ahorro económico, la reducción de emisiones y el periodo de
retorno se calculan en cada consulta con las hipótesis económicas vigentes.

También realiza los siguientes supuestos:

- coeficientes únicos y grados-día constantes (4800 K·d), sin simulación horaria
- el ahorro nunca es negativo
- el periodo de retorno de la cartera se calcula con la inversión y el ahorro totales
- no se corrige la interacción entre medidas (doble contabilidad)

# Ejemplo

```rust
use enokcalc::*;
use enokcalc::types::*;

// Ahorro de una medida de aislamiento
let input = MeasureInput::Insulation(InsulationInput {
    area: 1800.0,
    u_before: 0.30,
    u_after: 0.18,
});
let saving = input.energy_savings().unwrap();

// Inclusión en la cartera
let mut portfolio = Portfolio::new();
let kind = input.kind();
portfolio.upsert(&kind.key(), kind.display_name(), saving.energy_kwh, 450_000.0);

// Resultados con las hipótesis económicas por defecto
let assumptions = EconomicAssumptions::default();
let totals = portfolio.aggregate(&assumptions);
assert!(totals.payback_years.is_some());

// Visualización compacta
println!(
    "{}",
    enok::portfolio_to_plain(&portfolio, &assumptions, &enok::SENSITIVITY_PRICES_DEFAULT)
);
```

*/

#![deny(missing_docs)]

mod catalog;
mod economics;
mod measures;
mod numops;
mod plan;
mod portfolio;
mod schedule;

pub mod enok;
pub mod error;
pub mod types;

pub use catalog::*;
pub use economics::*;
pub use measures::*;
pub use plan::*;
pub use portfolio::*;
pub use schedule::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
