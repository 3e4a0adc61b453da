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

/*! Valores de referencia y presentación de resultados
 *
 * - valores climáticos y físicos de referencia
 * - hipótesis económicas por defecto
 * - salida/visualización de la cartera de medidas
*/

mod report;

pub use report::*;

/// Grados-día de calefacción de referencia [K·d]
pub const DEGREE_DAYS: f64 = 4800.0;
/// Grados-hora de calefacción de referencia [K·h]
pub const DEGREE_HOURS: f64 = DEGREE_DAYS * 24.0;
/// Horas del año [h]
pub const HOURS_PER_YEAR: f64 = 8760.0;
/// Densidad del aire [kg/m3]
pub const AIR_DENSITY: f64 = 1.2;
/// Calor específico del aire [J/(kg·K)]
pub const AIR_HEAT_CAPACITY: f64 = 1006.0;
/// Reducción de la demanda de calefacción por grado de reducción de consigna [-/°C]
pub const SETPOINT_SAVING_PER_DEGREE: f64 = 0.05;

/// Precio de la energía por defecto [kr/kWh]
pub const PRICE_DEFAULT: f64 = 1.25;
/// Factor de emisión por defecto [g CO2/kWh]
pub const EMISSION_DEFAULT: f64 = 20.0;
/// Precios por defecto del análisis de sensibilidad [kr/kWh]
pub const SENSITIVITY_PRICES_DEFAULT: [f64; 6] = [0.75, 1.0, 1.25, 1.5, 2.0, 2.5];

/// Producciones específicas fotovoltaicas seleccionables [kWh/kWp.año]
pub const SPECIFIC_YIELD_OPTIONS: [f64; 6] = [700.0, 750.0, 800.0, 850.0, 900.0, 950.0];
/// Densidad de potencia de módulos fotovoltaicos por defecto [kWp/m2]
pub const MODULE_DENSITY_DEFAULT: f64 = 0.20;
