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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use itertools::Itertools;
use tracing::{info, Level};

use enokcalc::enok::AsPlain;
use enokcalc::*;

const LICENSE: &str = "
Copyright (c) 2024 The EnokCalc Developers

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): The EnokCalc Developers";

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Filen {} ble ikke funnet", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Feil ved lesing av filen")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file =
        File::create(path).context(format!("Kunne ikke opprette filen {}", path.display()))?;
    file.write_all(content)
        .context(format!("Kunne ikke skrive til filen {}", path.display()))?;
    Ok(())
}

/// Muestra el error y sus causas y termina con el código indicado
fn fail_with(err: &Error, msg: &str, code: i32, verbosity: u64) -> ! {
    eprintln!("FEIL: {}: {}", msg, err);
    if verbosity > 2 {
        for cause in err.iter_chain().skip(1) {
            eprintln!("  {}", cause);
        }
    }
    exit(code);
}

/// Nivel de registro según el número de apariciones de -v
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

// Funciones auxiliares de validación y obtención de valores

/// Valor numérico no negativo de la CLI
fn value_from_args(matches: &clap::ArgMatches<'_>, name: &str, descr: &str) -> Option<f64> {
    if matches.occurrences_of(name) == 0 {
        return None;
    }
    let value = value_t!(matches, name, f64).unwrap_or_else(|_| {
        eprintln!("FEIL: {} er ikke en gyldig tallverdi", descr);
        exit(exitcode::DATAERR);
    });
    if value < 0.0 || !value.is_finite() {
        eprintln!("FEIL: {} kan ikke være negativ og er {:.2}", descr, value);
        exit(exitcode::DATAERR);
    }
    Some(value)
}

/// Obtiene un valor priorizando CLI -> plan de medidas -> valor por defecto
fn select_value(user: Option<f64>, plan: Option<f64>, default: f64) -> (f64, &'static str) {
    user.map(|v| (v, "bruker"))
        .or_else(|| plan.map(|v| (v, "tiltaksplan")))
        .unwrap_or((default, "standard"))
}

/// Precios del análisis de sensibilidad: CLI -> plan de medidas -> valores por defecto
fn get_sensitivity_prices(matches: &clap::ArgMatches<'_>, plan: &MeasurePlan) -> Vec<f64> {
    let (prices, orig) = match matches.values_of("sensitivitet") {
        Some(values) => {
            let prices: Vec<f64> = values
                .map(|v| {
                    let price = v.trim().parse::<f64>().unwrap_or_else(|_| {
                        eprintln!("FEIL: Prisen \"{}\" er ikke en gyldig tallverdi", v);
                        exit(exitcode::DATAERR);
                    });
                    if price < 0.0 || !price.is_finite() {
                        eprintln!("FEIL: Prisen kan ikke være negativ og er {:.2}", price);
                        exit(exitcode::DATAERR);
                    }
                    price
                })
                .collect();
            (prices, "bruker")
        }
        None => match &plan.sensitivity_prices {
            Some(prices) => (prices.clone(), "tiltaksplan"),
            None => (plan.sensitivity_prices(), "standard"),
        },
    };
    let prices = normalize_prices(&prices);
    println!(
        "Priser for følsomhetsanalyse ({}) [kr/kWh]: {}",
        orig,
        prices.iter().map(|p| format!("{:.2}", p)).join(", ")
    );
    prices
}

/// Carga el plan de medidas desde archivo
fn get_plan(archivo: &str, verbosity: u64) -> MeasurePlan {
    let path = Path::new(archivo);
    let planstring = readfile(path).unwrap_or_else(|err| {
        fail_with(
            &err,
            &format!("Kunne ikke lese tiltaksplanen \"{}\"", path.display()),
            exitcode::IOERR,
            verbosity,
        )
    });
    println!("Tiltaksplan: \"{}\"", path.display());
    planstring.parse::<MeasurePlan>().unwrap_or_else(|err| {
        eprintln!(
            "FEIL: Feil format i tiltaksplanen \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    })
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("EnokCalc")
        .bin_name("enokcalc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2024 The EnokCalc Developers

Licencia: Publicado bajo licencia MIT.

")
        .about("EnokCalc - Grove estimat av energisparing og lønnsomhet for ENØK-tiltak i bygg.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("tiltak")
            .short("t")
            .long("tiltak")
            .value_name("TILTAKSPLAN")
            .required_unless_one(&["armaturer", "showlicense"])
            .help("Tiltaksplan i JSON-format")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("pris")
            .short("p")
            .long("pris")
            .value_name("PRIS")
            .help("Energipris [kr/kWh]")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("utslipp")
            .short("e")
            .long("utslipp")
            .value_name("UTSLIPP")
            .help("Utslippsfaktor [g CO2/kWh]")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("sensitivitet")
            .short("s")
            .long("sensitivitet")
            .value_name("PRISER")
            .help("Energipriser for følsomhetsanalyse [kr/kWh].\nF.eks.: -s 0.5 1.0 2.0")
            .takes_value(true)
            .multiple(true)
            .min_values(1)
            .display_order(4))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Resultatfil i JSON-format")
            .takes_value(true))
        .arg(Arg::with_name("armaturer")
            .short("A")
            .long("armaturer")
            .help("Viser armaturkatalogen for LED-tiltaket"))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("lisens")
            .help("Viser programmets lisens (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!("{}", LICENSE);
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_logging(verbosity);
    info!(version = VERSION, "EnokCalc");

    if matches.is_present("armaturer") {
        println!("** Armaturkatalog");
        println!("{}", enok::catalog_to_plain());
        exit(exitcode::OK);
    }

    println!("** Inndata");

    // Plan de medidas ----------------------------------------------------------------------------
    let plan = match matches.value_of("tiltak") {
        Some(archivo) => get_plan(archivo, verbosity),
        None => {
            eprintln!("FEIL: Ingen tiltaksplan er angitt");
            exit(exitcode::USAGE);
        }
    };

    // Hipótesis económicas -----------------------------------------------------------------------
    // Argumentos de CLI > Plan de medidas > Valor por defecto
    let (price, orig) = select_value(
        value_from_args(&matches, "pris", "Energiprisen"),
        plan.price_per_kwh,
        enok::PRICE_DEFAULT,
    );
    println!("Energipris ({}) [kr/kWh]: {:.2}", orig, price);

    let (emission, orig) = select_value(
        value_from_args(&matches, "utslipp", "Utslippsfaktoren"),
        plan.emission_g_per_kwh,
        enok::EMISSION_DEFAULT,
    );
    println!("Utslippsfaktor ({}) [g CO2/kWh]: {:.1}", orig, emission);

    let assumptions = types::EconomicAssumptions::new(price, emission);
    info!(%assumptions, "Økonomiske forutsetninger");
    let prices = get_sensitivity_prices(&matches, &plan);

    // Cálculo de la cartera ----------------------------------------------------------------------
    let mut portfolio = Portfolio::new();
    plan.apply(&mut portfolio).unwrap_or_else(|err| {
        eprintln!("FEIL: Kunne ikke beregne tiltakene i planen ({})", err);
        exit(exitcode::DATAERR);
    });
    info!(n = portfolio.len(), "Tiltak beregnet");

    let report = enok::PortfolioReport::new(&portfolio, &assumptions, &prices);

    // Salida de resultados ------------------------------------------------------------------------
    if let Some(archivo) = matches.value_of_os("archivo_salida_json") {
        let path = Path::new(archivo);
        if verbosity > 0 {
            println!("Resultater i JSON-format: {}", path.display());
        }
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|err| {
            eprintln!("FEIL: Kunne ikke konvertere resultatene til JSON ({})", err);
            exit(exitcode::DATAERR);
        });
        writefile(path, json.as_bytes()).unwrap_or_else(|err| {
            fail_with(&err, "Kunne ikke lagre resultatene", exitcode::IOERR, verbosity)
        });
    }

    // Mostrar siempre en formato simple
    println!("{}", report.to_plain());
}
