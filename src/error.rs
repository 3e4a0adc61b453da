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
Errores
=======

Tipos de error de la biblioteca.

Los datos fuera de rango no son errores: las fórmulas los recortan a su dominio.
Solamente fallan la interpretación de datos de entrada y la búsqueda en catálogos cerrados.
*/

use std::fmt;

/// Errores de enokcalc
///
/// enokcalc errors
#[derive(Debug)]
pub enum EnokError {
    /// Luminaire archetype not present in the catalog
    ArchetypeNotFound(String),
    /// Measure key not recognised
    MeasureUnknown(String),
    /// Input data could not be interpreted
    ParseError(String),
    /// Input data is not acceptable
    WrongInput(String),
}

impl fmt::Display for EnokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnokError::*;
        match self {
            ArchetypeNotFound(name) => {
                write!(f, "Armaturtype ikke funnet i katalogen: \"{}\"", name)
            }
            MeasureUnknown(key) => write!(f, "Ukjent tiltak: \"{}\"", key),
            ParseError(desc) => write!(f, "Kunne ikke tolke inndata: {}", desc),
            WrongInput(desc) => write!(f, "Ugyldige inndata: {}", desc),
        }
    }
}

impl std::error::Error for EnokError {}

impl From<std::num::ParseFloatError> for EnokError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EnokError::ParseError(format!("feil tallformat ({})", err))
    }
}

impl From<std::num::ParseIntError> for EnokError {
    fn from(err: std::num::ParseIntError) -> Self {
        EnokError::ParseError(format!("feil heltallsformat ({})", err))
    }
}

impl From<serde_json::Error> for EnokError {
    fn from(err: serde_json::Error) -> Self {
        EnokError::ParseError(err.to_string())
    }
}

/// Resultado con el error de la biblioteca
///
/// Result type alias with the crate error
pub type Result<T> = std::result::Result<T, EnokError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EnokError::ArchetypeNotFound("T12".into());
        assert_eq!(
            err.to_string(),
            "Armaturtype ikke funnet i katalogen: \"T12\""
        );
        let err: EnokError = "x1.5".parse::<f64>().unwrap_err().into();
        assert!(matches!(err, EnokError::ParseError(_)));
    }
}
