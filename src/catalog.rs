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
Catálogo de luminarias
======================

Tipos de luminaria con su potencia nominal y el factor de potencia de su sustitución LED,
usados para proponer valores por defecto en la medida de iluminación LED.

El catálogo es cerrado y de solo lectura. Los nombres usados en las búsquedas deben
proceder del propio catálogo.
*/

use serde::Serialize;
use tracing::debug;

use crate::error::{EnokError, Result};

/// Potencia de referencia de la luminaria personalizada sin potencia indicada [W]
pub const CUSTOM_BASELINE_WATTAGE: f64 = 200.0;

/// Tipo de luminaria
///
/// Luminaire archetype
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LuminaireArchetype {
    /// Unique name
    pub name: &'static str,
    /// Nominal power of the existing fixture [W]. None for the custom archetype
    pub nominal_wattage: Option<f64>,
    /// LED power as a fraction of the old power (0, 1]
    pub led_factor: f64,
}

impl LuminaireArchetype {
    /// Luminaria personalizada (sin potencia nominal)
    ///
    /// Custom archetype, wattages supplied by the user
    pub fn is_custom(&self) -> bool {
        self.nominal_wattage.is_none()
    }
}

/// Catálogo de tipos de luminaria
///
/// Luminaire catalog, in display order. The first entry is the custom archetype.
pub static LUMINAIRE_CATALOG: [LuminaireArchetype; 9] = [
    LuminaireArchetype {
        name: "Egendefinert",
        nominal_wattage: None,
        led_factor: 0.5,
    },
    LuminaireArchetype {
        name: "T8 lysrør 2x36 W",
        nominal_wattage: Some(72.0),
        led_factor: 0.5,
    },
    LuminaireArchetype {
        name: "T8 lysrør 2x58 W",
        nominal_wattage: Some(116.0),
        led_factor: 0.5,
    },
    LuminaireArchetype {
        name: "T5 lysrør 2x28 W",
        nominal_wattage: Some(56.0),
        led_factor: 0.6,
    },
    LuminaireArchetype {
        name: "Kompaktlysrør downlight 2x26 W",
        nominal_wattage: Some(52.0),
        led_factor: 0.4,
    },
    LuminaireArchetype {
        name: "Halogenspot 50 W",
        nominal_wattage: Some(50.0),
        led_factor: 0.14,
    },
    LuminaireArchetype {
        name: "Glødepære 60 W",
        nominal_wattage: Some(60.0),
        led_factor: 0.15,
    },
    LuminaireArchetype {
        name: "Metallhalogen høytak 250 W",
        nominal_wattage: Some(250.0),
        led_factor: 0.55,
    },
    LuminaireArchetype {
        name: "Natrium gatelys 150 W",
        nominal_wattage: Some(150.0),
        led_factor: 0.5,
    },
];

/// Localiza un tipo de luminaria por nombre
///
/// Find a luminaire archetype by exact name
///
/// # Errors
///
/// * `ArchetypeNotFound` when the name is not in the catalog
pub fn lookup(name: &str) -> Result<&'static LuminaireArchetype> {
    LUMINAIRE_CATALOG
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| EnokError::ArchetypeNotFound(name.into()))
}

/// Potencia LED propuesta para un tipo de luminaria [W]
///
/// Suggested LED wattage: the old wattage (override or nominal) times the LED factor,
/// rounded to whole watts. The custom archetype uses a 200 W baseline when no override
/// is given.
pub fn suggest_led_wattage(archetype: &LuminaireArchetype, old_wattage: Option<f64>) -> f64 {
    let old = old_wattage
        .or(archetype.nominal_wattage)
        .unwrap_or(CUSTOM_BASELINE_WATTAGE);
    (old * archetype.led_factor).round()
}

// Valor derivado del catálogo o fijado por el usuario
#[derive(Debug, Copy, Clone, PartialEq)]
struct Tracked {
    value: f64,
    overridden: bool,
}

impl Tracked {
    fn derived(value: f64) -> Self {
        Self {
            value,
            overridden: false,
        }
    }

    fn user(value: f64) -> Self {
        Self {
            value,
            overridden: true,
        }
    }

    // Only values not fixed by the user follow the catalog
    fn update(&mut self, value: f64) {
        if !self.overridden {
            self.value = value;
        }
    }
}

/// Selección de luminaria con potencias propuestas
///
/// Luminaire selection for the LED measure.
///
/// Old and new wattages are derived from the selected archetype unless the user fixed them.
/// Selecting another archetype recomputes every field not fixed by the user, and setting the
/// old wattage recomputes the suggested LED wattage when this one was not fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct LuminaireSelection {
    archetype: &'static LuminaireArchetype,
    old_wattage: Tracked,
    new_wattage: Tracked,
}

impl LuminaireSelection {
    /// Nueva selección con los valores del catálogo
    ///
    /// New selection with catalog-derived wattages
    ///
    /// # Errors
    ///
    /// * `ArchetypeNotFound` when the name is not in the catalog
    pub fn new(name: &str) -> Result<Self> {
        let archetype = lookup(name)?;
        let mut selection = Self {
            archetype,
            old_wattage: Tracked::derived(0.0),
            new_wattage: Tracked::derived(0.0),
        };
        selection.recompute();
        Ok(selection)
    }

    /// Tipo de luminaria seleccionado
    pub fn archetype(&self) -> &'static LuminaireArchetype {
        self.archetype
    }

    /// Potencia de la luminaria existente [W]
    pub fn old_wattage(&self) -> f64 {
        self.old_wattage.value
    }

    /// Potencia de la luminaria LED [W]
    pub fn new_wattage(&self) -> f64 {
        self.new_wattage.value
    }

    /// La potencia existente ha sido fijada por el usuario
    pub fn is_old_overridden(&self) -> bool {
        self.old_wattage.overridden
    }

    /// La potencia LED ha sido fijada por el usuario
    pub fn is_new_overridden(&self) -> bool {
        self.new_wattage.overridden
    }

    /// Cambia el tipo de luminaria
    ///
    /// Select another archetype and recompute the fields not fixed by the user
    ///
    /// # Errors
    ///
    /// * `ArchetypeNotFound` when the name is not in the catalog. The selection is unchanged.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let archetype = lookup(name)?;
        if archetype != self.archetype {
            debug!(from = self.archetype.name, to = archetype.name, "Cambio de luminaria");
            self.archetype = archetype;
            self.recompute();
        }
        Ok(())
    }

    /// Fija la potencia de la luminaria existente
    ///
    /// Set the old wattage. The LED wattage follows unless the user fixed it.
    pub fn set_old_wattage(&mut self, wattage: f64) {
        self.old_wattage = Tracked::user(wattage);
        self.recompute();
    }

    /// Fija la potencia de la luminaria LED
    pub fn set_new_wattage(&mut self, wattage: f64) {
        self.new_wattage = Tracked::user(wattage);
    }

    /// Descarta los valores fijados por el usuario
    ///
    /// Drop user overrides and go back to catalog values
    pub fn reset_overrides(&mut self) {
        self.old_wattage.overridden = false;
        self.new_wattage.overridden = false;
        self.recompute();
    }

    fn recompute(&mut self) {
        let archetype = self.archetype;
        self.old_wattage.update(
            archetype
                .nominal_wattage
                .unwrap_or(CUSTOM_BASELINE_WATTAGE),
        );
        let suggested = suggest_led_wattage(archetype, Some(self.old_wattage.value));
        self.new_wattage.update(suggested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_names_unique() {
        for (i, a) in LUMINAIRE_CATALOG.iter().enumerate() {
            assert!(a.led_factor > 0.0 && a.led_factor <= 1.0);
            assert!(LUMINAIRE_CATALOG[i + 1..].iter().all(|b| b.name != a.name));
        }
        assert!(LUMINAIRE_CATALOG[0].is_custom());
    }

    #[test]
    fn catalog_lookup() {
        let a = lookup("T5 lysrør 2x28 W").unwrap();
        assert_eq!(a.nominal_wattage, Some(56.0));
        assert!(matches!(
            lookup("t5 lysrør 2x28 w"),
            Err(EnokError::ArchetypeNotFound(_))
        ));
    }

    #[test]
    fn catalog_suggest_led_wattage() {
        let t8 = lookup("T8 lysrør 2x36 W").unwrap();
        assert_eq!(suggest_led_wattage(t8, None), 36.0);
        assert_eq!(suggest_led_wattage(t8, Some(81.0)), 41.0);
        let halogen = lookup("Halogenspot 50 W").unwrap();
        assert_eq!(suggest_led_wattage(halogen, None), 7.0);
        let custom = lookup("Egendefinert").unwrap();
        assert_eq!(suggest_led_wattage(custom, None), 100.0);
        assert_eq!(suggest_led_wattage(custom, Some(40.0)), 20.0);
    }

    #[test]
    fn selection_follows_catalog() {
        let mut sel = LuminaireSelection::new("T8 lysrør 2x36 W").unwrap();
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (72.0, 36.0));
        sel.select("T8 lysrør 2x58 W").unwrap();
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (116.0, 58.0));
        assert!(sel.select("Gasslampe").is_err());
        assert_eq!(sel.archetype().name, "T8 lysrør 2x58 W");
    }

    #[test]
    fn selection_keeps_user_values() {
        let mut sel = LuminaireSelection::new("T8 lysrør 2x36 W").unwrap();
        sel.set_old_wattage(80.0);
        assert!(sel.is_old_overridden());
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (80.0, 40.0));

        // Otro tipo: la potencia antigua fijada se mantiene, la LED se recalcula
        sel.select("T5 lysrør 2x28 W").unwrap();
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (80.0, 48.0));

        sel.set_new_wattage(30.0);
        sel.select("Glødepære 60 W").unwrap();
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (80.0, 30.0));

        sel.reset_overrides();
        assert!(!sel.is_old_overridden() && !sel.is_new_overridden());
        assert_eq!((sel.old_wattage(), sel.new_wattage()), (60.0, 9.0));
    }
}
