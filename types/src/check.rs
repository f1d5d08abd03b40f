//! The order ledger.

use std::collections::BTreeMap;

use crate::menu::{DrinkCategory, PizzaFlavor};

/// Running order for one customer session.
///
/// Quantities are unsigned, so the ledger can never hold a negative count.
/// Lookups of items that were never written read as zero. Entries written with
/// zero are kept; whether to show them is a presentation concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Check {
    pizzas: BTreeMap<PizzaFlavor, u32>,
    drinks: BTreeMap<DrinkCategory, u32>,
}

impl Check {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pizza(&self, flavor: PizzaFlavor) -> u32 {
        self.pizzas.get(&flavor).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn drink(&self, category: DrinkCategory) -> u32 {
        self.drinks.get(&category).copied().unwrap_or(0)
    }

    pub fn set_pizza(&mut self, flavor: PizzaFlavor, quantity: u32) {
        self.pizzas.insert(flavor, quantity);
    }

    pub fn set_drink(&mut self, category: DrinkCategory, quantity: u32) {
        self.drinks.insert(category, quantity);
    }

    /// Pizza entries in menu order, including zero-quantity ones.
    pub fn pizzas(&self) -> impl Iterator<Item = (PizzaFlavor, u32)> + '_ {
        self.pizzas.iter().map(|(flavor, qty)| (*flavor, *qty))
    }

    /// Drink entries in category order, including zero-quantity ones.
    pub fn drinks(&self) -> impl Iterator<Item = (DrinkCategory, u32)> + '_ {
        self.drinks.iter().map(|(category, qty)| (*category, *qty))
    }

    #[must_use]
    pub fn contains_drink(&self, category: DrinkCategory) -> bool {
        self.drinks.contains_key(&category)
    }

    /// True when no entry holds a positive quantity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pizzas.values().chain(self.drinks.values()).all(|qty| *qty == 0)
    }
}
