//! Shared test utilities and fixtures

#![allow(dead_code)]

use slice_types::{Action, Check, DrinkCategory, Intent, PizzaFlavor, Quantity, Target};

/// The starting check from the ordering brief:
/// 2 large pepperoni pizzas, 3 sugar free sodas (diet), no regular sodas.
pub fn brief_check() -> Check {
    let mut check = Check::new();
    check.set_pizza(PizzaFlavor::Pepperoni, 2);
    check.set_drink(DrinkCategory::Regular, 0);
    check.set_drink(DrinkCategory::Diet, 3);
    check
}

pub fn intent(action: Action, qty: u32, target: Target) -> Intent {
    Intent::new(
        action,
        Quantity::new(qty).expect("test quantities are positive"),
        target,
    )
}

/// Every quantity on the check, pizzas then drinks.
pub fn all_quantities(check: &Check) -> Vec<u32> {
    check
        .pizzas()
        .map(|(_, qty)| qty)
        .chain(check.drinks().map(|(_, qty)| qty))
        .collect()
}

/// Small deterministic generator so property-style tests stay reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) as u32
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
