//! Invariants that hold across arbitrary sequences of mutations.

use std::collections::BTreeMap;

use slice_core::{apply, extract};
use slice_types::{Action, Check, DrinkCategory, ExtractError, PizzaFlavor, Target};

use crate::common::{Lcg, all_quantities, intent};

/// Signed reference ledger following the clamp-at-zero formulas literally.
#[derive(Default)]
struct Model {
    pizzas: BTreeMap<PizzaFlavor, i64>,
    drinks: BTreeMap<DrinkCategory, i64>,
}

impl Model {
    fn apply(&mut self, action: Action, qty: i64, target: Target) {
        if let Some(category) = target.drink() {
            let current = self.drinks.get(&category).copied().unwrap_or(0);
            match action {
                Action::Add => {
                    self.drinks.insert(category, (current + qty).max(0));
                }
                Action::Delete => {
                    self.drinks.insert(category, (current - qty).max(0));
                }
                Action::Update => {
                    let from = category.counterpart();
                    let source = self.drinks.get(&from).copied().unwrap_or(0);
                    self.drinks.insert(from, (source - qty).max(0));
                    self.drinks.insert(category, (current + qty).max(0));
                }
            }
        }
        if let Some(flavor) = target.pizza() {
            let current = self.pizzas.get(&flavor).copied().unwrap_or(0);
            match action {
                Action::Add => {
                    self.pizzas.insert(flavor, (current + qty).max(0));
                }
                Action::Delete => {
                    self.pizzas.insert(flavor, (current - qty).max(0));
                }
                Action::Update => {}
            }
        }
    }

    fn matches(&self, check: &Check) -> bool {
        PizzaFlavor::ALL
            .iter()
            .all(|f| i64::from(check.pizza(*f)) == self.pizzas.get(f).copied().unwrap_or(0))
            && DrinkCategory::ALL
                .iter()
                .all(|c| i64::from(check.drink(*c)) == self.drinks.get(c).copied().unwrap_or(0))
    }
}

fn random_target(rng: &mut Lcg) -> Target {
    let pizza = PizzaFlavor::ALL[rng.below(PizzaFlavor::ALL.len() as u32) as usize];
    let drink = DrinkCategory::ALL[rng.below(DrinkCategory::ALL.len() as u32) as usize];
    match rng.below(3) {
        0 => Target::Pizza(pizza),
        1 => Target::Drink(drink),
        _ => Target::Both { pizza, drink },
    }
}

#[test]
fn mutations_follow_clamped_model() {
    for seed in 0..20 {
        let mut rng = Lcg::new(seed);
        let mut check = Check::new();
        let mut model = Model::default();

        for _ in 0..200 {
            let action = match rng.below(3) {
                0 => Action::Add,
                1 => Action::Delete,
                _ => Action::Update,
            };
            let qty = rng.below(6) + 1;
            let target = random_target(&mut rng);

            apply(&mut check, &intent(action, qty, target));
            model.apply(action, i64::from(qty), target);

            assert!(
                model.matches(&check),
                "seed {seed}: check diverged after {action} {qty} {target:?}: {check:?}"
            );
        }
    }
}

#[test]
fn delete_never_increases_a_quantity() {
    let mut rng = Lcg::new(7);
    let mut check = Check::new();
    for flavor in PizzaFlavor::ALL {
        check.set_pizza(flavor, rng.below(10));
    }
    for _ in 0..100 {
        let flavor = PizzaFlavor::ALL[rng.below(7) as usize];
        let before = check.pizza(flavor);
        apply(
            &mut check,
            &intent(Action::Delete, rng.below(4) + 1, Target::Pizza(flavor)),
        );
        assert!(check.pizza(flavor) <= before);
    }
    assert!(all_quantities(&check).iter().all(|qty| *qty < 10));
}

#[test]
fn missing_quantity_is_idempotent() {
    let vocabulary = [
        "make", "add", "remov", "pepperoni", "sausag", "regular", "diet", "soda", "pizza",
        "larg", "pleas",
    ];
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let len = rng.below(6) as usize;
        let tokens: Vec<&str> = (0..len)
            .map(|_| vocabulary[rng.below(vocabulary.len() as u32) as usize])
            .collect();
        assert_eq!(
            extract(&tokens),
            Err(ExtractError::MissingQuantity),
            "{tokens:?}"
        );
    }
}
