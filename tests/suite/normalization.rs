//! Normalizer output feeding the extractor.

use slice_core::{Normalizer, StemmingNormalizer, extract};
use slice_types::{Action, DrinkCategory, ExtractError, PizzaFlavor, Target};

fn extract_line(line: &str) -> Result<slice_types::Intent, ExtractError> {
    let tokens = StemmingNormalizer::new().normalize(line);
    extract(&tokens)
}

#[test]
fn every_flavor_survives_normalization() {
    let phrases = [
        ("2 pepperoni pizzas", PizzaFlavor::Pepperoni),
        ("2 mushroom pizzas", PizzaFlavor::Mushrooms),
        ("2 mushrooms pizzas", PizzaFlavor::Mushrooms),
        ("2 onion pizzas", PizzaFlavor::Onions),
        ("2 sausage pizzas", PizzaFlavor::Sausage),
        ("2 bacon pizzas", PizzaFlavor::Bacon),
        ("2 extra-cheese pizzas", PizzaFlavor::ExtraCheese),
        ("2 extra cheese pizzas", PizzaFlavor::ExtraCheese),
        ("2 green peppers pizzas", PizzaFlavor::GreenPeppers),
        ("2 green-peppers pizzas", PizzaFlavor::GreenPeppers),
    ];
    for (line, flavor) in phrases {
        let intent = extract_line(line).unwrap_or_else(|err| panic!("{line}: {err}"));
        assert_eq!(intent.target(), Target::Pizza(flavor), "{line}");
        assert_eq!(intent.quantity().get(), 2, "{line}");
    }
}

#[test]
fn drink_categories_and_aliases() {
    let phrases = [
        ("3 regular sodas", DrinkCategory::Regular),
        ("3 diet sodas", DrinkCategory::Diet),
        ("3 sugar free sodas", DrinkCategory::Diet),
        ("3 sugar-free drinks", DrinkCategory::Diet),
    ];
    for (line, category) in phrases {
        let intent = extract_line(line).unwrap_or_else(|err| panic!("{line}: {err}"));
        assert_eq!(intent.target(), Target::Drink(category), "{line}");
    }
}

#[test]
fn spelled_out_quantities() {
    assert_eq!(
        extract_line("add twelve bacon pizzas").map(|i| i.quantity().get()),
        Ok(12)
    );
    assert_eq!(
        extract_line("Add Seventeen diet sodas").map(|i| i.quantity().get()),
        Ok(17)
    );
}

#[test]
fn verbs_after_stemming() {
    assert_eq!(
        extract_line("Remove 1 bacon pizza").map(|i| i.action()),
        Ok(Action::Delete)
    );
    assert_eq!(
        extract_line("delete 1 bacon pizza").map(|i| i.action()),
        Ok(Action::Delete)
    );
    assert_eq!(
        extract_line("Make 1 soda diet").map(|i| i.action()),
        Ok(Action::Update)
    );
    assert_eq!(
        extract_line("I'd like 1 bacon pizza").map(|i| i.action()),
        Ok(Action::Add)
    );
}

#[test]
fn failures_surface_from_lines() {
    assert_eq!(
        extract_line("make the soda regular"),
        Err(ExtractError::MissingQuantity)
    );
    assert_eq!(
        extract_line("add 2 calzones"),
        Err(ExtractError::UnknownItem)
    );
}
