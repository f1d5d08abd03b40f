//! Fixed classification tables.
//!
//! Tokens reaching these tables have already been lower-cased and stemmed, so
//! each entry lists the dictionary forms alongside what the stemmer makes of
//! them ("sausages" arrives as "sausag", "remove" as "remov").

use slice_types::{Action, DrinkCategory, PizzaFlavor};

const VERBS: &[(&str, Action)] = &[
    ("make", Action::Update),
    ("add", Action::Add),
    ("remove", Action::Delete),
    ("remov", Action::Delete),
    ("delete", Action::Delete),
    ("delet", Action::Delete),
];

const PIZZA_FLAVORS: &[(&str, PizzaFlavor)] = &[
    ("pepperoni", PizzaFlavor::Pepperoni),
    ("pepperonis", PizzaFlavor::Pepperoni),
    ("mushroom", PizzaFlavor::Mushrooms),
    ("mushrooms", PizzaFlavor::Mushrooms),
    ("onion", PizzaFlavor::Onions),
    ("onions", PizzaFlavor::Onions),
    ("sausag", PizzaFlavor::Sausage),
    ("sausage", PizzaFlavor::Sausage),
    ("sausages", PizzaFlavor::Sausage),
    ("bacon", PizzaFlavor::Bacon),
    ("extra-chees", PizzaFlavor::ExtraCheese),
    ("extra-cheese", PizzaFlavor::ExtraCheese),
    ("green-pepp", PizzaFlavor::GreenPeppers),
    ("green-pepper", PizzaFlavor::GreenPeppers),
    ("green-peppers", PizzaFlavor::GreenPeppers),
];

const DRINK_CATEGORIES: &[(&str, DrinkCategory)] = &[
    ("regular", DrinkCategory::Regular),
    ("diet", DrinkCategory::Diet),
    ("sugar-fre", DrinkCategory::Diet),
    ("sugar-free", DrinkCategory::Diet),
];

const DRINK_SYNONYMS: &[&str] = &["drink", "drinks", "soda", "sodas"];

/// What a drink-related token tells us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkWord {
    /// Names a concrete category ("regular", "sugar-free").
    Category(DrinkCategory),
    /// Mentions drinks without saying which ("soda", "drinks").
    Synonym,
}

#[must_use]
pub fn verb(token: &str) -> Option<Action> {
    lookup(VERBS, token)
}

#[must_use]
pub fn pizza_flavor(token: &str) -> Option<PizzaFlavor> {
    lookup(PIZZA_FLAVORS, token)
}

#[must_use]
pub fn drink_word(token: &str) -> Option<DrinkWord> {
    if let Some(category) = lookup(DRINK_CATEGORIES, token) {
        return Some(DrinkWord::Category(category));
    }
    DRINK_SYNONYMS
        .contains(&token)
        .then_some(DrinkWord::Synonym)
}

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, value)| *value)
}
