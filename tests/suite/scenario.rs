//! End-to-end ordering scenarios through the normalizer, extractor and mutator.

use insta::assert_snapshot;
use slice_core::{
    Normalizer, OrderPhase, OrderSession, StemmingNormalizer, SummaryOptions, apply, extract,
    render_check,
};
use slice_types::{Action, Check, DrinkCategory, PizzaFlavor, Target};

use crate::common::{brief_check, intent};

fn change(check: &mut Check, line: &str) {
    let tokens = StemmingNormalizer::new().normalize(line);
    let intent = extract(&tokens).expect("line should extract");
    apply(check, &intent);
}

#[test]
fn make_one_soda_regular() {
    let tokens = StemmingNormalizer::new().normalize("make one soda regular");
    let extracted = extract(&tokens).unwrap();
    assert_eq!(
        extracted,
        intent(Action::Update, 1, Target::Drink(DrinkCategory::Regular))
    );

    let mut check = brief_check();
    apply(&mut check, &extracted);
    assert_eq!(check.drink(DrinkCategory::Regular), 1);
    assert_eq!(check.drink(DrinkCategory::Diet), 2);
    assert_eq!(check.pizza(PizzaFlavor::Pepperoni), 2);
}

#[test]
fn synonym_phrasing_gives_same_check() {
    let mut singular = brief_check();
    change(&mut singular, "Make one soda regular");

    let mut synonym = brief_check();
    change(&mut synonym, "Make one of the drinks a regular");

    assert_eq!(singular, synonym);
    assert_snapshot!(
        render_check(&synonym, SummaryOptions::default()),
        @"2 pepperoni pizzas 1 regular sodas 2 diet sodas"
    );
}

#[test]
fn add_and_remove_pizzas_by_phrase() {
    let mut check = brief_check();
    change(&mut check, "add 2 sausage pizzas");
    change(&mut check, "please remove one pepperoni pizza");
    change(&mut check, "remove five sausages");

    assert_eq!(check.pizza(PizzaFlavor::Pepperoni), 1);
    assert_eq!(check.pizza(PizzaFlavor::Sausage), 0);
}

#[test]
fn transfer_beyond_source_grows_total() {
    let mut check = Check::new();
    check.set_drink(DrinkCategory::Diet, 1);
    check.set_drink(DrinkCategory::Regular, 0);
    change(&mut check, "make three sodas regular");

    assert_eq!(check.drink(DrinkCategory::Diet), 0);
    assert_eq!(check.drink(DrinkCategory::Regular), 3);
}

#[test]
fn session_replays_the_brief() {
    let mut session = OrderSession::new();
    session
        .take_initial(OrderPhase::Pizzas, "2 large pepperoni pizzas")
        .unwrap();
    session
        .take_initial(OrderPhase::Drinks, "3 sugar free sodas")
        .unwrap();
    session.change("make one soda regular").unwrap();

    let mut expected = brief_check();
    expected.set_drink(DrinkCategory::Regular, 1);
    expected.set_drink(DrinkCategory::Diet, 2);
    assert_eq!(session.check(), &expected);

    let texts: Vec<&str> = session.log().iter().map(|u| u.text()).collect();
    assert_eq!(
        texts,
        vec![
            "2 large pepperoni pizzas",
            "3 sugar free sodas",
            "make one soda regular"
        ]
    );
}

#[test]
fn composite_line_applies_both_targets() {
    let mut check = Check::new();
    change(&mut check, "add 2 bacon pizzas and diet sodas");
    assert_eq!(check.pizza(PizzaFlavor::Bacon), 2);
    assert_eq!(check.drink(DrinkCategory::Diet), 2);
}
