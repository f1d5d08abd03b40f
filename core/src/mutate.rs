//! Applying intents to the check.
//!
//! | action | pizza target         | drink target               |
//! |--------|----------------------|----------------------------|
//! | add    | flavor += qty        | category += qty            |
//! | delete | flavor -= qty, min 0 | category -= qty, min 0     |
//! | update | no-op                | move qty from counterpart  |

use slice_types::{Action, Check, DrinkCategory, Intent, PizzaFlavor};

/// Apply `intent` to `check` in place.
///
/// Total: absent entries read as zero, subtraction floors at zero and addition
/// saturates. A dual-target intent applies both sides independently.
pub fn apply(check: &mut Check, intent: &Intent) {
    let qty = intent.quantity().get();
    let target = intent.target();

    if let Some(category) = target.drink() {
        match intent.action() {
            Action::Add => add_drink(check, category, qty),
            Action::Delete => remove_drink(check, category, qty),
            Action::Update => transfer_drink(check, category, qty),
        }
    }

    if let Some(flavor) = target.pizza() {
        match intent.action() {
            Action::Add => add_pizza(check, flavor, qty),
            Action::Delete => remove_pizza(check, flavor, qty),
            Action::Update => {
                tracing::debug!(%flavor, "Pizza update has no transfer rule; ignoring");
            }
        }
    }

    tracing::debug!(%intent, ?check, "Applied intent");
}

fn add_pizza(check: &mut Check, flavor: PizzaFlavor, qty: u32) {
    let updated = check.pizza(flavor).saturating_add(qty);
    check.set_pizza(flavor, updated);
}

fn remove_pizza(check: &mut Check, flavor: PizzaFlavor, qty: u32) {
    let updated = check.pizza(flavor).saturating_sub(qty);
    check.set_pizza(flavor, updated);
}

fn add_drink(check: &mut Check, category: DrinkCategory, qty: u32) {
    let updated = check.drink(category).saturating_add(qty);
    check.set_drink(category, updated);
}

fn remove_drink(check: &mut Check, category: DrinkCategory, qty: u32) {
    let updated = check.drink(category).saturating_sub(qty);
    check.set_drink(category, updated);
}

/// Move `qty` units from the counterpart category into `into`.
///
/// Each side is clamped on its own: when the source holds fewer than `qty`
/// units the destination still gains the full `qty`, so the combined total
/// can grow.
fn transfer_drink(check: &mut Check, into: DrinkCategory, qty: u32) {
    let from = into.counterpart();
    let source = check.drink(from).saturating_sub(qty);
    let destination = check.drink(into).saturating_add(qty);
    check.set_drink(from, source);
    check.set_drink(into, destination);
}
