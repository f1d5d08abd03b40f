//! Check rendering for the presentation layer.

use slice_types::{Check, DrinkCategory, PizzaFlavor};

/// Options controlling how a check is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Render entries whose quantity dropped to zero.
    pub show_empty: bool,
}

/// Render the check as `"<qty> <item> pizzas"` / `"<qty> <category> sodas"`
/// clauses joined by spaces, pizzas first.
#[must_use]
pub fn render_check(check: &Check, options: SummaryOptions) -> String {
    let pizzas = check
        .pizzas()
        .filter(|(_, qty)| options.show_empty || *qty > 0)
        .map(|(flavor, qty)| format!("{qty} {} pizzas", flavor.display_name()));
    let drinks = check
        .drinks()
        .filter(|(_, qty)| options.show_empty || *qty > 0)
        .map(|(category, qty)| format!("{qty} {} sodas", category.as_str()));

    pizzas.chain(drinks).collect::<Vec<_>>().join(" ")
}

/// Comma-separated flavor list for the ordering prompt.
#[must_use]
pub fn flavor_menu() -> String {
    PizzaFlavor::ALL
        .iter()
        .map(|flavor| flavor.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn drink_menu() -> String {
    DrinkCategory::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
