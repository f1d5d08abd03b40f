//! The closed menu: pizza flavors and drink categories.

use std::fmt;

/// Pizza flavors on the menu.
///
/// Ordering follows the menu listing, which is also the order the check renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PizzaFlavor {
    Pepperoni,
    Mushrooms,
    Onions,
    Sausage,
    Bacon,
    ExtraCheese,
    GreenPeppers,
}

impl PizzaFlavor {
    pub const ALL: [PizzaFlavor; 7] = [
        PizzaFlavor::Pepperoni,
        PizzaFlavor::Mushrooms,
        PizzaFlavor::Onions,
        PizzaFlavor::Sausage,
        PizzaFlavor::Bacon,
        PizzaFlavor::ExtraCheese,
        PizzaFlavor::GreenPeppers,
    ];

    /// Canonical key, matching the hyphenated token the normalizer produces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PizzaFlavor::Pepperoni => "pepperoni",
            PizzaFlavor::Mushrooms => "mushrooms",
            PizzaFlavor::Onions => "onions",
            PizzaFlavor::Sausage => "sausage",
            PizzaFlavor::Bacon => "bacon",
            PizzaFlavor::ExtraCheese => "extra-cheese",
            PizzaFlavor::GreenPeppers => "green-peppers",
        }
    }

    /// Name shown to customers on menus and checks.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PizzaFlavor::GreenPeppers => "green peppers",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for PizzaFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Soda categories. Every drink on the check is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrinkCategory {
    Regular,
    Diet,
}

impl DrinkCategory {
    pub const ALL: [DrinkCategory; 2] = [DrinkCategory::Regular, DrinkCategory::Diet];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DrinkCategory::Regular => "regular",
            DrinkCategory::Diet => "diet",
        }
    }

    /// The category units are taken from when transferring into `self`.
    #[must_use]
    pub const fn counterpart(self) -> DrinkCategory {
        match self {
            DrinkCategory::Regular => DrinkCategory::Diet,
            DrinkCategory::Diet => DrinkCategory::Regular,
        }
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
