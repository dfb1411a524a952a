//! The fixed menu: four pizzas and the extra toppings offered for customization.

/// Extra toppings a customer may add when customizing.
pub const EXTRA_TOPPINGS: [&str; 6] = [
    "Mushrooms",
    "Extra Cheese",
    "BBQ Sauce",
    "Pepperoni",
    "Mayonnaise",
    "Onions",
];

/// A pizza on the menu. Every pizza comes with cheese, its signature topping and
/// tomato sauce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub signature: &'static str,
}

impl MenuItem {
    pub fn base_toppings(&self) -> [&'static str; 3] {
        ["Cheese", self.signature, "Tomato Sauce"]
    }
}

pub const CHICKEN_PIZZA: MenuItem = MenuItem {
    name: "Chicken Pizza",
    signature: "Chicken",
};

pub const MARGHERITA_PIZZA: MenuItem = MenuItem {
    name: "Margherita Pizza",
    signature: "Margherita",
};

pub const VEGGIE_PIZZA: MenuItem = MenuItem {
    name: "Veggie Pizza",
    signature: "Vegetable",
};

pub const PEPPERONI_PIZZA: MenuItem = MenuItem {
    name: "Pepperoni Pizza",
    signature: "Pepperoni",
};

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    extras: Vec<&'static str>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}

impl Menu {
    pub fn standard() -> Self {
        Self {
            items: vec![CHICKEN_PIZZA, MARGHERITA_PIZZA, VEGGIE_PIZZA, PEPPERONI_PIZZA],
            extras: EXTRA_TOPPINGS.to_vec(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Case-insensitive lookup by pizza name.
    pub fn find(&self, name: &str) -> Option<MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    pub fn extras(&self) -> &[&'static str] {
        &self.extras
    }

    /// The menu's spelling of an extra topping, matched like [`Menu::find`].
    pub fn find_extra(&self, name: &str) -> Option<&'static str> {
        self.extras
            .iter()
            .copied()
            .find(|extra| extra.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignores_case_and_padding() {
        let menu = Menu::standard();
        assert_eq!(menu.find("  veggie pizza "), Some(VEGGIE_PIZZA));
        assert_eq!(menu.find("Hawaiian Pizza"), None);
    }

    #[test]
    fn test_standard_menu_lists_four_pizzas() {
        let names: Vec<&str> = Menu::standard().items().iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            ["Chicken Pizza", "Margherita Pizza", "Veggie Pizza", "Pepperoni Pizza"]
        );
    }

    #[test]
    fn test_find_extra_returns_menu_spelling() {
        let menu = Menu::standard();
        assert_eq!(menu.find_extra(" extra CHEESE"), Some("Extra Cheese"));
        assert_eq!(menu.find_extra("bbq sauce"), Some("BBQ Sauce"));
        assert_eq!(menu.find_extra("Pineapple"), None);
        assert_eq!(menu.extras().len(), EXTRA_TOPPINGS.len());
    }

    #[test]
    fn test_base_toppings_wrap_signature() {
        assert_eq!(
            PEPPERONI_PIZZA.base_toppings(),
            ["Cheese", "Pepperoni", "Tomato Sauce"]
        );
    }
}
