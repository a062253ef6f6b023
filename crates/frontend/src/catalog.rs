//! Menu catalog

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Espresso,
    Brewed,
    Tea,
    Bakery,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Espresso, Self::Brewed, Self::Tea, Self::Bakery];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Espresso => "Espresso bar",
            Self::Brewed => "Brewed coffee",
            Self::Tea => "Tea",
            Self::Bakery => "Bakery",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    pub category: Category,
    pub featured: bool,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        name: "Espresso",
        description: "A double shot of our house blend, chocolate and stone fruit.",
        price_cents: 300,
        category: Category::Espresso,
        featured: false,
    },
    MenuItem {
        name: "Flat White",
        description: "Ristretto with silky steamed milk.",
        price_cents: 450,
        category: Category::Espresso,
        featured: true,
    },
    MenuItem {
        name: "Oat Cortado",
        description: "Equal parts espresso and steamed oat milk.",
        price_cents: 425,
        category: Category::Espresso,
        featured: false,
    },
    MenuItem {
        name: "Pour Over",
        description: "Single origin, brewed to order. Ask about this week's beans.",
        price_cents: 500,
        category: Category::Brewed,
        featured: true,
    },
    MenuItem {
        name: "Cold Brew",
        description: "Steeped for eighteen hours, served over ice.",
        price_cents: 475,
        category: Category::Brewed,
        featured: true,
    },
    MenuItem {
        name: "Sencha",
        description: "Grassy Japanese green tea.",
        price_cents: 375,
        category: Category::Tea,
        featured: false,
    },
    MenuItem {
        name: "Chai Latte",
        description: "House-spiced black tea with steamed milk.",
        price_cents: 475,
        category: Category::Tea,
        featured: false,
    },
    MenuItem {
        name: "Butter Croissant",
        description: "Baked every morning.",
        price_cents: 350,
        category: Category::Bakery,
        featured: false,
    },
    MenuItem {
        name: "Cardamom Bun",
        description: "Swedish-style knot with pearl sugar.",
        price_cents: 400,
        category: Category::Bakery,
        featured: false,
    },
];

pub fn in_category(category: Category) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.category == category)
}

pub fn featured() -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(|item| item.featured)
}

pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_format_with_two_decimals() {
        assert_eq!(format_price(300), "$3.00");
        assert_eq!(format_price(425), "$4.25");
        assert_eq!(format_price(5), "$0.05");
    }

    #[test]
    fn every_category_has_items() {
        for category in Category::ALL {
            assert!(in_category(category).next().is_some(), "{category:?} is empty");
        }
        assert_eq!(featured().count(), 3);
    }
}
