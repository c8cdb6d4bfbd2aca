//! Static food catalog.
//!
//! The searchable list of foods the UI pages present when the user adds a
//! food or assembles a meal plan. Per-serving nutrition values; nothing
//! here is persisted, and a saved log entry or plan keeps whatever values
//! it copied out of the catalog at the time.

use std::fmt;

/// Closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    Grains,
    Protein,
    Dairy,
    Snacks,
    Beverages,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 7] = [
        FoodCategory::Fruits,
        FoodCategory::Vegetables,
        FoodCategory::Grains,
        FoodCategory::Protein,
        FoodCategory::Dairy,
        FoodCategory::Snacks,
        FoodCategory::Beverages,
    ];
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodCategory::Fruits => write!(f, "Fruits"),
            FoodCategory::Vegetables => write!(f, "Vegetables"),
            FoodCategory::Grains => write!(f, "Grains"),
            FoodCategory::Protein => write!(f, "Protein"),
            FoodCategory::Dairy => write!(f, "Dairy"),
            FoodCategory::Snacks => write!(f, "Snacks"),
            FoodCategory::Beverages => write!(f, "Beverages"),
        }
    }
}

/// One catalog entry. Nutrition is per single serving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogFood {
    pub id: &'static str,
    pub name: &'static str,
    pub serving: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub category: FoodCategory,
}

#[rustfmt::skip]
static FOODS: &[CatalogFood] = &[
    CatalogFood { id: "apple",           name: "Apple",                serving: "1 medium",   calories: 95.0,  protein: 0.5,  carbs: 25.0, fat: 0.3,  category: FoodCategory::Fruits },
    CatalogFood { id: "banana",          name: "Banana",               serving: "1 medium",   calories: 105.0, protein: 1.3,  carbs: 27.0, fat: 0.4,  category: FoodCategory::Fruits },
    CatalogFood { id: "orange",          name: "Orange",               serving: "1 medium",   calories: 62.0,  protein: 1.2,  carbs: 15.4, fat: 0.2,  category: FoodCategory::Fruits },
    CatalogFood { id: "strawberries",    name: "Strawberries",         serving: "1 cup",      calories: 49.0,  protein: 1.0,  carbs: 11.7, fat: 0.5,  category: FoodCategory::Fruits },
    CatalogFood { id: "blueberries",     name: "Blueberries",          serving: "1 cup",      calories: 84.0,  protein: 1.1,  carbs: 21.4, fat: 0.5,  category: FoodCategory::Fruits },
    CatalogFood { id: "broccoli",        name: "Broccoli",             serving: "1 cup",      calories: 55.0,  protein: 3.7,  carbs: 11.2, fat: 0.6,  category: FoodCategory::Vegetables },
    CatalogFood { id: "spinach",         name: "Spinach",              serving: "1 cup raw",  calories: 7.0,   protein: 0.9,  carbs: 1.1,  fat: 0.1,  category: FoodCategory::Vegetables },
    CatalogFood { id: "carrot",          name: "Carrot",               serving: "1 medium",   calories: 25.0,  protein: 0.6,  carbs: 6.0,  fat: 0.1,  category: FoodCategory::Vegetables },
    CatalogFood { id: "sweet-potato",    name: "Sweet Potato",         serving: "1 medium",   calories: 103.0, protein: 2.3,  carbs: 23.6, fat: 0.2,  category: FoodCategory::Vegetables },
    CatalogFood { id: "avocado",         name: "Avocado",              serving: "1/2 fruit",  calories: 161.0, protein: 2.0,  carbs: 8.6,  fat: 14.7, category: FoodCategory::Vegetables },
    CatalogFood { id: "white-rice",      name: "White Rice",           serving: "1 cup",      calories: 205.0, protein: 4.3,  carbs: 44.5, fat: 0.4,  category: FoodCategory::Grains },
    CatalogFood { id: "brown-rice",      name: "Brown Rice",           serving: "1 cup",      calories: 216.0, protein: 5.0,  carbs: 44.8, fat: 1.8,  category: FoodCategory::Grains },
    CatalogFood { id: "oatmeal",         name: "Oatmeal",              serving: "1 cup",      calories: 154.0, protein: 6.0,  carbs: 27.4, fat: 3.2,  category: FoodCategory::Grains },
    CatalogFood { id: "whole-wheat-bread", name: "Whole Wheat Bread",  serving: "1 slice",    calories: 81.0,  protein: 4.0,  carbs: 13.8, fat: 1.1,  category: FoodCategory::Grains },
    CatalogFood { id: "pasta",           name: "Pasta",                serving: "1 cup",      calories: 221.0, protein: 8.1,  carbs: 43.2, fat: 1.3,  category: FoodCategory::Grains },
    CatalogFood { id: "quinoa",          name: "Quinoa",               serving: "1 cup",      calories: 222.0, protein: 8.1,  carbs: 39.4, fat: 3.6,  category: FoodCategory::Grains },
    CatalogFood { id: "chicken-breast",  name: "Chicken Breast",       serving: "100 g",      calories: 165.0, protein: 31.0, carbs: 0.0,  fat: 3.6,  category: FoodCategory::Protein },
    CatalogFood { id: "salmon",          name: "Salmon",               serving: "100 g",      calories: 208.0, protein: 20.4, carbs: 0.0,  fat: 13.4, category: FoodCategory::Protein },
    CatalogFood { id: "ground-beef",     name: "Ground Beef",          serving: "100 g",      calories: 250.0, protein: 26.0, carbs: 0.0,  fat: 15.0, category: FoodCategory::Protein },
    CatalogFood { id: "egg",             name: "Egg",                  serving: "1 large",    calories: 72.0,  protein: 6.3,  carbs: 0.4,  fat: 4.8,  category: FoodCategory::Protein },
    CatalogFood { id: "tofu",            name: "Tofu",                 serving: "100 g",      calories: 76.0,  protein: 8.0,  carbs: 1.9,  fat: 4.8,  category: FoodCategory::Protein },
    CatalogFood { id: "black-beans",     name: "Black Beans",          serving: "1 cup",      calories: 227.0, protein: 15.2, carbs: 40.8, fat: 0.9,  category: FoodCategory::Protein },
    CatalogFood { id: "milk",            name: "Milk (2%)",            serving: "1 cup",      calories: 122.0, protein: 8.1,  carbs: 11.7, fat: 4.8,  category: FoodCategory::Dairy },
    CatalogFood { id: "greek-yogurt",    name: "Greek Yogurt",         serving: "1 cup",      calories: 146.0, protein: 20.0, carbs: 7.9,  fat: 3.8,  category: FoodCategory::Dairy },
    CatalogFood { id: "cheddar-cheese",  name: "Cheddar Cheese",       serving: "1 oz",       calories: 113.0, protein: 6.4,  carbs: 0.9,  fat: 9.3,  category: FoodCategory::Dairy },
    CatalogFood { id: "almonds",         name: "Almonds",              serving: "1 oz",       calories: 164.0, protein: 6.0,  carbs: 6.1,  fat: 14.2, category: FoodCategory::Snacks },
    CatalogFood { id: "peanut-butter",   name: "Peanut Butter",        serving: "2 tbsp",     calories: 188.0, protein: 8.0,  carbs: 6.9,  fat: 16.0, category: FoodCategory::Snacks },
    CatalogFood { id: "dark-chocolate",  name: "Dark Chocolate",       serving: "1 oz",       calories: 170.0, protein: 2.2,  carbs: 13.0, fat: 12.0, category: FoodCategory::Snacks },
    CatalogFood { id: "popcorn",         name: "Popcorn",              serving: "3 cups",     calories: 93.0,  protein: 3.0,  carbs: 18.6, fat: 1.1,  category: FoodCategory::Snacks },
    CatalogFood { id: "orange-juice",    name: "Orange Juice",         serving: "1 cup",      calories: 112.0, protein: 1.7,  carbs: 25.8, fat: 0.5,  category: FoodCategory::Beverages },
    CatalogFood { id: "coffee",          name: "Coffee (black)",       serving: "1 cup",      calories: 2.0,   protein: 0.3,  carbs: 0.0,  fat: 0.0,  category: FoodCategory::Beverages },
    CatalogFood { id: "smoothie",        name: "Fruit Smoothie",       serving: "12 oz",      calories: 210.0, protein: 3.0,  carbs: 49.0, fat: 1.0,  category: FoodCategory::Beverages },
];

/// All catalog entries in display order.
pub fn all_foods() -> &'static [CatalogFood] {
    FOODS
}

/// The category filter row.
pub fn categories() -> &'static [FoodCategory] {
    &FoodCategory::ALL
}

/// Look up a catalog entry by id.
pub fn find_by_id(id: &str) -> Option<&'static CatalogFood> {
    FOODS.iter().find(|food| food.id == id)
}

/// Case-insensitive substring search over food names, optionally
/// restricted to one category. An empty query matches everything.
pub fn search_foods(query: &str, category: Option<FoodCategory>) -> Vec<&'static CatalogFood> {
    let needle = query.trim().to_lowercase();

    FOODS
        .iter()
        .filter(|food| category.map_or(true, |wanted| food.category == wanted))
        .filter(|food| needle.is_empty() || food.name.to_lowercase().contains(&needle))
        .collect()
}
