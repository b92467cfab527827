//! Static seed datasets: the standard tag set, the common-grocery catalog,
//! recipe ingredients, the aisle mapping, the legacy nine-tag mapping, and a
//! starter fridge.

use crate::models::TagType;
use crate::seed::{AisleAssignment, FridgeSeed, ProductSeed, RetagMapping, TagSeed};

/// Ten aisles, four dietary labels, two special labels.
pub const STANDARD_TAGS: &[TagSeed] = &[
    TagSeed { name: "Produce", slug: "produce", tag_type: TagType::Aisle },
    TagSeed { name: "Meat & Seafood", slug: "meat-and-seafood", tag_type: TagType::Aisle },
    TagSeed { name: "Dairy & Eggs", slug: "dairy-and-eggs", tag_type: TagType::Aisle },
    TagSeed { name: "Bakery", slug: "bakery", tag_type: TagType::Aisle },
    TagSeed { name: "Pantry", slug: "pantry", tag_type: TagType::Aisle },
    TagSeed { name: "Frozen Foods", slug: "frozen-foods", tag_type: TagType::Aisle },
    TagSeed { name: "Condiments & Sauces", slug: "condiments-and-sauces", tag_type: TagType::Aisle },
    TagSeed { name: "Snacks", slug: "snacks", tag_type: TagType::Aisle },
    TagSeed { name: "Beverages", slug: "beverages", tag_type: TagType::Aisle },
    TagSeed { name: "Canned Goods", slug: "canned-goods", tag_type: TagType::Aisle },
    TagSeed { name: "Vegetarian", slug: "vegetarian", tag_type: TagType::Dietary },
    TagSeed { name: "Vegan", slug: "vegan", tag_type: TagType::Dietary },
    TagSeed { name: "Gluten-Free", slug: "gluten-free", tag_type: TagType::Dietary },
    TagSeed { name: "Dairy-Free", slug: "dairy-free", tag_type: TagType::Dietary },
    TagSeed { name: "Organic", slug: "organic", tag_type: TagType::Special },
    TagSeed { name: "Featured", slug: "featured", tag_type: TagType::Special },
];

/// The common-grocery catalog with realistic prices. Tagging is a separate
/// pass; image URLs are left empty for later enrichment.
pub const COMMON_GROCERIES: &[ProductSeed] = &[
    // Produce
    ProductSeed { name: "banana", price: 0.59, tags: &[] },
    ProductSeed { name: "apple", price: 1.49, tags: &[] },
    ProductSeed { name: "orange", price: 1.29, tags: &[] },
    ProductSeed { name: "tomato", price: 1.99, tags: &[] },
    ProductSeed { name: "potato", price: 0.89, tags: &[] },
    ProductSeed { name: "onion", price: 1.29, tags: &[] },
    ProductSeed { name: "carrot", price: 1.49, tags: &[] },
    ProductSeed { name: "lettuce", price: 2.49, tags: &[] },
    ProductSeed { name: "cucumber", price: 1.29, tags: &[] },
    ProductSeed { name: "bell pepper", price: 2.29, tags: &[] },
    ProductSeed { name: "broccoli", price: 2.99, tags: &[] },
    ProductSeed { name: "cauliflower", price: 3.49, tags: &[] },
    ProductSeed { name: "spinach", price: 2.99, tags: &[] },
    ProductSeed { name: "celery", price: 2.49, tags: &[] },
    ProductSeed { name: "garlic", price: 0.99, tags: &[] },
    ProductSeed { name: "ginger", price: 3.99, tags: &[] },
    ProductSeed { name: "mushroom", price: 3.99, tags: &[] },
    ProductSeed { name: "avocado", price: 1.99, tags: &[] },
    ProductSeed { name: "lemon", price: 0.79, tags: &[] },
    ProductSeed { name: "lime", price: 0.69, tags: &[] },
    // Dairy & eggs
    ProductSeed { name: "milk", price: 3.99, tags: &[] },
    ProductSeed { name: "egg", price: 4.99, tags: &[] },
    ProductSeed { name: "butter", price: 4.49, tags: &[] },
    ProductSeed { name: "cheese", price: 5.99, tags: &[] },
    ProductSeed { name: "cheddar cheese", price: 6.49, tags: &[] },
    ProductSeed { name: "mozzarella cheese", price: 5.99, tags: &[] },
    ProductSeed { name: "yogurt", price: 4.99, tags: &[] },
    ProductSeed { name: "sour cream", price: 3.49, tags: &[] },
    ProductSeed { name: "cream cheese", price: 3.99, tags: &[] },
    ProductSeed { name: "heavy cream", price: 4.99, tags: &[] },
    // Meat & protein
    ProductSeed { name: "chicken breast", price: 8.99, tags: &[] },
    ProductSeed { name: "ground beef", price: 6.99, tags: &[] },
    ProductSeed { name: "bacon", price: 7.99, tags: &[] },
    ProductSeed { name: "sausage", price: 5.99, tags: &[] },
    ProductSeed { name: "pork chop", price: 9.99, tags: &[] },
    ProductSeed { name: "salmon", price: 14.99, tags: &[] },
    ProductSeed { name: "shrimp", price: 12.99, tags: &[] },
    ProductSeed { name: "tuna", price: 3.99, tags: &[] },
    ProductSeed { name: "turkey breast", price: 9.99, tags: &[] },
    ProductSeed { name: "ham", price: 8.99, tags: &[] },
    // Pantry staples
    ProductSeed { name: "rice", price: 3.99, tags: &[] },
    ProductSeed { name: "pasta", price: 2.49, tags: &[] },
    ProductSeed { name: "flour", price: 3.49, tags: &[] },
    ProductSeed { name: "sugar", price: 2.99, tags: &[] },
    ProductSeed { name: "brown sugar", price: 3.49, tags: &[] },
    ProductSeed { name: "salt", price: 1.99, tags: &[] },
    ProductSeed { name: "black pepper", price: 4.99, tags: &[] },
    ProductSeed { name: "olive oil", price: 9.99, tags: &[] },
    ProductSeed { name: "vegetable oil", price: 6.99, tags: &[] },
    ProductSeed { name: "canola oil", price: 5.99, tags: &[] },
    // Canned & jarred
    ProductSeed { name: "canned tomato", price: 1.99, tags: &[] },
    ProductSeed { name: "tomato sauce", price: 2.49, tags: &[] },
    ProductSeed { name: "tomato paste", price: 1.79, tags: &[] },
    ProductSeed { name: "chicken broth", price: 2.99, tags: &[] },
    ProductSeed { name: "beef broth", price: 3.49, tags: &[] },
    ProductSeed { name: "vegetable broth", price: 2.99, tags: &[] },
    ProductSeed { name: "black bean", price: 1.49, tags: &[] },
    ProductSeed { name: "kidney bean", price: 1.49, tags: &[] },
    ProductSeed { name: "chickpea", price: 1.99, tags: &[] },
    ProductSeed { name: "corn", price: 1.29, tags: &[] },
    // Bread & bakery
    ProductSeed { name: "bread", price: 3.49, tags: &[] },
    ProductSeed { name: "whole wheat bread", price: 4.49, tags: &[] },
    ProductSeed { name: "bagel", price: 4.99, tags: &[] },
    ProductSeed { name: "tortilla", price: 3.99, tags: &[] },
    ProductSeed { name: "pita bread", price: 3.49, tags: &[] },
    ProductSeed { name: "english muffin", price: 3.99, tags: &[] },
    // Condiments & sauces
    ProductSeed { name: "ketchup", price: 3.49, tags: &[] },
    ProductSeed { name: "mustard", price: 2.99, tags: &[] },
    ProductSeed { name: "mayonnaise", price: 4.99, tags: &[] },
    ProductSeed { name: "soy sauce", price: 3.99, tags: &[] },
    ProductSeed { name: "hot sauce", price: 3.49, tags: &[] },
    ProductSeed { name: "bbq sauce", price: 3.99, tags: &[] },
    ProductSeed { name: "salsa", price: 3.99, tags: &[] },
    ProductSeed { name: "ranch dressing", price: 4.49, tags: &[] },
    ProductSeed { name: "italian dressing", price: 3.99, tags: &[] },
    // Spices & herbs
    ProductSeed { name: "oregano", price: 3.99, tags: &[] },
    ProductSeed { name: "basil", price: 3.49, tags: &[] },
    ProductSeed { name: "thyme", price: 3.99, tags: &[] },
    ProductSeed { name: "rosemary", price: 3.99, tags: &[] },
    ProductSeed { name: "cumin", price: 4.49, tags: &[] },
    ProductSeed { name: "paprika", price: 3.99, tags: &[] },
    ProductSeed { name: "chili powder", price: 4.49, tags: &[] },
    ProductSeed { name: "cinnamon", price: 4.99, tags: &[] },
    ProductSeed { name: "parsley", price: 2.99, tags: &[] },
    ProductSeed { name: "cilantro", price: 2.49, tags: &[] },
    // Frozen foods
    ProductSeed { name: "frozen peas", price: 2.99, tags: &[] },
    ProductSeed { name: "frozen corn", price: 2.49, tags: &[] },
    ProductSeed { name: "frozen broccoli", price: 2.99, tags: &[] },
    ProductSeed { name: "frozen mixed vegetables", price: 3.49, tags: &[] },
    ProductSeed { name: "ice cream", price: 5.99, tags: &[] },
    ProductSeed { name: "frozen pizza", price: 6.99, tags: &[] },
    // Snacks & misc
    ProductSeed { name: "peanut butter", price: 4.99, tags: &[] },
    ProductSeed { name: "jam", price: 3.99, tags: &[] },
    ProductSeed { name: "honey", price: 6.99, tags: &[] },
    ProductSeed { name: "maple syrup", price: 8.99, tags: &[] },
    ProductSeed { name: "crackers", price: 3.99, tags: &[] },
    ProductSeed { name: "chips", price: 3.99, tags: &[] },
    ProductSeed { name: "cereal", price: 4.99, tags: &[] },
    ProductSeed { name: "oatmeal", price: 4.49, tags: &[] },
];

/// Normalized recipe ingredients ("1 lb extra-lean ground turkey" becomes
/// "ground turkey") with the tag slugs each should carry. Some slugs are
/// finer-grained than the standard set; those relations are skipped until
/// the tags exist.
pub const RECIPE_INGREDIENTS: &[ProductSeed] = &[
    ProductSeed { name: "red onion", price: 1.99, tags: &["produce", "vegetables"] },
    ProductSeed { name: "garlic", price: 2.99, tags: &["produce", "vegetables"] },
    ProductSeed { name: "red chilli", price: 2.49, tags: &["produce", "vegetables"] },
    ProductSeed { name: "pork sausage", price: 5.99, tags: &["meat-and-seafood", "protein"] },
    ProductSeed { name: "olive oil", price: 8.99, tags: &["pantry", "oils"] },
    ProductSeed { name: "sea salt", price: 3.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "ground cumin", price: 4.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "whole tomatoes", price: 2.49, tags: &["pantry", "canned-goods"] },
    ProductSeed { name: "chickpeas", price: 1.99, tags: &["pantry", "canned-goods"] },
    ProductSeed { name: "baby spinach", price: 3.99, tags: &["produce", "vegetables"] },
    ProductSeed { name: "pancake mix", price: 7.99, tags: &["pantry", "breakfast"] },
    ProductSeed { name: "sugar-free syrup", price: 5.99, tags: &["pantry", "breakfast"] },
    ProductSeed { name: "ground turkey", price: 6.99, tags: &["meat-and-seafood", "protein"] },
    ProductSeed { name: "kosher salt", price: 3.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "black pepper", price: 4.99, tags: &["pantry", "spices"] },
    ProductSeed { name: "white pepper", price: 5.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "garlic powder", price: 3.99, tags: &["pantry", "spices"] },
    ProductSeed { name: "onion powder", price: 3.99, tags: &["pantry", "spices"] },
    ProductSeed { name: "italian seasoning", price: 4.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "cayenne pepper", price: 4.99, tags: &["pantry", "spices"] },
    ProductSeed { name: "smoked paprika", price: 5.49, tags: &["pantry", "spices"] },
    ProductSeed { name: "gochujang", price: 6.99, tags: &["pantry", "international"] },
    ProductSeed { name: "egg white", price: 4.99, tags: &["dairy-and-eggs", "protein"] },
    ProductSeed { name: "american cheese", price: 4.49, tags: &["dairy-and-eggs", "cheese"] },
];

/// Cucumber-salad ingredients. Staples like salt and garlic overlap the
/// grocery catalog and skip on seed.
pub const SALAD_INGREDIENTS: &[ProductSeed] = &[
    ProductSeed { name: "mini cucumbers", price: 3.99, tags: &["vegetables", "vegetarian", "gluten-free"] },
    ProductSeed { name: "salt", price: 2.49, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "red onion", price: 1.29, tags: &["vegetables", "vegetarian", "gluten-free"] },
    ProductSeed { name: "seasoned rice vinegar", price: 3.49, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "hot honey", price: 8.99, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "soy sauce", price: 3.99, tags: &["pantry", "vegetarian"] },
    ProductSeed { name: "sesame oil", price: 5.99, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "fish sauce", price: 4.49, tags: &["pantry", "gluten-free"] },
    ProductSeed { name: "garlic", price: 0.79, tags: &["vegetables", "vegetarian", "gluten-free"] },
    ProductSeed { name: "red pepper flakes", price: 2.99, tags: &["pantry", "vegetarian", "gluten-free"] },
];

/// Buffalo-wing ingredients, including the fridge starter's wing-night
/// items.
pub const WING_INGREDIENTS: &[ProductSeed] = &[
    ProductSeed { name: "chicken wings", price: 9.99, tags: &["meat-and-seafood", "gluten-free"] },
    ProductSeed { name: "peanut oil", price: 12.99, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "buffalo sauce", price: 4.99, tags: &["pantry"] },
    ProductSeed { name: "worcestershire sauce", price: 4.49, tags: &["pantry"] },
    ProductSeed { name: "unsalted butter", price: 4.99, tags: &["dairy-and-eggs", "vegetarian"] },
    ProductSeed { name: "buttermilk", price: 3.99, tags: &["dairy-and-eggs", "vegetarian"] },
    ProductSeed { name: "fresh dill", price: 2.99, tags: &["vegetables", "vegetarian", "gluten-free"] },
    ProductSeed { name: "fresh chives", price: 2.49, tags: &["vegetables", "vegetarian", "gluten-free"] },
    ProductSeed { name: "white vinegar", price: 2.99, tags: &["pantry", "vegetarian", "gluten-free"] },
    ProductSeed { name: "dried parsley", price: 3.49, tags: &["pantry", "vegetarian", "gluten-free"] },
];

/// Every ingredient set the `ingredients` seeding pass applies, in order.
pub const INGREDIENT_SETS: &[&[ProductSeed]] =
    &[RECIPE_INGREDIENTS, SALAD_INGREDIENTS, WING_INGREDIENTS];

/// Which aisle each catalog product files under, by name.
pub const AISLE_ASSIGNMENTS: &[AisleAssignment] = &[
    AisleAssignment {
        slug: "produce",
        products: &[
            "banana", "apple", "orange", "tomato", "potato", "onion", "carrot", "lettuce",
            "cucumber", "bell pepper", "broccoli", "cauliflower", "spinach", "celery",
            "garlic", "ginger", "mushroom", "avocado", "lemon", "lime",
        ],
    },
    AisleAssignment {
        slug: "dairy-and-eggs",
        products: &[
            "milk", "egg", "butter", "cheese", "cheddar cheese", "mozzarella cheese",
            "yogurt", "sour cream", "cream cheese", "heavy cream",
        ],
    },
    AisleAssignment {
        slug: "meat-and-seafood",
        products: &[
            "chicken breast", "ground beef", "bacon", "sausage", "pork chop",
            "salmon", "shrimp", "tuna", "turkey breast", "ham",
        ],
    },
    AisleAssignment {
        slug: "pantry",
        products: &[
            "rice", "pasta", "flour", "sugar", "brown sugar", "salt", "black pepper",
            "olive oil", "vegetable oil", "canola oil",
        ],
    },
    AisleAssignment {
        slug: "canned-goods",
        products: &[
            "canned tomato", "tomato sauce", "tomato paste", "chicken broth", "beef broth",
            "vegetable broth", "black bean", "kidney bean", "chickpea", "corn",
        ],
    },
    AisleAssignment {
        slug: "bakery",
        products: &[
            "bread", "whole wheat bread", "bagel", "tortilla", "pita bread", "english muffin",
        ],
    },
    AisleAssignment {
        slug: "condiments-and-sauces",
        products: &[
            "ketchup", "mustard", "mayonnaise", "soy sauce", "hot sauce", "bbq sauce",
            "salsa", "ranch dressing", "italian dressing", "oregano", "basil", "thyme",
            "rosemary", "cumin", "paprika", "chili powder", "cinnamon", "parsley", "cilantro",
        ],
    },
    AisleAssignment {
        slug: "frozen-foods",
        products: &[
            "frozen peas", "frozen corn", "frozen broccoli", "frozen mixed vegetables",
            "ice cream", "frozen pizza",
        ],
    },
    AisleAssignment {
        slug: "snacks",
        products: &[
            "peanut butter", "jam", "honey", "maple syrup", "crackers", "chips",
            "cereal", "oatmeal",
        ],
    },
];

/// The legacy nine-tag layout (aisles fruit, vegetables, meat-and-seafood,
/// deli, dairy-and-eggs, pantry; dietary vegetarian, gluten-free; special
/// organic). Relations for slugs the store lacks are skipped.
pub const RETAG_MAPPINGS: &[RetagMapping] = &[
    // Fruits
    RetagMapping { name: "banana", tags: &["fruit", "vegetarian", "gluten-free"] },
    RetagMapping { name: "apple", tags: &["fruit", "vegetarian", "gluten-free"] },
    RetagMapping { name: "orange", tags: &["fruit", "vegetarian", "gluten-free"] },
    RetagMapping { name: "lemon", tags: &["fruit", "vegetarian", "gluten-free"] },
    RetagMapping { name: "lime", tags: &["fruit", "vegetarian", "gluten-free"] },
    RetagMapping { name: "avocado", tags: &["fruit", "vegetarian", "gluten-free"] },
    // Vegetables
    RetagMapping { name: "tomato", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "potato", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "onion", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "red onion", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "carrot", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "lettuce", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cucumber", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "bell pepper", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "red chilli", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "broccoli", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cauliflower", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "spinach", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "baby spinach", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "celery", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "garlic", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "ginger", tags: &["vegetables", "vegetarian", "gluten-free"] },
    RetagMapping { name: "mushroom", tags: &["vegetables", "vegetarian", "gluten-free"] },
    // Dairy & eggs
    RetagMapping { name: "milk", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "egg", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "egg white", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "butter", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "cheese", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "cheddar cheese", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "mozzarella cheese", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "american cheese", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "yogurt", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "sour cream", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "cream cheese", tags: &["dairy-and-eggs", "vegetarian"] },
    RetagMapping { name: "heavy cream", tags: &["dairy-and-eggs", "vegetarian"] },
    // Meat & seafood
    RetagMapping { name: "chicken breast", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "ground beef", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "ground turkey", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "bacon", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "sausage", tags: &["meat-and-seafood"] },
    RetagMapping { name: "pork sausage", tags: &["meat-and-seafood"] },
    RetagMapping { name: "pork chop", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "salmon", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "shrimp", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "tuna", tags: &["meat-and-seafood", "gluten-free"] },
    RetagMapping { name: "turkey breast", tags: &["meat-and-seafood", "deli", "gluten-free"] },
    RetagMapping { name: "ham", tags: &["meat-and-seafood", "deli", "gluten-free"] },
    // Pantry: grains & pasta
    RetagMapping { name: "rice", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "pasta", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "flour", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "oatmeal", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: baking & sugar
    RetagMapping { name: "sugar", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "brown sugar", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "honey", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "maple syrup", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "pancake mix", tags: &["pantry", "vegetarian"] },
    // Pantry: oils
    RetagMapping { name: "olive oil", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "vegetable oil", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "canola oil", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: canned goods
    RetagMapping { name: "canned tomato", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "whole tomatoes", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "tomato sauce", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "tomato paste", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "chicken broth", tags: &["pantry", "gluten-free"] },
    RetagMapping { name: "beef broth", tags: &["pantry", "gluten-free"] },
    RetagMapping { name: "vegetable broth", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "black bean", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "kidney bean", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "chickpea", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "chickpeas", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "corn", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: spices & seasonings
    RetagMapping { name: "salt", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "kosher salt", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "sea salt", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "black pepper", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "white pepper", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "oregano", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "basil", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "thyme", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "rosemary", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cumin", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "ground cumin", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "paprika", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "smoked paprika", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "chili powder", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cinnamon", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "parsley", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cilantro", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "garlic powder", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "onion powder", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "italian seasoning", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "cayenne pepper", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: international
    RetagMapping { name: "gochujang", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: condiments
    RetagMapping { name: "ketchup", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "mustard", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "mayonnaise", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "soy sauce", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "hot sauce", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "bbq sauce", tags: &["pantry"] },
    RetagMapping { name: "salsa", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "ranch dressing", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "italian dressing", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "sugar-free syrup", tags: &["pantry", "vegetarian"] },
    // Pantry: spreads
    RetagMapping { name: "peanut butter", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "jam", tags: &["pantry", "vegetarian", "gluten-free"] },
    // Pantry: bread
    RetagMapping { name: "bread", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "whole wheat bread", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "bagel", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "tortilla", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "pita bread", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "english muffin", tags: &["pantry", "vegetarian"] },
    // Pantry: frozen
    RetagMapping { name: "frozen peas", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "frozen corn", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "frozen broccoli", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "frozen mixed vegetables", tags: &["pantry", "vegetarian", "gluten-free"] },
    RetagMapping { name: "ice cream", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "frozen pizza", tags: &["pantry"] },
    // Pantry: snacks
    RetagMapping { name: "crackers", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "chips", tags: &["pantry", "vegetarian"] },
    RetagMapping { name: "cereal", tags: &["pantry", "vegetarian"] },
];

/// A stocked test fridge: wing-night ingredients plus everyday staples.
pub const FRIDGE_STARTER: &[FridgeSeed] = &[
    FridgeSeed { name: "chicken wings", quantity: 2 },
    FridgeSeed { name: "butter", quantity: 1 },
    FridgeSeed { name: "garlic", quantity: 3 },
    FridgeSeed { name: "hot sauce", quantity: 1 },
    FridgeSeed { name: "buttermilk", quantity: 1 },
    FridgeSeed { name: "fresh dill", quantity: 1 },
    FridgeSeed { name: "fresh chives", quantity: 1 },
    FridgeSeed { name: "milk", quantity: 2 },
    FridgeSeed { name: "egg", quantity: 12 },
    FridgeSeed { name: "cheese", quantity: 1 },
    FridgeSeed { name: "chicken breast", quantity: 2 },
    FridgeSeed { name: "broccoli", quantity: 1 },
    FridgeSeed { name: "carrot", quantity: 5 },
    FridgeSeed { name: "onion", quantity: 3 },
    FridgeSeed { name: "tomato", quantity: 4 },
    FridgeSeed { name: "lettuce", quantity: 1 },
    FridgeSeed { name: "bacon", quantity: 1 },
    FridgeSeed { name: "yogurt", quantity: 4 },
    FridgeSeed { name: "bell pepper", quantity: 2 },
    FridgeSeed { name: "avocado", quantity: 3 },
];
