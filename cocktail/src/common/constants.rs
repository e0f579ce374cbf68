// document constants
pub const DOC_ID: &str = "_id";
pub const FIELD_SEPARATOR: &str = ".";

// recipe fields
pub const RECIPE_NAME: &str = "name";
pub const RECIPE_CATEGORY: &str = "category";
pub const RECIPE_GLASS: &str = "glass";
pub const RECIPE_GARNISH: &str = "garnish";
pub const RECIPE_IMAGE: &str = "image";
pub const RECIPE_PREPARATION: &str = "preparation";
pub const RECIPE_INGREDIENTS: &str = "ingredients";

// ingredient fields
pub const INGREDIENT_NAME: &str = "ingredient";
pub const INGREDIENT_AMOUNT: &str = "amount";
pub const INGREDIENT_UNIT: &str = "unit";
pub const INGREDIENT_LABEL: &str = "label";
pub const INGREDIENT_SPECIAL: &str = "special";

pub const RECIPE_FIELDS: [&str; 7] = [
    DOC_ID,
    RECIPE_NAME,
    RECIPE_CATEGORY,
    RECIPE_GLASS,
    RECIPE_GARNISH,
    RECIPE_IMAGE,
    RECIPE_PREPARATION,
];
pub const INGREDIENT_FIELDS: [&str; 5] = [
    INGREDIENT_NAME,
    INGREDIENT_AMOUNT,
    INGREDIENT_UNIT,
    INGREDIENT_LABEL,
    INGREDIENT_SPECIAL,
];

// duplication
pub const COPY_SUFFIX: &str = " (Copy)";

// identifier constants
pub const ID_DIGITS: usize = 19;
