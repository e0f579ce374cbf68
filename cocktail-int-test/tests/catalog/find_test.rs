use cocktail::common::Value;
use cocktail::doc;
use cocktail::query::{where_contains, where_equal, QueryOptions, RawQuery, Selection};
use cocktail_int_test::test_util::{
    cleanup, create_test_context, insert_test_recipes, random_recipe, run_test,
};

fn names(documents: &[cocktail::collection::Document]) -> Vec<String> {
    documents
        .iter()
        .filter_map(|d| d.get("name").ok().and_then(|v| v.as_str().map(str::to_string)))
        .collect()
}

#[test]
fn test_find_all() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let found = catalog.find_all(&Selection::all()).into_result()?;
            assert_eq!(found.len(), 3);
            assert!(found.iter().all(|d| d.has_id()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_margarita_end_to_end() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = catalog
                .create_recipe(&doc! {
                    name: "Margarita",
                    ingredients: [{ ingredient: "Tequila", amount: 2, unit: "oz" }]
                })
                .into_result()?;

            let found = catalog
                .find_all(&where_equal("name", "margarita", true, false))
                .into_result()?;
            assert_eq!(found, vec![created.clone()]);

            let found = catalog
                .find_all(&where_contains("name", "garit", false, false))
                .into_result()?;
            assert_eq!(found, vec![created.clone()]);

            let found = catalog
                .find_all(&where_equal("name", "Márgarita", false, false))
                .into_result()?;
            assert_eq!(found, vec![created]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_match_whole_excludes_longer_values() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            for name in ["Sour", "Whiskey Sour", "Sour Cherry"] {
                catalog.create_recipe(&doc! { name: name }).into_result()?;
            }

            let found = catalog.find_all(&where_equal("name", "Sour", false, false)).into_result()?;
            assert_eq!(names(&found), vec!["Sour"]);

            let found = catalog.find_all(&where_contains("name", "Sour", false, false)).into_result()?;
            assert_eq!(found.len(), 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_metacharacters_match_literally() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            catalog.create_recipe(&doc! { name: "a.b*c" }).into_result()?;
            catalog.create_recipe(&doc! { name: "axbbbc" }).into_result()?;

            let found = catalog.find_all(&where_equal("name", "a.b*c", false, false)).into_result()?;
            assert_eq!(names(&found), vec!["a.b*c"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_accent_folding_both_ways() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let found = catalog
                .find_all(&where_contains("name", "creme de menthe", true, false))
                .into_result()?;
            assert_eq!(names(&found), vec!["Crème de Menthe Frappé"]);

            let found = catalog
                .find_all(&where_contains("name", "creme", true, true))
                .into_result()?;
            assert!(found.is_empty());

            let found = catalog
                .find_all(&where_contains("name", "Crème", false, true))
                .into_result()?;
            assert_eq!(found.len(), 1);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_case_sensitivity() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let found = catalog.find_all(&where_equal("name", "NEGRONI", false, false)).into_result()?;
            assert!(found.is_empty());

            let found = catalog.find_all(&where_equal("name", "NEGRONI", true, false)).into_result()?;
            assert_eq!(names(&found), vec!["Negroni"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_ingredient_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let found = catalog
                .find_all(&where_equal("ingredients.label", "cointreau", true, false))
                .into_result()?;
            assert_eq!(names(&found), vec!["Margarita"]);

            let found = catalog
                .find_all(&where_equal("ingredients.amount", 1, false, false))
                .into_result()?;
            assert_eq!(names(&found), vec!["Negroni"]);

            let found = catalog
                .find_all(&where_contains("ingredients.special", "ice", true, false))
                .into_result()?;
            assert_eq!(names(&found), vec!["Crème de Menthe Frappé"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;
            let id = created[1].id().expect("stored recipe has an id");

            let found = catalog
                .find_one(&where_equal("_id", id.to_string(), false, false))
                .into_result()?;
            assert_eq!(found, Some(created[1].clone()));

            let found = catalog.find_one(&where_equal("_id", id, false, false)).into_result()?;
            assert_eq!(found.and_then(|d| d.id()), Some(id));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_combined_criteria() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let mut query = RawQuery::new();
            query.insert("glass".to_string(), Value::from("rocks"));
            query.insert("ingredients.ingredient".to_string(), Value::from("campari"));
            let selection = Selection::new(query, QueryOptions::new(true, true, false));

            let found = catalog.find_all(&selection).into_result()?;
            assert_eq!(names(&found), vec!["Negroni"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_count_with_generated_recipes() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            for _ in 0..20 {
                catalog.create_recipe(&random_recipe()).into_result()?;
            }

            let count = catalog.count_all(&Selection::all()).into_result()?;
            assert_eq!(count, 20);

            let count = catalog
                .count_all(&where_equal("ingredients.unit", "oz", false, false))
                .into_result()?;
            assert_eq!(count, 20);
            Ok(())
        },
        cleanup,
    )
}
