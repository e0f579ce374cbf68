use cocktail::collection::RecipeId;
use cocktail::common::Value;
use cocktail::doc;
use cocktail::errors::ErrorKind;
use cocktail::query::{where_equal, Selection};
use cocktail_int_test::test_util::{cleanup, create_test_context, insert_test_recipes, run_test};

#[test]
fn test_update_one_by_name() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .update_one(&where_equal("name", "Negroni", false, false), &doc! { glass: "Coupe" })
                .into_result()?;
            assert_eq!(summary.matched_count, 1);
            assert_eq!(summary.modified_count, 1);

            let stored = catalog
                .find_one(&where_equal("name", "Negroni", false, false))
                .into_result()?
                .expect("negroni is stored");
            assert_eq!(stored.get("glass")?, Value::from("Coupe"));
            assert_eq!(stored.get("garnish")?, Value::from("Orange peel"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_never_changes_identifier() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;
            let id = created[0].id().expect("stored recipe has an id");

            let mut payload = doc! { garnish: "Salt" };
            payload.put("_id", RecipeId::new())?;
            catalog
                .update_many(&Selection::all(), &payload)
                .into_result()?;

            let ids: Vec<Option<RecipeId>> = catalog
                .find_all(&Selection::all())
                .into_result()?
                .iter()
                .map(|d| d.id())
                .collect();
            let original: Vec<Option<RecipeId>> = created.iter().map(|d| d.id()).collect();
            assert_eq!(ids, original);

            let stored = catalog
                .find_one(&where_equal("_id", id, false, false))
                .into_result()?
                .expect("margarita is stored");
            assert_eq!(stored.get("garnish")?, Value::from("Salt"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_reports_unchanged_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .update_many(&Selection::all(), &doc! { glass: "Coupe" })
                .into_result()?;
            assert_eq!(summary.matched_count, 3);
            assert_eq!(summary.modified_count, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_replaces_ingredients() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let payload = doc! {
                ingredients: [
                    { ingredient: "Mezcal", amount: 2, unit: "oz" },
                    { special: "Smoked salt rim" }
                ]
            };
            catalog
                .update_one(&where_equal("name", "Margarita", false, false), &payload)
                .into_result()?;

            let units = catalog
                .list(&where_equal("name", "Margarita", false, false), "ingredient", false)
                .into_result()?;
            assert_eq!(units, vec![Value::from("Mezcal")]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_drops_undeclared_fields() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .update_one(&where_equal("name", "Negroni", false, false), &doc! { rating: 5 })
                .into_result()?;
            assert_eq!(summary.modified_count, 0);

            let stored = catalog
                .find_one(&where_equal("name", "Negroni", false, false))
                .into_result()?
                .expect("negroni is stored");
            assert!(!stored.contains_key("rating"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_rejects_invalid_payload() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let result = catalog.update_one(&Selection::all(), &doc! { name: "  " });
            assert_eq!(result.error().map(|e| e.kind()), Some(ErrorKind::InvalidArgument));

            let result = catalog.update_one(
                &Selection::all(),
                &doc! { ingredients: [{ ingredient: "Gin", amount: (-1), unit: "oz" }] },
            );
            assert_eq!(result.status(), 400);
            Ok(())
        },
        cleanup,
    )
}
