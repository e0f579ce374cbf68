use cocktail::common::Value;
use cocktail::errors::ErrorKind;
use cocktail::query::{where_equal, Selection};
use cocktail_int_test::test_util::{cleanup, create_test_context, insert_test_recipes, run_test};

#[test]
fn test_duplicate_by_name() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;

            let copy = catalog
                .duplicate(&where_equal("name", "Negroni", false, false))
                .into_result()?;
            assert_eq!(copy.get("name")?, Value::from("Negroni (Copy)"));
            assert_ne!(copy.id(), created[1].id());
            assert_eq!(copy.get("ingredients")?, created[1].get("ingredients")?);
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 4);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_duplicate_by_id_repeatedly() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;
            let id = created[0].id().expect("stored recipe has an id");
            let selection = where_equal("_id", id.to_string(), false, false);

            let mut names = Vec::new();
            for _ in 0..3 {
                let copy = catalog.duplicate(&selection).into_result()?;
                names.push(copy.get("name")?);
            }
            assert_eq!(
                names,
                vec![
                    Value::from("Margarita (Copy)"),
                    Value::from("Margarita (Copy) (Copy)"),
                    Value::from("Margarita (Copy) (Copy) (Copy)"),
                ]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_duplicate_of_copy() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            catalog
                .duplicate(&where_equal("name", "Negroni", false, false))
                .into_result()?;
            let copy = catalog
                .duplicate(&where_equal("name", "Negroni (Copy)", false, false))
                .into_result()?;
            assert_eq!(copy.get("name")?, Value::from("Negroni (Copy) (Copy)"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_duplicate_missing_recipe() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let result = catalog.duplicate(&where_equal("name", "Aviation", false, false));
            let payload = result.error().expect("duplicate of a missing recipe fails");
            assert_eq!(payload.kind(), ErrorKind::NotFound);
            assert_eq!(payload.status(), 404);
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 3);
            Ok(())
        },
        cleanup,
    )
}
