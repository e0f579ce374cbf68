use cocktail::query::{where_contains, where_equal, Selection};
use cocktail_int_test::test_util::{cleanup, create_test_context, insert_test_recipes, run_test};

#[test]
fn test_delete_one() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .delete_one(&where_contains("glass", "o", true, false))
                .into_result()?;
            assert_eq!(summary.deleted_count, 1);
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_many() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .delete_many(&where_equal("ingredients.unit", "oz", false, false))
                .into_result()?;
            assert_eq!(summary.deleted_count, 3);
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_by_id() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;
            let id = created[2].id().expect("stored recipe has an id");

            let summary = catalog
                .delete_one(&where_equal("_id", id.to_string(), false, false))
                .into_result()?;
            assert_eq!(summary.deleted_count, 1);

            let summary = catalog
                .delete_one(&where_equal("_id", id.to_string(), false, false))
                .into_result()?;
            assert_eq!(summary.deleted_count, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_nothing_matches() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let summary = catalog
                .delete_many(&where_equal("name", "Mai Tai", true, false))
                .into_result()?;
            assert_eq!(summary.deleted_count, 0);
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 3);
            Ok(())
        },
        cleanup,
    )
}
