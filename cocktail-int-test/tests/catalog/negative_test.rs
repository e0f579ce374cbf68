use cocktail::doc;
use cocktail::errors::ErrorKind;
use cocktail::query::{where_contains, where_equal, Selection};
use cocktail_int_test::test_util::{cleanup, create_test_context, insert_test_recipes, run_test};

#[test]
fn test_malformed_id_is_invalid_argument() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            for id in ["abcde", "12345", "12345678901234567890", ""] {
                let result = catalog.find_all(&where_equal("_id", id, false, false));
                let payload = result.error().expect("malformed id is rejected");
                assert_eq!(payload.kind(), ErrorKind::InvalidArgument);
                assert_eq!(payload.status(), 400);
            }

            let result = catalog.delete_many(&where_equal("_id", "abcde", false, false));
            assert!(result.is_error());
            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 3);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_unknown_list_field() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let result = catalog.list(&Selection::all(), "color", true);
            let payload = result.error().expect("unknown field is rejected");
            assert_eq!(payload.kind(), ErrorKind::InvalidArgument);
            assert!(payload.message().contains("color"));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_contains_on_number_field() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let result = catalog.find_all(&where_contains("ingredients.amount", "1", false, false));
            assert_eq!(result.status(), 400);

            let result = catalog.count_all(&where_contains("_id", "1", false, false));
            assert_eq!(result.status(), 400);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_non_numeric_amount() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let result = catalog.find_all(&where_equal("ingredients.amount", "lots", false, false));
            assert_eq!(result.error().map(|e| e.kind()), Some(ErrorKind::InvalidArgument));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_create_invalid_recipes() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();

            let invalid = vec![
                doc! { glass: "Coupe" },
                doc! { name: "" },
                doc! { name: 42 },
                doc! { name: "Bad", ingredients: [{ ingredient: "Gin", amount: (-1), unit: "oz" }] },
                doc! { name: "Bad", ingredients: [{ amount: 1, unit: "oz" }] },
                doc! { name: "Bad", ingredients: "gin" },
            ];
            for payload in invalid {
                let result = catalog.create_recipe(&payload);
                assert_eq!(result.status(), 400, "{} should be rejected", payload);
            }

            assert_eq!(catalog.count_all(&Selection::all()).into_result()?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_errors_never_escape() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let selection = where_equal("_id", "not-an-id", true, false);

            assert!(catalog.find_all(&selection).is_error());
            assert!(catalog.find_one(&selection).is_error());
            assert!(catalog.count_all(&selection).is_error());
            assert!(catalog.update_one(&selection, &doc! { glass: "Coupe" }).is_error());
            assert!(catalog.update_many(&selection, &doc! { glass: "Coupe" }).is_error());
            assert!(catalog.delete_one(&selection).is_error());
            assert!(catalog.delete_many(&selection).is_error());
            assert!(catalog.duplicate(&selection).is_error());
            assert!(catalog.list(&selection, "name", false).is_error());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_malformed_field_paths() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            for field in ["name.", ".name", "ingredients..unit", "ingredients.-1"] {
                let result = catalog.find_all(&where_equal(field, "x", false, false));
                let payload = result.error().expect("malformed path is rejected");
                assert_eq!(payload.kind(), ErrorKind::InvalidArgument);
                assert_eq!(payload.status(), 400);
            }

            let found = catalog.find_all(&where_equal("color.x", "red", false, false)).into_result()?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}
