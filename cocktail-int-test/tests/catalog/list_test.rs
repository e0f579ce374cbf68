use cocktail::common::Value;
use cocktail::query::{where_equal, Selection};
use cocktail_int_test::test_util::{cleanup, create_test_context, insert_test_recipes, run_test};
use std::collections::HashSet;

#[test]
fn test_list_names() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let names = catalog.list(&Selection::all(), "name", false).into_result()?;
            assert_eq!(
                names,
                vec![
                    Value::from("Margarita"),
                    Value::from("Negroni"),
                    Value::from("Crème de Menthe Frappé"),
                ]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            let created = insert_test_recipes(&catalog)?;

            let ids = catalog.list(&Selection::all(), "id", false).into_result()?;
            let expected: Vec<Value> = created
                .iter()
                .filter_map(|d| d.id())
                .map(Value::from)
                .collect();
            assert_eq!(ids, expected);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_distinct_units() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let units = catalog.list(&Selection::all(), "unit", false).into_result()?;
            assert_eq!(units.len(), 7);

            let units = catalog.list(&Selection::all(), "unit", true).into_result()?;
            assert_eq!(units, vec![Value::from("oz")]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_distinct_amounts_of_selection() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let amounts = catalog
                .list(&where_equal("name", "margarita", true, false), "amount", true)
                .into_result()?;
            let amounts: HashSet<Value> = amounts.into_iter().collect();
            assert_eq!(amounts, HashSet::from([Value::from(1.5), Value::from(0.75)]));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_list_specials_and_labels() {
    run_test(
        create_test_context,
        |ctx| {
            let catalog = ctx.catalog();
            insert_test_recipes(&catalog)?;

            let specials = catalog.list(&Selection::all(), "special", false).into_result()?;
            assert_eq!(specials, vec![Value::from("Salt rim"), Value::from("Crushed ice")]);

            let labels = catalog.list(&Selection::all(), "label", true).into_result()?;
            let labels: HashSet<Value> = labels.into_iter().collect();
            assert_eq!(
                labels,
                HashSet::from([Value::from("Cointreau"), Value::from("Sweet vermouth")])
            );
            Ok(())
        },
        cleanup,
    )
}
