use cocktail::catalog::RecipeCatalog;
use cocktail::collection::Document;
use cocktail::doc;
use cocktail::errors::{ErrorKind, RecipeError, RecipeResult};
use cocktail::query::Selection;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::LastName;
use fake::Fake;
use std::backtrace::Backtrace;
use std::thread;
use std::time::{Duration, Instant};

/// Runs a test with retry logic and error handling.
/// `after` runs even when the test body fails.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> RecipeResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> RecipeResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> RecipeResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    const MAX_RETRIES: u32 = 3;
    let mut last_error: Option<String> = None;
    let mut last_backtrace: Option<String> = None;

    for attempt in 1..=MAX_RETRIES {
        let start_time = Instant::now();

        let result = std::panic::catch_unwind(|| {
            let backtrace = Backtrace::capture();
            match before() {
                Ok(ctx) => match test(ctx.clone()) {
                    Ok(_) => after(ctx).map_err(|e| {
                        (format!("After run failed: {:?}", e), backtrace.to_string())
                    }),
                    Err(e) => {
                        let _ = after(ctx);
                        Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                    }
                },
                Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
            }
        });

        let elapsed = start_time.elapsed();

        match result {
            Ok(Ok(_)) => return,
            Ok(Err((e, bt))) => {
                eprintln!(
                    "\n========== Test Attempt {}/{} Failed (took {:?}) ==========",
                    attempt, MAX_RETRIES, elapsed
                );
                eprintln!("Error: {}", e);
                last_error = Some(e);
                last_backtrace = Some(bt);
            }
            Err(panic_err) => {
                let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_err.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "\n========== Test Attempt {}/{} Panicked (took {:?}) ==========",
                    attempt, MAX_RETRIES, elapsed
                );
                eprintln!("Panic: {}", err_msg);
                last_error = Some(format!("Panic: {}", err_msg));
                last_backtrace = Some(Backtrace::capture().to_string());
            }
        }

        if attempt < MAX_RETRIES {
            eprintln!("Retrying in {}ms...\n", 100 * attempt);
            thread::sleep(Duration::from_millis(100 * attempt as u64));
        }
    }

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {} attempts", MAX_RETRIES);
    eprintln!("Last error: {}", last_error.as_deref().unwrap_or("Unknown"));
    if let Some(bt) = &last_backtrace {
        if !bt.is_empty() && !bt.contains("disabled") {
            eprintln!("\nBacktrace:\n{}", bt);
        }
    }
    eprintln!("=====================================================\n");

    panic!(
        "Test failed after {} attempts. Last error: {}",
        MAX_RETRIES,
        last_error.unwrap_or_default()
    );
}

#[derive(Clone)]
pub struct TestContext {
    catalog: RecipeCatalog,
}

impl TestContext {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> RecipeCatalog {
        self.catalog.clone()
    }
}

pub fn create_test_context() -> RecipeResult<TestContext> {
    let catalog = RecipeCatalog::builder().open()?;
    Ok(TestContext::new(catalog))
}

/// Removes every recipe and checks the catalog is left empty.
pub fn cleanup(ctx: TestContext) -> RecipeResult<()> {
    let catalog = ctx.catalog();
    catalog.delete_many(&Selection::all()).into_result()?;
    let remaining = catalog.count_all(&Selection::all()).into_result()?;
    if remaining != 0 {
        return Err(RecipeError::new(
            &format!("{} recipes left after cleanup", remaining),
            ErrorKind::Internal,
        ));
    }
    Ok(())
}

pub fn create_test_recipes() -> Vec<Document> {
    let margarita = doc! {
        name: "Margarita",
        glass: "Cocktail",
        category: "Sour",
        garnish: "Lime wheel",
        ingredients: [
            { ingredient: "Tequila", amount: 1.5, unit: "oz" },
            { ingredient: "Triple sec", amount: 0.75, unit: "oz", label: "Cointreau" },
            { ingredient: "Lime juice", amount: 0.75, unit: "oz" },
            { special: "Salt rim" }
        ]
    };

    let negroni = doc! {
        name: "Negroni",
        glass: "Rocks",
        category: "Stirred",
        garnish: "Orange peel",
        ingredients: [
            { ingredient: "Gin", amount: 1, unit: "oz" },
            { ingredient: "Campari", amount: 1, unit: "oz" },
            { ingredient: "Vermouth", amount: 1, unit: "oz", label: "Sweet vermouth" }
        ]
    };

    let creme = doc! {
        name: "Crème de Menthe Frappé",
        glass: "Coupe",
        category: "After Dinner",
        ingredients: [
            { ingredient: "Crème de menthe", amount: 2, unit: "oz" },
            { special: "Crushed ice" }
        ]
    };

    vec![margarita, negroni, creme]
}

pub fn insert_test_recipes(catalog: &RecipeCatalog) -> RecipeResult<Vec<Document>> {
    create_test_recipes()
        .iter()
        .map(|recipe| catalog.create_recipe(recipe).into_result().map_err(RecipeError::from))
        .collect()
}

/// A valid recipe with generated name, glass and ingredients.
pub fn random_recipe() -> Document {
    let name = format!("{} {}", LastName().fake::<String>(), Word().fake::<String>());
    let glass: String = Word().fake();
    let spirit: String = Word().fake();
    let amount: f64 = (0.25..3.0).fake();

    doc! {
        name: name,
        glass: glass,
        ingredients: [
            { ingredient: spirit, amount: amount, unit: "oz" },
            { special: "Stir with ice" }
        ]
    }
}
