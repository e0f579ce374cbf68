mod duplicate_test;
mod find_test;
mod list_test;
mod negative_test;
mod remove_test;
mod update_test;
