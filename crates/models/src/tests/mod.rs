/// Migration and schema behaviour tests
pub mod schema_tests;
