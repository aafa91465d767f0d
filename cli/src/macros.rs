/// Path of a checked-in fixture, e.g. `test_fixture!("resources", "artifacts")`
/// for `src/resources/fixtures/artifacts`.
#[macro_export]
macro_rules! test_fixture {
    ($module:expr, $name:expr) => {
        ::std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join($module)
            .join("fixtures")
            .join($name)
    };
}
