//! Keeps the unit test tree in step with the source tree
//!
//! Every `src/` file except entry points and `mod.rs` needs a file at the same
//! relative path under `tests/unit/`, and every test file needs a `#[test]`.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    /// Relative paths of every `.rs` file and directory below `root`
    fn relative_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        walk(root, root, &mut paths)?;
        Ok(paths)
    }

    fn walk(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(root)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .into_owned();

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, root, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn is_organizational(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn report(header: &str, entries: &[String]) -> String {
        format!("{header}:\n{}", entries.join("\n"))
    }

    // Tests each source file has a unit test file
    // Verified by adding an untested source file
    #[test]
    fn test_source_files_have_unit_tests() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap_or_default();
        assert!(!sources.is_empty(), "no sources found under {SOURCE_ROOT}");

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !units.contains(*path))
            .map(|path| format!("  - {SOURCE_ROOT}/{path} -> {UNIT_ROOT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests each unit test file mirrors a source file
    // Verified by leaving a test behind after removing its source
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = relative_paths(Path::new(SOURCE_ROOT)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_ROOT)).unwrap_or_default();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_ROOT}/{path} -> {SOURCE_ROOT}/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without source files", &orphaned)
        );
    }

    // Tests no test file is empty of test functions
    // Verified by stripping the attributes from one file
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new(TESTS_ROOT);
        let files = relative_paths(root).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                Path::new(path.as_str()).extension().is_some_and(|ext| ext == "rs")
                    && !path.ends_with("mod.rs")
            })
            .filter(|path| {
                fs::read_to_string(root.join(path.as_str()))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {TESTS_ROOT}/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }
}
