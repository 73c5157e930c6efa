//! Path checks performed before any file is written.

use std::path::{Component, Path, PathBuf};

use stringsdedup::Error;

/// Rejects a clean destination that aliases the input file.
///
/// Comparison happens after lexical path normalization, so `./a.strings` and
/// `a.strings` are treated as the same file. On rejection the error carries a
/// suggested alternative named after the input.
pub fn ensure_clean_destination(input: &str, destination: &str) -> Result<(), Error> {
    if normalize(Path::new(destination)) == normalize(Path::new(input)) {
        return Err(Error::CleanDestinationIsSource {
            path: PathBuf::from(destination),
            suggested: suggested_cleaned_path(Path::new(input)),
        });
    }
    Ok(())
}

/// Derives `<stem>-cleaned<ext>` next to the given path.
pub fn suggested_cleaned_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{stem}-cleaned.{}", ext.to_string_lossy()),
        None => format!("{stem}-cleaned"),
    };
    path.with_file_name(file_name)
}

// Lexical cleanup only, no filesystem access: drops `.` components and
// resolves `..` against a preceding normal component.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_paths_are_rejected() {
        let error = ensure_clean_destination("Localizable.strings", "Localizable.strings")
            .unwrap_err();
        assert!(matches!(error, Error::CleanDestinationIsSource { .. }));
    }

    #[test]
    fn test_dot_prefixed_alias_is_rejected() {
        assert!(ensure_clean_destination("Localizable.strings", "./Localizable.strings").is_err());
    }

    #[test]
    fn test_parent_traversal_alias_is_rejected() {
        assert!(
            ensure_clean_destination("res/Localizable.strings", "res/sub/../Localizable.strings")
                .is_err()
        );
    }

    #[test]
    fn test_distinct_destination_is_accepted() {
        assert!(ensure_clean_destination("Localizable.strings", "cleaned.strings").is_ok());
    }

    #[test]
    fn test_suggestion_keeps_the_extension() {
        assert_eq!(
            suggested_cleaned_path(Path::new("res/Localizable.strings")),
            PathBuf::from("res/Localizable-cleaned.strings")
        );
    }

    #[test]
    fn test_suggestion_without_extension() {
        assert_eq!(
            suggested_cleaned_path(Path::new("Localizable")),
            PathBuf::from("Localizable-cleaned")
        );
    }

    #[test]
    fn test_rejection_message_names_the_suggestion() {
        let error = ensure_clean_destination("Localizable.strings", "Localizable.strings")
            .unwrap_err();
        assert!(error.to_string().contains("Localizable-cleaned.strings"));
    }
}
