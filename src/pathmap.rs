//! Remote-to-local path translation.
//!
//! The remote catalog reports paths in whatever convention its host
//! uses (often Windows drive letters and backslashes); the media lives
//! under a configured local root. `map` computes the relative suffix
//! of the remote path under the remote library root and re-joins it
//! under the local root. Pure computation, no filesystem access.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Path translation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("remote path '{path}' is not under library root '{root}'")]
    NotUnderRoot { path: String, root: String },
}

/// Translate a remote-reported path into a local path.
///
/// Both `remote_path` and `remote_root` are normalized to forward
/// slashes and stripped of any leading drive-letter token before the
/// prefix comparison, so `D:\Movies\Alien\Alien.mkv` under root
/// `D:\Movies` maps the same way as `/movies/Alien/Alien.mkv` under
/// `/movies`. The prefix match is component-wise: `D:\Movies2` is not
/// under `D:\Movies`. When either side carries a drive-letter token
/// the comparison is case-insensitive, matching the Windows filesystem
/// semantics the path came from; the suffix keeps the case the server
/// reported.
pub fn map(remote_path: &str, remote_root: &str, local_root: &Path) -> Result<PathBuf, MapError> {
    let path_parts = components(remote_path);
    let root_parts = components(remote_root);

    let fold_case = has_drive(remote_path) || has_drive(remote_root);

    let is_prefix = path_parts.len() >= root_parts.len()
        && root_parts
            .iter()
            .zip(&path_parts)
            .all(|(root, part)| matches_component(root, part, fold_case));

    if !is_prefix {
        return Err(MapError::NotUnderRoot {
            path: remote_path.to_string(),
            root: remote_root.to_string(),
        });
    }

    let mut local = local_root.to_path_buf();
    for part in &path_parts[root_parts.len()..] {
        local.push(part);
    }

    Ok(local)
}

/// Split a remote path into components, separator- and drive-agnostic.
fn components(path: &str) -> Vec<&str> {
    let normalized = strip_drive(path);

    normalized
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect()
}

/// Strip a leading `X:` drive token if present.
fn strip_drive(path: &str) -> &str {
    if has_drive(path) {
        &path[2..]
    } else {
        path
    }
}

/// Check for a leading `X:` drive token.
fn has_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Compare two path components, optionally case-insensitively.
fn matches_component(a: &str, b: &str, fold_case: bool) -> bool {
    if fold_case {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_remote_to_unix_local() {
        let local = map(
            r"D:\Movies\Alien\Alien.mkv",
            r"D:\Movies",
            Path::new("/data/movies"),
        )
        .unwrap();

        assert_eq!(local, PathBuf::from("/data/movies/Alien/Alien.mkv"));
    }

    #[test]
    fn test_unix_remote_to_unix_local() {
        let local = map(
            "/srv/media/tv/Show X",
            "/srv/media/tv",
            Path::new("/data/tv"),
        )
        .unwrap();

        assert_eq!(local, PathBuf::from("/data/tv/Show X"));
    }

    #[test]
    fn test_drive_letters_are_not_matched_literally() {
        // Server says D:, the root was configured with forward slashes
        let local = map(
            r"D:\Movies\Alien\Alien.mkv",
            "D:/Movies",
            Path::new("/data/movies"),
        )
        .unwrap();

        assert_eq!(local, PathBuf::from("/data/movies/Alien/Alien.mkv"));
    }

    #[test]
    fn test_trailing_separator_on_root() {
        let local = map(
            r"D:\Movies\Alien\Alien.mkv",
            r"D:\Movies\",
            Path::new("/data/movies"),
        )
        .unwrap();

        assert_eq!(local, PathBuf::from("/data/movies/Alien/Alien.mkv"));
    }

    #[test]
    fn test_drive_letter_paths_compare_case_insensitively() {
        // Root typed as d:\movies, server reports D:\Movies\...
        let local = map(
            r"D:\Movies\Alien\Alien.mkv",
            r"d:\movies",
            Path::new("/data/movies"),
        )
        .unwrap();

        // Suffix keeps the server's case
        assert_eq!(local, PathBuf::from("/data/movies/Alien/Alien.mkv"));
    }

    #[test]
    fn test_unix_paths_stay_case_sensitive() {
        let err = map(
            "/srv/Media/Alien/Alien.mkv",
            "/srv/media",
            Path::new("/data/movies"),
        )
        .unwrap_err();

        assert!(matches!(err, MapError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_not_under_root_fails() {
        let err = map(
            r"E:\Other\Alien.mkv",
            r"D:\Movies",
            Path::new("/data/movies"),
        )
        .unwrap_err();

        assert!(matches!(err, MapError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_partial_component_is_not_a_prefix() {
        // "Movies2" must not match root "Movies"
        let err = map(
            r"D:\Movies2\Alien\Alien.mkv",
            r"D:\Movies",
            Path::new("/data/movies"),
        )
        .unwrap_err();

        assert_eq!(
            err,
            MapError::NotUnderRoot {
                path: r"D:\Movies2\Alien\Alien.mkv".to_string(),
                root: r"D:\Movies".to_string(),
            }
        );
    }

    #[test]
    fn test_path_equal_to_root_maps_to_local_root() {
        let local = map(r"D:\TV", r"D:\TV", Path::new("/data/tv")).unwrap();
        assert_eq!(local, PathBuf::from("/data/tv"));
    }

    #[test]
    fn test_show_root_directory() {
        let local = map(r"D:\TV\Show X", r"D:\TV", Path::new("/data/tv")).unwrap();
        assert_eq!(local, PathBuf::from("/data/tv/Show X"));
    }
}
