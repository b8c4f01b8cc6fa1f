//! Path parsing primitive shared by both taxonomy passes.
//!
//! Document ids are forward-slash delimited regardless of host platform.
//! The optional file extension on the final segment is ignorable for
//! identity: `notes/setup` and `notes/setup.md` address the same logical
//! location. Normalization lives here so every classification rule sees
//! already-normalized directory/basename pairs.

/// Path segment separator. Ids never use the platform separator.
pub const SEP: char = '/';

/// A document id split into directory and extensionless basename.
///
/// `dir` carries no trailing separator; the root directory is the empty
/// string, distinct from any named segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub dir: &'a str,
    pub name: &'a str,
}

impl ParsedPath<'_> {
    /// Rejoin into the extensionless form of the original id.
    pub fn extensionless(&self) -> String {
        join(self.dir, self.name)
    }
}

/// Split an id into `{ dir, name }`, stripping the extension from the
/// final segment.
///
/// The extension starts at the last `.` of the final segment, unless that
/// dot is the segment's first character (`.hidden` has no extension).
///
/// # Examples
/// ```
/// use wikitree::core::path::parse;
/// let p = parse("guides/setup.md");
/// assert_eq!(p.dir, "guides");
/// assert_eq!(p.name, "setup");
/// assert_eq!(parse("setup").dir, "");
/// ```
pub fn parse(id: &str) -> ParsedPath<'_> {
    let (dir, file) = match id.rfind(SEP) {
        Some(idx) => (&id[..idx], &id[idx + 1..]),
        None => ("", id),
    };
    ParsedPath {
        dir,
        name: strip_extension(file),
    }
}

/// Join a directory and a basename; an empty directory means root.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}{SEP}{name}")
    }
}

/// Extensionless form of a full id, used at every comparison boundary.
pub fn extensionless(id: &str) -> String {
    parse(id).extensionless()
}

/// Strip the optional extension from a single path segment.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_level() {
        let p = parse("current");
        assert_eq!(p.dir, "");
        assert_eq!(p.name, "current");
        assert_eq!(p.extensionless(), "current");
    }

    #[test]
    fn test_parse_nested() {
        let p = parse("some/dir/current");
        assert_eq!(p.dir, "some/dir");
        assert_eq!(p.name, "current");
        assert_eq!(p.extensionless(), "some/dir/current");
    }

    #[test]
    fn test_parse_strips_extension() {
        let p = parse("some/dir/current.md");
        assert_eq!(p.dir, "some/dir");
        assert_eq!(p.name, "current");
    }

    #[test]
    fn test_extension_is_last_dot() {
        // Anything after the last dot is the extension, whatever it is.
        assert_eq!(parse("child/level2.1").name, "level2");
        assert_eq!(parse("a.b.c").name, "a.b");
    }

    #[test]
    fn test_leading_dot_is_not_extension() {
        assert_eq!(parse(".hidden").name, ".hidden");
        assert_eq!(parse("dir/.hidden").name, ".hidden");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(parse("foo.").name, "foo");
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "current"), "current");
        assert_eq!(join("some/dir", "current"), "some/dir/current");
    }

    #[test]
    fn test_extensionless() {
        assert_eq!(extensionless("guides/setup.md"), "guides/setup");
        assert_eq!(extensionless("guides/setup"), "guides/setup");
        assert_eq!(extensionless("setup.md"), "setup");
    }

    #[test]
    fn test_extensionless_identity() {
        // The normalization that makes `foo` and `foo.md` the same location.
        assert_eq!(extensionless("foo"), extensionless("foo.md"));
        assert_eq!(extensionless("a/b/foo.mdx"), extensionless("a/b/foo.md"));
    }
}
