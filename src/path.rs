//! Path manipulation utilities for repoweave

/// Lexically canonicalize a slash-separated path.
///
/// Collapses repeated separators, resolves `.` and `..` elements without
/// touching the filesystem, and drops any trailing separator. A rooted path
/// stays rooted, a relative path stays relative, and the empty path
/// canonicalizes to `"."`. The result is a fixed point: cleaning it again
/// changes nothing.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let bytes = path.as_bytes();
    let n = bytes.len();

    let mut out = String::with_capacity(n);
    let mut r = 0;
    // Index in `out` below which `..` elements may not backtrack.
    let mut dotdot = 0;
    if rooted {
        out.push('/');
        r = 1;
        dotdot = 1;
    }

    while r < n {
        if bytes[r] == b'/' {
            // empty element
            r += 1;
        } else if bytes[r] == b'.' && (r + 1 == n || bytes[r + 1] == b'/') {
            // . element
            r += 1;
        } else if bytes[r] == b'.' && bytes[r + 1] == b'.' && (r + 2 == n || bytes[r + 2] == b'/') {
            // .. element: drop the previous element if there is one
            r += 2;
            if out.len() > dotdot {
                let mut w = out.len() - 1;
                while w > dotdot && out.as_bytes()[w] != b'/' {
                    w -= 1;
                }
                out.truncate(w);
            } else if !rooted {
                // nothing left to drop, keep the .. element
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str("..");
                dotdot = out.len();
            }
        } else {
            // real element
            if (rooted && out.len() != 1) || (!rooted && !out.is_empty()) {
                out.push('/');
            }
            let start = r;
            while r < n && bytes[r] != b'/' {
                r += 1;
            }
            out.push_str(&path[start..r]);
        }
    }

    if out.is_empty() {
        return ".".to_string();
    }
    out
}

/// Reduce a cleaned path to its tree-relative form.
///
/// Git filters address paths relative to the tree root, so the leading
/// separator is stripped and both the root (`"/"`) and the current directory
/// (`"."`) reduce to the empty string, meaning "the whole tree".
pub fn tree_rel(cleaned: &str) -> &str {
    let rel = cleaned.strip_prefix('/').unwrap_or(cleaned);
    if rel == "." {
        ""
    } else {
        rel
    }
}
