//! Category slug derivation.

/// Derives a URL-safe slug from a category display name.
///
/// Lower-cases the name, drops everything outside `[a-z0-9\s-]`, turns
/// each whitespace run into a single `-` and collapses repeated hyphens.
/// The output is a fixed point: slugging a slug returns it unchanged.
///
/// ```
/// use interview_guide::catalog::slugify;
///
/// assert_eq!(
///     slugify("Retrieval-Augmented Generation (RAG)"),
///     "retrieval-augmented-generation-rag"
/// );
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        if is_separator_space(ch) {
            pending_space = true;
            continue;
        }
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            continue;
        }
        if pending_space {
            push_hyphen(&mut slug);
            pending_space = false;
        }
        if ch == '-' {
            push_hyphen(&mut slug);
        } else {
            slug.push(ch);
        }
    }

    // Trailing whitespace still becomes a hyphen.
    if pending_space {
        push_hyphen(&mut slug);
    }

    slug
}

/// Whitespace as ECMAScript `\s` defines it: Unicode `White_Space`
/// without NEL (U+0085), plus the byte order mark (U+FEFF).
fn is_separator_space(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}
