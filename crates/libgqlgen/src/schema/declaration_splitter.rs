const TOP_LEVEL_KEYWORDS: &[&str] = &[
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

/// Split schema text into its top-level declarations.
///
/// A new declaration starts at every top-level keyword (`type`, `input`,
/// `enum`, `union`, ...) that appears outside of any `{ }` block, `#` comment
/// or string. Any description string or comment that immediately precedes a
/// keyword stays attached to the end of the preceding declaration and is
/// stripped later by the grammar. Chunks made up solely of comments,
/// descriptions and whitespace are dropped.
pub fn split_declarations(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut boundaries = vec![0];
    let mut depth = 0usize;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'#' => {
                while idx < bytes.len() && bytes[idx] != b'\n' {
                    idx += 1;
                }
                continue;
            },

            b'"' => {
                idx = skip_string(bytes, idx);
                continue;
            },

            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),

            c if depth == 0 && is_name_start(c) => {
                let start = idx;
                while idx < bytes.len() && is_name_continue(bytes[idx]) {
                    idx += 1;
                }
                let preceded_by_name = start > 0
                    && is_name_continue(bytes[start - 1]);
                if !preceded_by_name
                    && start > 0
                    && TOP_LEVEL_KEYWORDS.contains(&&text[start..idx])
                    && !follows_extend(text, start) {
                    boundaries.push(start);
                }
                continue;
            },

            _ => (),
        }
        idx += 1;
    }
    boundaries.push(text.len());

    boundaries.windows(2)
        .map(|window| &text[window[0]..window[1]])
        .filter(|decl| !strip_trivia(decl).trim().is_empty())
        .collect()
}

/// Remove `#` comments and string literals (including `"""` descriptions)
/// from `text`. Each removed string is replaced by a single space.
pub(crate) fn strip_trivia(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    let mut kept_from = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'#' => {
                stripped.push_str(&text[kept_from..idx]);
                while idx < bytes.len() && bytes[idx] != b'\n' {
                    idx += 1;
                }
                kept_from = idx;
            },

            b'"' => {
                stripped.push_str(&text[kept_from..idx]);
                stripped.push(' ');
                idx = skip_string(bytes, idx);
                kept_from = idx;
            },

            _ => idx += 1,
        }
    }
    stripped.push_str(&text[kept_from..]);
    stripped
}

/// `extend type Foo` is one declaration, not two.
fn follows_extend(text: &str, keyword_start: usize) -> bool {
    text[..keyword_start].trim_end().ends_with("extend")
}

fn is_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_name_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Returns the index immediately after the string starting at `start`.
/// Handles both `"..."` and `"""..."""` strings.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut idx = start + 3;
        while idx < bytes.len() {
            if bytes[idx..].starts_with(b"\"\"\"")
                && bytes[idx - 1] != b'\\' {
                return idx + 3;
            }
            idx += 1;
        }
        return bytes.len();
    }

    let mut idx = start + 1;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' => idx += 2,
            b'"' | b'\n' => return idx + 1,
            _ => idx += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::split_declarations;
    use super::strip_trivia;

    #[test]
    fn splits_braced_and_union_declarations() {
        let decls = split_declarations(concat!(
            "type User implements Node { id: ID! friends: [User] }\n",
            "union SearchResult = User | Post\n",
            "enum Color { RED GREEN }\n",
            "input UserFilter { type: String }\n",
        ));

        let trimmed: Vec<_> = decls.iter().map(|d| d.trim()).collect();
        assert_eq!(trimmed, vec![
            "type User implements Node { id: ID! friends: [User] }",
            "union SearchResult = User | Post",
            "enum Color { RED GREEN }",
            "input UserFilter { type: String }",
        ]);
    }

    #[test]
    fn ignores_keywords_in_comments_strings_and_names() {
        let decls = split_declarations(concat!(
            "# type NotADecl\n",
            "\"\"\"A type of thing\"\"\"\n",
            "type Thing { subtype: String }\n",
            "extend type Thing { more: Int }\n",
        ));

        assert_eq!(decls.len(), 2);
        assert!(decls[0].contains("type Thing { subtype: String }"));
        assert_eq!(decls[1].trim(), "extend type Thing { more: Int }");
    }

    #[test]
    fn blank_text_yields_no_declarations() {
        assert!(split_declarations("  \n\t").is_empty());
        assert!(split_declarations("# just a comment\n\"desc\"").is_empty());
    }

    #[test]
    fn strip_trivia_removes_comments_and_strings() {
        assert_eq!(
            strip_trivia("a # note\nb \"x\\\"y\" c \"\"\"block\n\"\"\" d"),
            "a \nb   c   d",
        );
    }
}
