/// Key-name normalization shared by the vnode utilities

/// Characters matched by a `\w` class: ASCII letters, digits, underscore
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convert kebab-case to camelCase
///
/// Every `-` immediately followed by a word character is dropped and that
/// character is upper-cased. Other dashes are kept as-is, so `foo--bar`
/// becomes `foo-Bar` and a trailing dash survives.
///
/// - `camelize("foo-bar")` → `"fooBar"`
/// - `camelize("active-color")` → `"activeColor"`
/// - `camelize("fooBar")` → `"fooBar"`
pub fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(&next)) if is_word_char(next) => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_kebab() {
        assert_eq!(camelize("foo-bar"), "fooBar");
        assert_eq!(camelize("active-color"), "activeColor");
        assert_eq!(camelize("a-b-c"), "aBC");
    }

    #[test]
    fn test_camelize_leaves_camel_case_alone() {
        assert_eq!(camelize("fooBar"), "fooBar");
        assert_eq!(camelize("value"), "value");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_camelize_odd_dashes() {
        assert_eq!(camelize("foo--bar"), "foo-Bar");
        assert_eq!(camelize("foo-"), "foo-");
        assert_eq!(camelize("-foo"), "Foo");
        assert_eq!(camelize("aria-1"), "aria1");
        assert_eq!(camelize("foo-_bar"), "foo_bar");
    }
}
