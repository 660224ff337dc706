//! Property naming: camel-case identifiers ↔ hyphenated CSS names.

/// Convert a camel-case property identifier to its CSS name.
///
/// `borderTop` → `border-top`, `minWidth` → `min-width`, `opacity` → `opacity`.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a hyphenated CSS name to its camel-case identifier.
///
/// `margin-left` → `marginLeft`.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = !out.is_empty();
        } else if upper {
            out.push(ch.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_kebab_examples() {
        assert_eq!(camel_to_kebab("borderTop"), "border-top");
        assert_eq!(camel_to_kebab("paddingBottom"), "padding-bottom");
        assert_eq!(camel_to_kebab("width"), "width");
    }

    #[test]
    fn camel_to_kebab_leading_capital() {
        assert_eq!(camel_to_kebab("Width"), "width");
    }

    #[test]
    fn kebab_to_camel_examples() {
        assert_eq!(kebab_to_camel("margin-left"), "marginLeft");
        assert_eq!(kebab_to_camel("max-height"), "maxHeight");
        assert_eq!(kebab_to_camel("color"), "color");
    }

    #[test]
    fn names_round_trip() {
        for name in ["minWidth", "borderRight", "background", "marginTop"] {
            assert_eq!(kebab_to_camel(&camel_to_kebab(name)), name);
        }
    }
}
