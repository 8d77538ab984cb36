use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Comma-separated decimal components for the `--rgb-primary-color`
    /// custom property consumed by box-shadow/overlay styling.
    pub fn css_components(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Parses a `#rgb` or `#rrggbb` color, leading `#` optional. Shorthand
/// nibbles are duplicated (`a` -> `aa`) before parsing. Anything else
/// yields None, never a partial triple.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let shorthand = Regex::new(r"^#?([a-fA-F\d])([a-fA-F\d])([a-fA-F\d])$").unwrap();
    let expanded = shorthand
        .replace(hex, |caps: &regex::Captures| {
            format!(
                "{0}{0}{1}{1}{2}{2}",
                &caps[1], &caps[2], &caps[3]
            )
        })
        .into_owned();

    let full = Regex::new(r"^#?([a-fA-F\d]{2})([a-fA-F\d]{2})([a-fA-F\d]{2})$").unwrap();
    let caps = full.captures(&expanded)?;

    Some(Rgb {
        r: u8::from_str_radix(&caps[1], 16).ok()?,
        g: u8::from_str_radix(&caps[2], 16).ok()?,
        b: u8::from_str_radix(&caps[3], 16).ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expands_by_nibble_duplication() {
        assert_eq!(
            hex_to_rgb("#abc"),
            Some(Rgb {
                r: 170,
                g: 187,
                b: 204
            })
        );
        assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
    }

    #[test]
    fn test_six_digit_form() {
        assert_eq!(
            hex_to_rgb("#011248"),
            Some(Rgb {
                r: 1,
                g: 18,
                b: 72
            })
        );
        assert_eq!(
            hex_to_rgb("#fdb500"),
            Some(Rgb {
                r: 253,
                g: 181,
                b: 0
            })
        );
    }

    #[test]
    fn test_leading_hash_is_optional() {
        assert_eq!(hex_to_rgb("fdb500"), hex_to_rgb("#fdb500"));
        assert_eq!(hex_to_rgb("abc"), hex_to_rgb("#abc"));
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(hex_to_rgb("#ABC"), hex_to_rgb("#abc"));
        assert_eq!(hex_to_rgb("#FdB500"), hex_to_rgb("#fdb500"));
    }

    #[test]
    fn test_invalid_shapes_fail() {
        assert_eq!(hex_to_rgb("notacolor"), None);
        assert_eq!(hex_to_rgb("#12"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#ggg"), None);
    }

    #[test]
    fn test_css_components() {
        let rgb = hex_to_rgb("#abc").unwrap();
        assert_eq!(rgb.css_components(), "170, 187, 204");
    }
}
