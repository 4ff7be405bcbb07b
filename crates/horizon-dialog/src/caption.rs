//! Caption text derived from type and member names.

/// Turn an identifier into caption form.
///
/// The first letter is upper-cased, underscores become spaces and a space is
/// inserted where a lower-case letter or digit is followed by an upper-case
/// one.
///
/// ```
/// use horizon_dialog::caption::capitalize;
///
/// assert_eq!(capitalize("Foo"), "Foo");
/// assert_eq!(capitalize("firstName"), "First Name");
/// assert_eq!(capitalize("home_address"), "Home address");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut caption = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;

    for ch in name.chars() {
        if ch == '_' {
            if !caption.is_empty() && !caption.ends_with(' ') {
                caption.push(' ');
            }
            previous = Some(' ');
            continue;
        }

        let word_break = ch.is_uppercase()
            && previous.is_some_and(|prev| prev.is_lowercase() || prev.is_ascii_digit());

        if caption.is_empty() {
            caption.extend(ch.to_uppercase());
        } else {
            if word_break {
                caption.push(' ');
            }
            caption.push(ch);
        }
        previous = Some(ch);
    }

    caption.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_capitalized() {
        assert_eq!(capitalize("Foo"), "Foo");
        assert_eq!(capitalize("URL"), "URL");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(capitalize("personView"), "Person View");
        assert_eq!(capitalize("Address2Line"), "Address2 Line");
    }

    #[test]
    fn test_underscores() {
        assert_eq!(capitalize("_private_name_"), "Private name");
    }

    #[test]
    fn test_empty() {
        assert_eq!(capitalize(""), "");
    }
}
