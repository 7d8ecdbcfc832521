/// A named predicate over a candidate password, with the message shown to the
/// user when the predicate fails.
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl Rule {
    pub fn passes(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// The fixed rule set, evaluated in declaration order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "length-min",
        message: "Password must be at least 10 characters long",
        check: min_length,
    },
    Rule {
        id: "length-max",
        message: "Password must be at most 24 characters long",
        check: max_length,
    },
    Rule {
        id: "no-spaces",
        message: "Password cannot contain spaces",
        check: no_spaces,
    },
    Rule {
        id: "has-number",
        message: "Password must contain at least one number",
        check: has_digit,
    },
    Rule {
        id: "has-uppercase",
        message: "Password must contain at least one uppercase letter",
        check: has_uppercase,
    },
    Rule {
        id: "has-lowercase",
        message: "Password must contain at least one lowercase letter",
        check: has_lowercase,
    },
];

fn min_length(password: &str) -> bool {
    password.chars().count() >= 10
}

fn max_length(password: &str) -> bool {
    password.chars().count() <= 24
}

fn no_spaces(password: &str) -> bool {
    !password.contains(' ')
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// The rules the password currently violates, in declaration order.
///
/// An empty password reports no violations so that nothing is rendered before
/// the user starts typing, it is still not a valid password.
pub fn failed_rules(password: &str) -> Vec<&'static Rule> {
    if password.is_empty() {
        return Vec::new();
    }
    RULES.iter().filter(|rule| !rule.passes(password)).collect()
}

pub fn is_valid(password: &str) -> bool {
    !password.is_empty() && RULES.iter().all(|rule| rule.passes(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_ids(password: &str) -> Vec<&'static str> {
        failed_rules(password).iter().map(|r| r.id).collect()
    }

    #[test]
    fn valid_password_has_no_violations() {
        assert_eq!(failed_ids("Abcdefg123"), Vec::<&str>::new());
        assert!(is_valid("Abcdefg123"));
    }

    #[test]
    fn empty_password_has_no_violations_but_is_not_valid() {
        assert_eq!(failed_ids(""), Vec::<&str>::new());
        assert!(!is_valid(""));
    }

    #[test]
    fn violations_preserve_declaration_order() {
        assert_eq!(
            failed_ids("abc"),
            vec!["length-min", "has-number", "has-uppercase"]
        );
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(is_valid("Abcdefg123")); // 10 chars
        assert!(is_valid("Abcdefg123Abcdefg123Abcd")); // 24 chars
        assert_eq!(failed_ids("Abcdefg12"), vec!["length-min"]); // 9 chars
        assert_eq!(
            failed_ids("Abcdefg123Abcdefg123Abcde"), // 25 chars
            vec!["length-max"]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 10 characters, more than 10 bytes.
        assert!(is_valid("Pässwörd12"));
    }

    #[test]
    fn spaces_are_rejected() {
        assert_eq!(failed_ids("Abcdef 123"), vec!["no-spaces"]);
    }

    #[test]
    fn missing_character_classes_are_reported() {
        assert_eq!(failed_ids("Abcdefghij"), vec!["has-number"]);
        assert_eq!(failed_ids("abcdefg123"), vec!["has-uppercase"]);
        assert_eq!(failed_ids("ABCDEFG123"), vec!["has-lowercase"]);
    }
}
