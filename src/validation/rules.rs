//! Individual schema rules
//!
//! Each rule is one independent check returning `Ok` (possibly with a
//! normalized value) or the message to show under the field. The engine
//! in `schema` decides which rules run for which field and aggregates
//! the failures.

use super::schema::AvatarFile;
use validator::ValidateEmail;

/// Maximum accepted avatar size (5 MiB)
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum number of tech entries
pub const MIN_TECH_ENTRIES: usize = 2;

/// Inclusive knowledge range
pub const KNOWLEDGE_MIN: u32 = 1;
pub const KNOWLEDGE_MAX: u32 = 100;

/// Accepted email domain suffix
pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";

pub const MSG_AVATAR_REQUIRED: &str = "O avatar é obrigatório!";
pub const MSG_AVATAR_TOO_LARGE: &str = "Arquivo até no máximo 5MB";
pub const MSG_NAME_REQUIRED: &str = "O nome é obrigátorio!";
pub const MSG_EMAIL_REQUIRED: &str = "O e-mail é obrigátorio!";
pub const MSG_EMAIL_FORMAT: &str = "Formato inválido!";
pub const MSG_EMAIL_NOT_GMAIL: &str = "O e-mail precisa ser da gmail";
pub const MSG_PASSWORD_TOO_SHORT: &str = "A senha precisa ter no mínimo 6 caracteres";
pub const MSG_TECH_TITLE_REQUIRED: &str = "O título é obrigatório!";
pub const MSG_KNOWLEDGE_MIN: &str = "O mínimo é 1";
pub const MSG_KNOWLEDGE_MAX: &str = "O máximo é 100";
pub const MSG_TECHS_MIN: &str = "Insira pelo menos 2 tecnologias";

/// Avatar must be present
pub fn require_avatar(avatar: Option<&AvatarFile>) -> Result<&AvatarFile, &'static str> {
    avatar.ok_or(MSG_AVATAR_REQUIRED)
}

/// Avatar must not exceed [`MAX_AVATAR_BYTES`]
pub fn check_avatar_size(file: &AvatarFile) -> Result<(), &'static str> {
    if file.size <= MAX_AVATAR_BYTES {
        Ok(())
    } else {
        Err(MSG_AVATAR_TOO_LARGE)
    }
}

/// Name must be non-empty after trimming
pub fn require_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        Err(MSG_NAME_REQUIRED)
    } else {
        Ok(())
    }
}

/// Uppercase the first character of each word, keep the rest unchanged,
/// rejoin with single spaces
pub fn capitalize_words(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Email must be non-empty
pub fn require_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        Err(MSG_EMAIL_REQUIRED)
    } else {
        Ok(())
    }
}

/// Email must have standard syntax
pub fn check_email_format(email: &str) -> Result<(), &'static str> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(MSG_EMAIL_FORMAT)
    }
}

/// Email must end with [`REQUIRED_EMAIL_SUFFIX`]
pub fn check_email_domain(email: &str) -> Result<(), &'static str> {
    if email.ends_with(REQUIRED_EMAIL_SUFFIX) {
        Ok(())
    } else {
        Err(MSG_EMAIL_NOT_GMAIL)
    }
}

/// Password must have at least [`MIN_PASSWORD_LEN`] characters
pub fn check_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Err(MSG_PASSWORD_TOO_SHORT)
    } else {
        Ok(())
    }
}

/// Tech title must be non-empty
pub fn require_tech_title(title: &str) -> Result<(), &'static str> {
    if title.is_empty() {
        Err(MSG_TECH_TITLE_REQUIRED)
    } else {
        Ok(())
    }
}

/// Parse the raw knowledge text and check the inclusive [1, 100] range
///
/// An unparseable value falls through to the minimum check and is
/// reported with the minimum-bound message.
pub fn coerce_knowledge(raw: &str) -> Result<u32, &'static str> {
    let value: u64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return Err(MSG_KNOWLEDGE_MIN),
    };
    if value < u64::from(KNOWLEDGE_MIN) {
        Err(MSG_KNOWLEDGE_MIN)
    } else if value > u64::from(KNOWLEDGE_MAX) {
        Err(MSG_KNOWLEDGE_MAX)
    } else {
        Ok(value as u32)
    }
}

/// The tech list must have at least [`MIN_TECH_ENTRIES`] entries
pub fn check_tech_count(len: usize) -> Result<(), &'static str> {
    if len < MIN_TECH_ENTRIES {
        Err(MSG_TECHS_MIN)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod capitalize {
        use super::*;

        #[test]
        fn test_capitalizes_each_word() {
            assert_eq!(capitalize_words("john henry"), "John Henry");
        }

        #[test]
        fn test_idempotent_on_capitalized_input() {
            let once = capitalize_words("igor abreu");
            assert_eq!(capitalize_words(&once), once);
        }

        #[test]
        fn test_collapses_whitespace() {
            assert_eq!(capitalize_words("  ana   maria "), "Ana Maria");
        }

        #[test]
        fn test_keeps_remainder_unchanged() {
            assert_eq!(capitalize_words("mcDonald"), "McDonald");
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(capitalize_words(""), "");
        }
    }

    mod knowledge {
        use super::*;

        #[test]
        fn test_inclusive_boundaries() {
            assert_eq!(coerce_knowledge("1"), Ok(1));
            assert_eq!(coerce_knowledge("100"), Ok(100));
        }

        #[test]
        fn test_below_minimum() {
            assert_eq!(coerce_knowledge("0"), Err(MSG_KNOWLEDGE_MIN));
        }

        #[test]
        fn test_above_maximum() {
            assert_eq!(coerce_knowledge("101"), Err(MSG_KNOWLEDGE_MAX));
        }

        #[test]
        fn test_unparseable_reported_as_minimum() {
            assert_eq!(coerce_knowledge(""), Err(MSG_KNOWLEDGE_MIN));
            assert_eq!(coerce_knowledge("abc"), Err(MSG_KNOWLEDGE_MIN));
        }

        #[test]
        fn test_huge_number_fails_maximum() {
            assert_eq!(coerce_knowledge("99999"), Err(MSG_KNOWLEDGE_MAX));
        }

        #[test]
        fn test_surrounding_whitespace_accepted() {
            assert_eq!(coerce_knowledge(" 80 "), Ok(80));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_format_accepts_plain_address() {
            assert!(check_email_format("igor@gmail.com").is_ok());
        }

        #[test]
        fn test_format_rejects_missing_domain() {
            assert_eq!(check_email_format("igor@"), Err(MSG_EMAIL_FORMAT));
        }

        #[test]
        fn test_domain_rule() {
            assert_eq!(check_email_domain("a@yahoo.com"), Err(MSG_EMAIL_NOT_GMAIL));
            assert!(check_email_domain("a@gmail.com").is_ok());
        }
    }

    #[test]
    fn test_password_boundary() {
        assert_eq!(check_password("12345"), Err(MSG_PASSWORD_TOO_SHORT));
        assert!(check_password("123456").is_ok());
    }

    #[test]
    fn test_name_requires_non_whitespace() {
        assert_eq!(require_name("   "), Err(MSG_NAME_REQUIRED));
        assert!(require_name("igor").is_ok());
    }
}
