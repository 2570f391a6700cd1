//! Validation engine: input/payload types and the `validate` entry point

use super::errors::FieldErrors;
use super::rules;
use serde::Serialize;
use std::path::PathBuf;

/// Metadata for the avatar file picked in the form
///
/// Only metadata is carried here; the binary content is read at upload
/// time by the submission path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarFile {
    #[serde(skip)]
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl AvatarFile {
    /// Resolve a path typed into the form to file metadata
    ///
    /// Returns `None` for an empty path, a missing file, or a directory;
    /// the engine then reports the avatar as missing.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let path = PathBuf::from(path);
        let metadata = std::fs::metadata(&path).ok()?;
        if !metadata.is_file() {
            return None;
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())?;
        Some(Self {
            path,
            file_name,
            size: metadata.len(),
        })
    }
}

/// Raw tech entry as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechInput {
    pub title: String,
    /// Raw text; coerced to a number by the engine
    pub knowledge: String,
}

/// Raw form snapshot handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub avatar: Option<AvatarFile>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechInput>,
}

/// A validated tech entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tech {
    pub title: String,
    pub knowledge: u32,
}

/// Normalized payload produced when every rule passes
///
/// `name` is capitalized, `knowledge` values are numeric, and the tech
/// list is guaranteed to have at least two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedSignup {
    pub avatar: AvatarFile,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<Tech>,
}

/// Run every field's rules over the input
///
/// Fields are validated independently so the caller can display every
/// error at once; within one field the first failing rule decides the
/// message. Pure apart from the metadata already captured in the input.
pub fn validate(input: &SignupInput) -> Result<ValidatedSignup, FieldErrors> {
    let mut errors = FieldErrors::default();

    let avatar = match rules::require_avatar(input.avatar.as_ref()) {
        Ok(file) => match rules::check_avatar_size(file) {
            Ok(()) => Some(file.clone()),
            Err(msg) => {
                errors.push("avatar", msg);
                None
            }
        },
        Err(msg) => {
            errors.push("avatar", msg);
            None
        }
    };

    let name = match rules::require_name(&input.name) {
        Ok(()) => Some(rules::capitalize_words(&input.name)),
        Err(msg) => {
            errors.push("name", msg);
            None
        }
    };

    if let Err(msg) = rules::require_email(&input.email)
        .and_then(|()| rules::check_email_format(&input.email))
        .and_then(|()| rules::check_email_domain(&input.email))
    {
        errors.push("email", msg);
    }

    if let Err(msg) = rules::check_password(&input.password) {
        errors.push("password", msg);
    }

    let mut techs = Vec::with_capacity(input.techs.len());
    for (index, tech) in input.techs.iter().enumerate() {
        let title_ok = match rules::require_tech_title(&tech.title) {
            Ok(()) => true,
            Err(msg) => {
                errors.push(format!("techs[{index}].title"), msg);
                false
            }
        };
        match rules::coerce_knowledge(&tech.knowledge) {
            Ok(knowledge) if title_ok => techs.push(Tech {
                title: tech.title.clone(),
                knowledge,
            }),
            Ok(_) => {}
            Err(msg) => errors.push(format!("techs[{index}].knowledge"), msg),
        }
    }
    if let Err(msg) = rules::check_tech_count(input.techs.len()) {
        errors.push("techs", msg);
    }

    // An empty error set implies every per-field value was produced.
    if let (Some(avatar), Some(name), true) = (avatar, name, errors.is_empty()) {
        Ok(ValidatedSignup {
            avatar,
            name,
            email: input.email.clone(),
            password: input.password.clone(),
            techs,
        })
    } else {
        Err(errors)
    }
}
