//! Submission orchestration: validate, upload, echo
//!
//! Purely sequential: validation failures never reach the network, and
//! an upload failure leaves the form untouched so the user can resubmit.

use crate::storage::StorageClientTrait;
use crate::validation::{self, FieldErrors, SignupInput, ValidatedSignup};
use anyhow::Context;
use thiserror::Error;

/// Why a submission did not complete
///
/// The two variants are deliberately distinct: validation errors are
/// shown inline and the form stays editable, while an upload failure
/// preserves the form for a manual resubmit.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("upload failed: {0}")]
    Upload(#[source] anyhow::Error),
}

/// Validate the input and upload the avatar
///
/// Upload key is the avatar's file name. Returns the normalized payload
/// for the caller to echo and reset the form with.
pub async fn submit<C: StorageClientTrait>(
    storage: &mut C,
    bucket: &str,
    input: SignupInput,
) -> Result<ValidatedSignup, SubmitError> {
    let payload = validation::validate(&input).map_err(SubmitError::Validation)?;

    let content = tokio::fs::read(&payload.avatar.path)
        .await
        .with_context(|| format!("reading avatar {}", payload.avatar.path.display()))
        .map_err(SubmitError::Upload)?;

    tracing::info!(
        key = %payload.avatar.file_name,
        bytes = content.len(),
        "uploading avatar"
    );
    storage
        .upload(bucket, &payload.avatar.file_name, content)
        .await
        .map_err(SubmitError::Upload)?;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorageClientTrait;
    use crate::validation::TechInput;
    use std::path::Path;

    fn tech(title: &str, knowledge: &str) -> TechInput {
        TechInput {
            title: title.to_string(),
            knowledge: knowledge.to_string(),
        }
    }

    /// Write a temp avatar of `size` bytes and build a matching input
    fn input_with_avatar(dir: &Path, size: usize) -> SignupInput {
        let path = dir.join("igor.png");
        std::fs::write(&path, vec![0u8; size]).unwrap();
        SignupInput {
            avatar: crate::validation::AvatarFile::from_path(path.to_str().unwrap()),
            name: "igor abreu".to_string(),
            email: "igor@gmail.com".to_string(),
            password: "123456".to_string(),
            techs: vec![tech("TS", "80"), tech("Go", "60")],
        }
    }

    #[tokio::test]
    async fn test_successful_submit_uploads_with_file_name_key() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_with_avatar(dir.path(), 4 * 1024 * 1024);

        let mut storage = MockStorageClientTrait::new();
        storage
            .expect_upload()
            .withf(|bucket, key, content| {
                bucket == "forms-react" && key == "igor.png" && content.len() == 4 * 1024 * 1024
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let payload = submit(&mut storage, "forms-react", input).await.unwrap();
        assert_eq!(payload.name, "Igor Abreu");

        let echoed = serde_json::to_string_pretty(&payload).unwrap();
        assert!(echoed.contains("\"name\": \"Igor Abreu\""));
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_network_call() {
        let input = SignupInput {
            avatar: None,
            name: String::new(),
            email: "a@yahoo.com".to_string(),
            password: "123".to_string(),
            techs: vec![],
        };

        let mut storage = MockStorageClientTrait::new();
        storage.expect_upload().times(0);

        match submit(&mut storage, "forms-react", input).await {
            Err(SubmitError::Validation(errors)) => {
                assert!(errors.get("avatar").is_some());
                assert!(errors.get("techs").is_some());
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_failure_is_distinct_from_validation() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_with_avatar(dir.path(), 1024);

        let mut storage = MockStorageClientTrait::new();
        storage
            .expect_upload()
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("bucket unavailable")));

        match submit(&mut storage, "forms-react", input).await {
            Err(SubmitError::Upload(err)) => {
                assert!(format!("{err:#}").contains("bucket unavailable"));
            }
            other => panic!("expected upload failure, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_avatar_surfaces_as_upload_error() {
        // Metadata resolved before the file disappears
        let dir = tempfile::tempdir().unwrap();
        let mut input = input_with_avatar(dir.path(), 1024);
        if let Some(avatar) = input.avatar.as_mut() {
            std::fs::remove_file(&avatar.path).unwrap();
        }

        let mut storage = MockStorageClientTrait::new();
        storage.expect_upload().times(0);

        let result = tokio_test::block_on(submit(&mut storage, "forms-react", input));
        assert!(matches!(result, Err(SubmitError::Upload(_))));
    }
}
