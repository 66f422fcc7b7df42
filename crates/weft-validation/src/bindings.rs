use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

/// Length of the canonical hyphenated UUID form (8-4-4-4-12)
const HYPHENATED_UUID_LEN: usize = 36;

/// Credential bindings payload was rejected
///
/// Carries no field-level detail. When the payload could not be decoded the
/// decoder error is kept as the source for server-side logs.
#[derive(Debug, Error)]
#[error("invalid credential bindings")]
pub struct InvalidCredentialBindings {
    #[source]
    source: Option<serde_json::Error>,
}

/// Validate a raw `credential_bindings` JSON fragment
///
/// Accepts an absent, empty, or `null` fragment as "no bindings". Otherwise
/// the fragment must be a JSON object whose values are all strings, each
/// either empty (binding cleared) or a canonical hyphenated UUID.
///
/// # Errors
///
/// Returns [`InvalidCredentialBindings`] if the fragment is malformed JSON,
/// is not an object, holds a non-string value, or holds a value that is
/// neither empty nor a UUID. Validation stops at the first offending value.
pub fn validate_credential_bindings(raw: Option<&[u8]>) -> Result<(), InvalidCredentialBindings> {
    let Some(raw) = raw.map(<[u8]>::trim_ascii).filter(|raw| !raw.is_empty()) else {
        return Ok(());
    };

    let bindings: Option<HashMap<String, String>> =
        serde_json::from_slice(raw).map_err(|e| InvalidCredentialBindings { source: Some(e) })?;

    let Some(bindings) = bindings else {
        return Ok(());
    };

    if bindings.values().all(|id| id.is_empty() || is_canonical_uuid(id)) {
        Ok(())
    } else {
        Err(InvalidCredentialBindings { source: None })
    }
}

fn is_canonical_uuid(value: &str) -> bool {
    // `Uuid::try_parse` also takes the simple, braced and URN forms; only
    // the hyphenated one has this length.
    value.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(value).is_ok()
}
