//! Create-payload validation for adverts.
//!
//! [`validate_create`] turns a loosely-typed [`CreateAdvert`] request body
//! into a [`NewAdvert`] ready for insertion, or reports every failing field
//! in a fixed order (title, description, owner).

use serde::Deserialize;
use validator::Validate;

use crate::error::{CoreError, FieldError};

pub const ENTITY: &str = "advert";

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_OWNER: &str = "owner";

/// Column bound of `adverts.title`.
pub const TITLE_MAX_LEN: u64 = 64;
/// Column bound of `adverts.owner`.
pub const OWNER_MAX_LEN: u64 = 128;
/// Column bound of `adverts.description`.
pub const DESCRIPTION_COLUMN_MAX_LEN: u64 = 256;
/// Accepted description length. Stricter than the column bound; kept as
/// shipped until product decides which limit is intended.
pub const DESCRIPTION_MAX_LEN: u64 = 8;

const MSG_REQUIRED: &str = "field required";

/// Raw `POST /advert/` body. Every field is optional so that a missing key
/// is reported as a field error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAdvert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

/// A validated advert, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAdvert {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    #[validate(length(min = 1, max = OWNER_MAX_LEN))]
    pub owner: String,
}

impl NewAdvert {
    fn rule_message(&self, field: &str) -> String {
        match field {
            FIELD_TITLE if self.title.is_empty() => "title can not be empty".to_string(),
            FIELD_TITLE => format!("title must be at most {TITLE_MAX_LEN} characters"),
            FIELD_DESCRIPTION => {
                format!("description must be at most {DESCRIPTION_MAX_LEN} characters")
            }
            FIELD_OWNER if self.owner.is_empty() => "owner can not be empty".to_string(),
            _ => format!("owner must be at most {OWNER_MAX_LEN} characters"),
        }
    }
}

/// Validate a create payload.
///
/// Lengths are counted in characters. A missing field is reported once as
/// `field required` and is not checked further.
pub fn validate_create(payload: CreateAdvert) -> Result<NewAdvert, CoreError> {
    let missing = [
        (FIELD_TITLE, payload.title.is_none()),
        (FIELD_DESCRIPTION, payload.description.is_none()),
        (FIELD_OWNER, payload.owner.is_none()),
    ];

    let advert = NewAdvert {
        title: payload.title.unwrap_or_default(),
        description: payload.description.unwrap_or_default(),
        owner: payload.owner.unwrap_or_default(),
    };

    let rule_errors = advert.validate().err();

    let errors: Vec<FieldError> = missing
        .into_iter()
        .filter_map(|(field, is_missing)| {
            if is_missing {
                return Some(FieldError::new(field, MSG_REQUIRED));
            }
            let failed = rule_errors
                .as_ref()
                .is_some_and(|errs| errs.field_errors().contains_key(field));
            failed.then(|| FieldError::new(field, advert.rule_message(field)))
        })
        .collect();

    if errors.is_empty() {
        Ok(advert)
    } else {
        Err(CoreError::Validation(errors))
    }
}
