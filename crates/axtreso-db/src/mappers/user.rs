//! User entity <-> model mapper

use axtreso_core::entities::{Credential, User};
use axtreso_core::error::DomainError;
use axtreso_core::value_objects::Role;

use crate::models::UserModel;

use super::corrupt_column;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: Role = model
            .role
            .parse()
            .map_err(|e| corrupt_column("users", "role", e))?;

        let credential = match (model.login_method.as_str(), model.open_id, model.password_hash) {
            ("external", Some(open_id), _) => Credential::External { open_id },
            ("password", _, Some(password_hash)) => Credential::Password { password_hash },
            (method, ..) => {
                return Err(corrupt_column(
                    "users",
                    "login_method",
                    format!("{method} without its credential"),
                ))
            }
        };

        Ok(User {
            id: model.id,
            email: model.email,
            name: model.name,
            role,
            credential,
            last_signed_in: model.last_signed_in,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for a credential
pub struct CredentialColumns<'a> {
    pub login_method: &'static str,
    pub open_id: Option<&'a str>,
    pub password_hash: Option<&'a str>,
}

impl<'a> CredentialColumns<'a> {
    pub fn new(credential: &'a Credential) -> Self {
        Self {
            login_method: credential.login_method(),
            open_id: credential.open_id(),
            password_hash: credential.password_hash(),
        }
    }
}
