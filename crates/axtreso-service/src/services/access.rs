//! Role and ownership checks
//!
//! The policy is a pure function over the caller and the salon lookup, so the
//! whole authorization matrix is testable without a store.

use axtreso_core::entities::{Salon, User};
use axtreso_core::{DomainError, Role};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authenticated caller of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub role: Role,
}

impl Actor {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Fail unless the caller is an administrator
    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(DomainError::AdminRequired)
        }
    }

    /// Fail unless the caller is a salon manager
    pub fn require_manager(&self) -> Result<(), DomainError> {
        if self.role.is_manager() {
            Ok(())
        } else {
            Err(DomainError::ManagerRequired)
        }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}

/// What a caller wants to do with a salon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalonAccess {
    /// Read salon data: the owning manager or any administrator
    Read,
    /// Change salon-owned data: the owning manager only
    ManageOwn,
    /// Platform operations: administrators only
    Administer,
}

/// Decide whether `actor` may perform `access` on salon `salon_id`
///
/// `salon` is the result of looking the id up. A manager gets the same
/// forbidden answer for a foreign salon and for a missing one; an
/// administrator gets not found for a missing salon.
pub fn authorize_salon(
    actor: Actor,
    access: SalonAccess,
    salon_id: i64,
    salon: Option<&Salon>,
) -> Result<(), DomainError> {
    let owned = salon.is_some_and(|s| s.is_managed_by(actor.user_id));

    match (access, actor.role) {
        (SalonAccess::Read | SalonAccess::ManageOwn, Role::Manager) => {
            if owned {
                Ok(())
            } else {
                Err(DomainError::NotSalonOwner)
            }
        }
        (SalonAccess::Read | SalonAccess::Administer, Role::Admin) => salon
            .map(|_| ())
            .ok_or(DomainError::SalonNotFound(salon_id)),
        (SalonAccess::Administer, _) => Err(DomainError::AdminRequired),
        (SalonAccess::Read | SalonAccess::ManageOwn, _) => Err(DomainError::ManagerRequired),
    }
}

/// Load a salon and authorize the caller against it
#[instrument(skip(ctx))]
pub(crate) async fn salon_for(
    ctx: &ServiceContext,
    actor: Actor,
    access: SalonAccess,
    salon_id: i64,
) -> ServiceResult<Salon> {
    // Role-only denials never touch the store
    match (access, actor.role) {
        (SalonAccess::Administer, Role::Manager | Role::User) => {
            return Err(DomainError::AdminRequired.into())
        }
        (SalonAccess::ManageOwn, Role::Admin | Role::User) | (SalonAccess::Read, Role::User) => {
            return Err(DomainError::ManagerRequired.into())
        }
        _ => {}
    }

    let salon = ctx.salon_repo().find_by_id(salon_id).await?;
    authorize_salon(actor, access, salon_id, salon.as_ref())?;
    salon.ok_or_else(|| DomainError::SalonNotFound(salon_id).into())
}
