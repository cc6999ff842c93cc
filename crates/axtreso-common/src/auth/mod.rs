//! Authentication utilities

mod identity;
mod password;
mod session;

pub use identity::{IdentityClaims, IdentityTokens};
pub use password::{hash_password, validate_password_policy, verify_password, PasswordService};
pub use session::{SessionClaims, SessionTokens};
