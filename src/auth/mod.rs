//! Authentication Module
//!
//! Password hashing, bearer token issue/verification, and the extractor that
//! resolves the calling user for protected routes.

mod extractor;
mod password;
mod token;

pub use extractor::{bearer_token, AuthUser};
pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, Claims};
