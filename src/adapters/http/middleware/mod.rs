//! HTTP middleware and extractors.

mod identity;

pub use identity::{
    IdentityRejection, RequireSession, RequireUser, SESSION_ID_HEADER, USER_ID_HEADER,
};
