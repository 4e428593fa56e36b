mod scope;

pub use scope::{ApiErrorBody, ApiErrorObject, ScopeError};
