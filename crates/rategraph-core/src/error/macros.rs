//! Error macros for rategraph

/// Return early with a validation error
#[macro_export]
macro_rules! bail_validation {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::validation(format!($($arg)*)))
    };
}

/// Return early with a domain error
#[macro_export]
macro_rules! bail_domain {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::domain(format!($($arg)*)))
    };
}
