//! Custom assertion macros
//!
//! Provides assertion macros with more descriptive failure messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a JSON response body carries no session token
#[macro_export]
macro_rules! assert_no_token {
    ($body:expr) => {
        assert!(
            $body.get("token").is_none(),
            "Expected no token in response body, got: {}",
            $body
        );
    };
}
