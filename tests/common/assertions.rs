//! Domain-specific assertion macros for food-review harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! request or which review broke the expectation.

/// Assert the status of a `TestResponse`, printing the body on failure.
///
/// ```rust
/// assert_status!(response, StatusCode::BAD_REQUEST);
/// ```
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        let expected: axum::http::StatusCode = $status;
        if response.status != expected {
            panic!(
                "assert_status! failed:\n  expected: {}\n  actual:   {}\n  body:     {:?}",
                expected, response.status, response.body
            );
        }
    }};
}

/// Assert status and exact body text of a `TestResponse`.
#[macro_export]
macro_rules! assert_text {
    ($response:expr, $status:expr, $body:expr) => {{
        let response = &$response;
        $crate::assert_status!(response, $status);
        pretty_assertions::assert_eq!(response.body, $body);
    }};
}

/// Assert that every review in a slice contains `keyword` in its content.
///
/// ```rust
/// assert_all_contain!(hits, "foie gras");
/// ```
#[macro_export]
macro_rules! assert_all_contain {
    ($reviews:expr, $keyword:expr) => {{
        let reviews: &[review_core::Review] = &$reviews;
        let keyword: &str = $keyword;
        for review in reviews {
            if !review.content.contains(keyword) {
                panic!(
                    "assert_all_contain! failed: review {} does not contain {:?}\n  content: {:?}",
                    review.id, keyword, review.content
                );
            }
        }
    }};
}

/// Assert the `ErrorKind` of a failed service call.
///
/// ```rust
/// assert_kind!(svc.fetch_by_id("abc").await, ErrorKind::InvalidId);
/// ```
#[macro_export]
macro_rules! assert_kind {
    ($result:expr, $kind:expr) => {{
        match $result {
            Ok(value) => panic!(
                "assert_kind! failed: expected {:?}, got Ok({:?})",
                $kind, value
            ),
            Err(err) => {
                let actual: review_core::ErrorKind = err.kind();
                if actual != $kind {
                    panic!(
                        "assert_kind! failed:\n  expected: {:?}\n  actual:   {:?}\n  error:    {}",
                        $kind, actual, err
                    );
                }
            }
        }
    }};
}
