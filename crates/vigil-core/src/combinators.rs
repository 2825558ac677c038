use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::error::AppError;

/// Boxed future produced by one [`safe_compose`] step.
pub type StepFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + 'a>>;

/// A single fallible async step in a [`safe_compose`] chain.
pub type Step<'a, T> = Box<dyn Fn(T) -> StepFuture<'a, T> + 'a>;

/// Collapse a fallible result to a single type by applying `handler` to the
/// error branch.
///
/// # Examples
///
/// ```
/// use vigil_core::{handle_error, AppError};
///
/// let ok: Result<i32, AppError> = Ok(7);
/// assert_eq!(handle_error(ok, |_| 0), 7);
///
/// let err: Result<i32, AppError> = Err(AppError::File("gone".into()));
/// assert_eq!(handle_error(err, |_| 0), 0);
/// ```
pub fn handle_error<T>(result: Result<T, AppError>, handler: impl FnOnce(AppError) -> T) -> T {
    match result {
        Ok(value) => value,
        Err(error) => handler(error),
    }
}

/// Transform the error of an `Err`, passing an `Ok` through untouched.
pub fn map_error<T>(
    result: Result<T, AppError>,
    mapper: impl FnOnce(AppError) -> AppError,
) -> Result<T, AppError> {
    result.map_err(mapper)
}

/// Run a fallible operation whose error type is opaque, tagging any failure
/// as a file error.
///
/// All failures come out as `AppError::File` with an `"Operation failed:"`
/// message regardless of the actual cause. That looseness is part of the
/// wrapper's contract; callers needing a precise kind convert at the call
/// site instead.
///
/// # Examples
///
/// ```
/// use vigil_core::safe_operation;
///
/// let parsed = safe_operation(|| "42".parse::<u32>());
/// assert_eq!(parsed, Ok(42));
///
/// let failed = safe_operation(|| "nope".parse::<u32>());
/// assert_eq!(failed.unwrap_err().kind(), "FileError");
/// ```
pub fn safe_operation<T, E: fmt::Display>(
    operation: impl FnOnce() -> Result<T, E>,
) -> Result<T, AppError> {
    operation().map_err(|e| AppError::File(format!("Operation failed: {e}")))
}

/// Replace an `Err` with a fallback value.
pub fn recover_with<T>(result: Result<T, AppError>, fallback: T) -> Result<T, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(_) => Ok(fallback),
    }
}

/// Await `operation` up to `max_attempts` times, returning the first
/// success.
///
/// Attempts run strictly sequentially with no delay between them. When every
/// attempt fails, the error from the final attempt is returned.
pub async fn retry<T, F, Fut>(max_attempts: usize, mut operation: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut last_error = None;
    for _ in 0..max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => last_error = Some(error),
        }
    }
    Err(last_error
        .unwrap_or_else(|| AppError::Validation("retry requires at least one attempt".into())))
}

/// Discard the error branch, keeping only the success value.
pub fn to_option<T>(result: Result<T, AppError>) -> Option<T> {
    result.ok()
}

/// Rebuild a fallible result from an option, using `message` as the
/// validation error for the empty case.
///
/// # Examples
///
/// ```
/// use vigil_core::{from_option, AppError};
///
/// assert_eq!(from_option(Some(1), "missing"), Ok(1));
/// assert_eq!(
///     from_option(None::<i32>, "missing"),
///     Err(AppError::Validation("missing".into()))
/// );
/// ```
pub fn from_option<T>(option: Option<T>, message: &str) -> Result<T, AppError> {
    option.ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Thread one value through a sequence of fallible async steps.
///
/// Each step receives the previous step's success value. The chain stops at
/// the first `Err` and later steps are never invoked.
pub async fn safe_compose<T>(input: T, steps: &[Step<'_, T>]) -> Result<T, AppError> {
    let mut current = input;
    for step in steps {
        current = step(current).await?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn handle_error_applies_handler_on_failure() {
        let err: Result<String, AppError> = Err(AppError::Ai("down".into()));
        let value = handle_error(err, |e| format!("fallback after {}", e.kind()));
        assert_eq!(value, "fallback after AIError");
    }

    #[test]
    fn map_error_leaves_success_alone() {
        let ok: Result<i32, AppError> = Ok(3);
        assert_eq!(map_error(ok, |_| AppError::Network("x".into())), Ok(3));

        let err: Result<i32, AppError> = Err(AppError::File("gone".into()));
        let mapped = map_error(err, |e| AppError::Network(e.message().to_string()));
        assert_eq!(mapped, Err(AppError::Network("gone".into())));
    }

    #[test]
    fn safe_operation_tags_every_failure_as_file_error() {
        let result = safe_operation(|| "not a number".parse::<i64>());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), "FileError");
        assert!(err.message().starts_with("Operation failed: "));
    }

    #[test]
    fn recover_with_substitutes_fallback() {
        let err: Result<i32, AppError> = Err(AppError::File("gone".into()));
        assert_eq!(recover_with(err, 9), Ok(9));
        assert_eq!(recover_with(Ok(1), 9), Ok(1));
    }

    #[tokio::test]
    async fn retry_returns_first_success() {
        let calls = Cell::new(0u32);
        let result = retry(3, || {
            let attempt = calls.get() + 1;
            calls.set(attempt);
            async move {
                if attempt < 3 {
                    Err(AppError::Ai("transient".into()))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result, Ok(3));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn retry_returns_final_error_when_all_attempts_fail() {
        let calls = Cell::new(0u32);
        let result: Result<(), AppError> = retry(2, || {
            let attempt = calls.get() + 1;
            calls.set(attempt);
            async move { Err(AppError::Ai(format!("attempt {attempt}"))) }
        })
        .await;
        assert_eq!(result, Err(AppError::Ai("attempt 2".into())));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn retry_with_zero_attempts_is_an_error() {
        let result: Result<(), AppError> = retry(0, || async { Ok(()) }).await;
        assert!(result.is_err());
    }

    #[test]
    fn option_round_trip() {
        assert_eq!(to_option::<i32>(Ok(5)), Some(5));
        assert_eq!(to_option::<i32>(Err(AppError::File("x".into()))), None);
        assert_eq!(from_option(Some("a"), "empty"), Ok("a"));
        assert_eq!(
            from_option(None::<&str>, "empty"),
            Err(AppError::Validation("empty".into()))
        );
    }

    #[tokio::test]
    async fn compose_threads_value_through_steps() {
        let steps: Vec<Step<'_, i32>> = vec![
            Box::new(|n| Box::pin(async move { Ok(n + 1) })),
            Box::new(|n| Box::pin(async move { Ok(n * 10) })),
        ];
        assert_eq!(safe_compose(2, &steps).await, Ok(30));
    }

    #[tokio::test]
    async fn compose_short_circuits_on_first_failure() {
        let third_ran = Cell::new(false);
        let steps: Vec<Step<'_, i32>> = vec![
            Box::new(|n| Box::pin(async move { Ok(n + 1) })),
            Box::new(|_| Box::pin(async move { Err(AppError::Validation("stop".into())) })),
            Box::new(|n| {
                third_ran.set(true);
                Box::pin(async move { Ok(n) })
            }),
        ];
        let result = safe_compose(1, &steps).await;
        assert_eq!(result, Err(AppError::Validation("stop".into())));
        assert!(!third_ran.get(), "steps after a failure must not run");
    }

    #[tokio::test]
    async fn compose_with_no_steps_returns_input() {
        let steps: Vec<Step<'_, i32>> = Vec::new();
        assert_eq!(safe_compose(42, &steps).await, Ok(42));
    }
}
