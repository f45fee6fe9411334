/// Helper to perform the try operation over an [`Outcome`] or a [`Result`],
/// returning early from the enclosing function with the failure converted
/// through [`From`].
///
/// The enclosing function must return an [`Outcome`].
///
/// ```
/// use outcome::{outcome_try, success, Outcome};
///
/// fn parse(input: &str) -> Outcome<u32, String> {
///     let value: u32 = outcome_try!(input.parse::<u32>().map_err(|e| e.to_string()));
///     success(value + 1)
/// }
///
/// fn twice(input: &str) -> Outcome<u32, String> {
///     let value = outcome_try!(parse(input));
///     success(value * 2)
/// }
///
/// assert_eq!(twice("20"), success(42));
/// assert!(twice("nope").is_failure());
/// ```
///
/// [`Outcome`]: crate::Outcome
#[macro_export]
macro_rules! outcome_try {
    ($expr:expr) => {
        match $crate::try_outcome($expr) {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}
