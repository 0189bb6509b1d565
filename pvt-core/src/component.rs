/// The core trait for defining components.
///
/// A `Component` takes an input and produces an output. Components should be
/// deterministic, always producing the same result for a given input, which
/// lets a pipeline be assembled from independently tested pieces connected
/// by plain data.
///
/// ## Implementing `Component`
///
/// Implement the [`call()`] method, which takes an input and returns either an
/// output or an error.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use pvt_core::Component;
///
/// struct Reciprocal;
///
/// impl Component for Reciprocal {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
///         Ok(1.0 / input)
///     }
/// }
///
/// assert_eq!(Reciprocal.call(4.0).unwrap(), 0.25);
/// ```
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
