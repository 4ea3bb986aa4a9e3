/// Helper macro to build an input processor.
///
/// The closure receives the value parsed as the declared type and converts it
/// into the output type. Errors raised in the closure rewind the input and are
/// reported with the span of everything the inner value consumed.
///
/// ```ignore
/// struct Report {
///     levels: Vec<i64>,
/// }
///
/// lib::from_input! {
///     |levels: Vec<i64>| -> Report {
///         ensure!(levels.len() > 1, "too short");
///         Ok(Report { levels })
///     }
/// }
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::boxed(span, e))
                    }
                }
            }
        }
    };
}

/// Generate a `main` function which runs a solver over a puzzle input.
///
/// The solver is called with the input loaded from `inputs/<input>` inside of
/// the calling package, and must return a pair of answers. Parse errors are
/// reported with the path and position they were raised at. If `expect` is
/// specified, the answers are compared against it before being printed.
///
/// ```ignore
/// fn solve(input: IStr) -> Result<(u64, i64)> {
///     /* .. */
/// }
///
/// lib::entry!(solve, input = "d01.txt", expect = (11, 31));
/// ```
#[macro_export]
macro_rules! entry {
    ($solve:ident, input = $input:literal $(, expect = $expect:expr)? $(,)?) => {
        fn main() -> $crate::prelude::Result<()> {
            $crate::cli::init()?;

            let (input, path) = $crate::input!($input);
            let start = ::std::time::Instant::now();

            let value = match $solve(input) {
                Ok(value) => value,
                Err(error) => return Err($crate::cli::error_context(path, input, error)),
            };

            $crate::cli::solved(path, start.elapsed());
            $($crate::cli::check(&value, &$expect)?;)?
            $crate::cli::emit(&value)
        }
    };
}
