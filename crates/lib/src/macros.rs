/// Helper macro to build an input processor.
///
/// The closure receives a value parsed as the given type and maps it into the
/// output type. Errors raised by the closure are reported with the span of the
/// input that was consumed.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Turn(bool);
///
/// lib::from_input! {
///     |B(b): B| -> Turn {
///         Ok(match b {
///             b'L' => Turn(false),
///             b'R' => Turn(true),
///             b => bail!("bad turn {:?}", b as char),
///         })
///     }
/// }
///
/// let mut input = IStr::from_static(b"RX");
/// assert!(input.next::<Turn>().unwrap().0);
/// assert!(input.next::<Turn>().is_err());
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

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                #[allow(clippy::redundant_closure_call)]
                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(error) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(error)))
                    }
                }
            }
        }
    };
}
