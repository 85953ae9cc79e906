use arrayvec::ArrayString;

/// Compare a solver answer against its expected value.
///
/// This is looser than [PartialEq] so that an answer can be compared against
/// an untyped literal, like `expect = (11, 31)`.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

macro_rules! tuple {
    ($($a:ident $b:ident $n:tt),*) => {
        impl<$($a, $b,)*> OutputEq<($($b,)*)> for ($($a,)*)
        where
            $($a: OutputEq<$b>,)*
        {
            #[inline]
            fn output_eq(&self, other: &($($b,)*)) -> bool {
                true $(&& self.$n.output_eq(&other.$n))*
            }
        }
    };
}

tuple!(A0 B0 0, A1 B1 1);
tuple!(A0 B0 0, A1 B1 1, A2 B2 2);

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<const N: usize> OutputEq<&str> for ArrayString<N> {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl OutputEq<&str> for String {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

macro_rules! partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq<$ty> for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

partial_eq!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, bool, ());
