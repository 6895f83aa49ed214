use crate::{Adler32, Adler32Hash};

macro_rules! impl_slice_like {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Adler32Hash for $ty {
                fn hash(&self) -> u32 {
                    let mut adler = Adler32::new();
                    adler.write(self.as_ref());
                    adler.finish()
                }
            }
        )*
    };
}

impl_slice_like!([u8], &[u8], str, &str);

#[cfg(feature = "std")]
impl_slice_like!(Vec<u8>, String);

#[cfg(feature = "const-generics")]
impl<const N: usize> Adler32Hash for [u8; N] {
    fn hash(&self) -> u32 {
        let mut adler = Adler32::new();
        adler.write(self);
        adler.finish()
    }
}
