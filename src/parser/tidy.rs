/// Trim every string leaf in place, recursing through collections.
pub trait Tidy {
    fn tidy(&mut self);
}

impl Tidy for String {
    fn tidy(&mut self) {
        let trimmed = self.trim();
        if trimmed.len() != self.len() {
            *self = trimmed.to_string();
        }
    }
}

impl<T: Tidy> Tidy for Option<T> {
    fn tidy(&mut self) {
        if let Some(inner) = self {
            inner.tidy();
        }
    }
}

impl<T: Tidy> Tidy for Vec<T> {
    fn tidy(&mut self) {
        self.iter_mut().for_each(Tidy::tidy);
    }
}

macro_rules! leaf {
    ($($t:ty),*) => {
        $(impl Tidy for $t {
            fn tidy(&mut self) {}
        })*
    };
}

leaf!(bool, i64, f64);

/// `impl Tidy` for a struct by listing the fields to visit.
macro_rules! impl_tidy {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::parser::tidy::Tidy for $ty {
            fn tidy(&mut self) {
                $($crate::parser::tidy::Tidy::tidy(&mut self.$field);)*
            }
        }
    };
}

pub(crate) use impl_tidy;
