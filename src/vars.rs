/// A named numeric binding supplied at evaluation time.
///
/// Bindings are positional in one respect only: when the same name is
/// given twice, the later binding wins. Names may shadow the reserved
/// constants (`pi`, `e`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value: f64,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Numeric) -> Self {
        Variable {
            name: name.into(),
            value: value.widen(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Shorthand constructor for [`Variable`].
pub fn var(name: impl Into<String>, value: impl Numeric) -> Variable {
    Variable::new(name, value)
}

/// Types accepted as a variable's value. Every implementor widens to
/// `f64`; integers with magnitude above 2^53 lose precision on the way
/// in, same as writing the literal in a formula would.
pub trait Numeric {
    fn widen(self) -> f64;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);
