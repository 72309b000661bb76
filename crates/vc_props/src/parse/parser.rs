use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use core::fmt;
use core::str::FromStr;

use crate::Reflect;
use crate::error::ParseFailure;
use crate::info::Typed;

type ParseFn = dyn Fn(&str) -> Result<Box<dyn Reflect>, ParseFailure> + Send + Sync;

/// A function converting text into a value.
///
/// Cloning is cheap, clones share the same function.
///
/// # Examples
///
/// ```
/// use vc_props::parse::Parser;
///
/// let parser = Parser::via_from_str::<u16>();
///
/// let value = parser.parse("42").unwrap();
/// assert_eq!(value.downcast_ref::<u16>(), Some(&42));
/// assert!(parser.parse("-1").is_err());
/// ```
#[derive(Clone)]
pub struct Parser(Arc<ParseFn>);

impl Parser {
    /// Wrap a function producing boxed values.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> Result<Box<dyn Reflect>, ParseFailure> + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Wrap a function producing values of type `T`.
    pub fn typed<T, F>(func: F) -> Self
    where
        T: Reflect,
        F: Fn(&str) -> Result<T, ParseFailure> + Send + Sync + 'static,
    {
        Self::new(move |text| func(text).map(|value| Box::new(value) as Box<dyn Reflect>))
    }

    /// A parser based on the [`FromStr`] implementation of `T`.
    ///
    /// The text is used as is, without trimming.
    pub fn via_from_str<T>() -> Self
    where
        T: Typed + Reflect + FromStr,
        T::Err: fmt::Display,
    {
        Self::typed(|text: &str| {
            text.parse::<T>().map_err(|err| ParseFailure::Malformed {
                type_path: T::type_info().type_path(),
                text: text.to_string(),
                reason: err.to_string(),
            })
        })
    }

    /// Parse `text` into a value.
    #[inline]
    pub fn parse(&self, text: &str) -> Result<Box<dyn Reflect>, ParseFailure> {
        (self.0)(text)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser(..)")
    }
}
