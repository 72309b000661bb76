use alloc::boxed::Box;

use vc_utils::TypeIdMap;

use crate::Reflect;
use crate::error::ParseFailure;
use crate::info::{TypeInfo, Typed};
use crate::parse::{Parser, default_scalar_parsers};

// -----------------------------------------------------------------------------
// ParserEntry

/// A registered parser together with the type it produces.
#[derive(Clone, Debug)]
pub struct ParserEntry {
    type_info: &'static TypeInfo,
    parser: Parser,
}

impl ParserEntry {
    #[inline]
    pub const fn new(type_info: &'static TypeInfo, parser: Parser) -> Self {
        Self { type_info, parser }
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }
}

// -----------------------------------------------------------------------------
// ParserRegistry

/// Parsers keyed by the type they produce.
///
/// Resolution for a requested type first looks for an exact entry. If there is
/// none, the first entry in registration order whose type can stand in for the
/// requested one wins, see [`TypeInfo::is_assignable_from`].
///
/// # Examples
///
/// ```
/// use vc_props::parse::{Parser, ParserRegistry};
/// use vc_props::info::Typed;
///
/// let mut registry = ParserRegistry::with_defaults();
/// assert!(registry.can_parse(i32::type_info()));
///
/// // Override the default: accept hexadecimal.
/// registry.register_type::<u32>(Parser::typed(|text: &str| {
///     u32::from_str_radix(text.trim_start_matches("0x"), 16).map_err(|err| {
///         vc_props::error::ParseFailure::Malformed {
///             type_path: "u32",
///             text: text.into(),
///             reason: err.to_string(),
///         }
///     })
/// }));
///
/// let value = registry.parse(u32::type_info(), "0xff").unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&255));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParserRegistry {
    parsers: TypeIdMap<ParserEntry>,
}

impl ParserRegistry {
    /// Creates a registry from an initial mapping, which may be empty.
    #[inline]
    pub fn new(parsers: TypeIdMap<ParserEntry>) -> Self {
        Self { parsers }
    }

    /// Creates a registry with [`default_scalar_parsers`].
    #[inline]
    pub fn with_defaults() -> Self {
        Self::new(default_scalar_parsers())
    }

    /// Add or replace the parser of a type.
    ///
    /// A replaced entry keeps its position for fallback resolution.
    pub fn register(&mut self, type_info: &'static TypeInfo, parser: Parser) {
        debug_trace!("register parser for `{}`", type_info.type_path());
        self.parsers
            .insert(type_info.type_id(), ParserEntry::new(type_info, parser));
    }

    /// Add or replace the parser of `T`.
    #[inline]
    pub fn register_type<T: Typed>(&mut self, parser: Parser) {
        self.register(T::type_info(), parser);
    }

    /// Find the parser for the requested type.
    pub fn resolve(&self, type_info: &TypeInfo) -> Option<&ParserEntry> {
        if let Some(entry) = self.parsers.get(&type_info.type_id()) {
            return Some(entry);
        }

        let fallback = self
            .parsers
            .values()
            .find(|entry| type_info.is_assignable_from(entry.type_info));
        if let Some(entry) = fallback {
            debug_trace!(
                "parse `{}` with the parser of `{}`",
                type_info.type_path(),
                entry.type_info.type_path(),
            );
        }
        fallback
    }

    #[inline]
    pub fn can_parse(&self, type_info: &TypeInfo) -> bool {
        self.resolve(type_info).is_some()
    }

    /// Parse `text` as the requested type.
    pub fn try_parse(
        &self,
        type_info: &TypeInfo,
        text: &str,
    ) -> Result<Box<dyn Reflect>, ParseFailure> {
        let entry = self.resolve(type_info).ok_or(ParseFailure::NoParser {
            type_path: type_info.type_path(),
        })?;
        entry.parser.parse(text)
    }

    /// Like [`try_parse`](Self::try_parse), but only reports whether it worked.
    pub fn parse(&self, type_info: &TypeInfo, text: &str) -> Option<Box<dyn Reflect>> {
        self.try_parse(type_info, text)
            .inspect_err(|err| debug_trace!("{err}"))
            .ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Iterate over the entries in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ParserEntry> {
        self.parsers.values()
    }
}
