use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use vc_utils::TypeIdMap;

use crate::Reflect;
use crate::error::ParseFailure;
use crate::info::Typed;
use crate::parse::{Parser, ParserEntry};

/// Parsers for the built-in scalar types.
///
/// Rules:
/// - `String`: the text itself.
/// - `f64`, `f32`: decimal text, surrounding whitespace is ignored.
/// - Integers: decimal text, no whitespace allowed.
/// - `char`: exactly one character.
/// - `bool`: `true` in any letter case is `true`, any other text is `false`.
///
/// Entries are ordered so that fallback resolution tries `String` first,
/// then floats before integers.
///
/// # Examples
///
/// ```
/// use vc_props::parse::default_scalar_parsers;
///
/// let parsers = default_scalar_parsers();
/// let entry = parsers.get_type::<bool>().unwrap();
///
/// let yes = entry.parser().parse("TRUE").unwrap();
/// let no = entry.parser().parse("yes").unwrap();
/// assert_eq!(yes.downcast_ref::<bool>(), Some(&true));
/// assert_eq!(no.downcast_ref::<bool>(), Some(&false));
/// ```
pub fn default_scalar_parsers() -> TypeIdMap<ParserEntry> {
    let mut parsers = TypeIdMap::with_capacity(15);

    insert::<String>(&mut parsers, Parser::typed(|text| Ok(String::from(text))));
    insert::<f64>(&mut parsers, float_parser::<f64>());
    insert::<f32>(&mut parsers, float_parser::<f32>());
    insert::<i64>(&mut parsers, Parser::via_from_str::<i64>());
    insert::<char>(&mut parsers, Parser::typed(parse_char));
    insert::<i32>(&mut parsers, Parser::via_from_str::<i32>());
    insert::<i16>(&mut parsers, Parser::via_from_str::<i16>());
    insert::<i8>(&mut parsers, Parser::via_from_str::<i8>());
    insert::<bool>(
        &mut parsers,
        Parser::typed(|text| Ok(text.eq_ignore_ascii_case("true"))),
    );
    insert::<u64>(&mut parsers, Parser::via_from_str::<u64>());
    insert::<u32>(&mut parsers, Parser::via_from_str::<u32>());
    insert::<u16>(&mut parsers, Parser::via_from_str::<u16>());
    insert::<u8>(&mut parsers, Parser::via_from_str::<u8>());
    insert::<usize>(&mut parsers, Parser::via_from_str::<usize>());
    insert::<isize>(&mut parsers, Parser::via_from_str::<isize>());

    parsers
}

fn insert<T: Typed>(parsers: &mut TypeIdMap<ParserEntry>, parser: Parser) {
    parsers.insert_type::<T>(ParserEntry::new(T::type_info(), parser));
}

fn float_parser<T>() -> Parser
where
    T: Typed + Reflect + FromStr,
    T::Err: fmt::Display,
{
    Parser::typed(|text: &str| {
        text.trim().parse::<T>().map_err(|err| ParseFailure::Malformed {
            type_path: T::type_info().type_path(),
            text: text.to_string(),
            reason: err.to_string(),
        })
    })
}

fn parse_char(text: &str) -> Result<char, ParseFailure> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseFailure::Malformed {
            type_path: "char",
            text: text.to_string(),
            reason: String::from("expected exactly one character"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::default_scalar_parsers;
    use crate::error::ParseFailure;

    fn parse<T: core::any::Any + Clone>(text: &str) -> Option<T> {
        let parsers = default_scalar_parsers();
        let value = parsers.get_type::<T>()?.parser().parse(text).ok()?;
        value.downcast_ref::<T>().cloned()
    }

    #[test]
    fn floats_are_trimmed() {
        assert_eq!(parse::<f64>(" 1.5\t"), Some(1.5));
        assert_eq!(parse::<f32>("-2"), Some(-2.0));
        assert_eq!(parse::<f64>("one"), None);
    }

    #[test]
    fn integers_are_strict() {
        assert_eq!(parse::<i32>("-17"), Some(-17));
        assert_eq!(parse::<i32>(" 17"), None);
        assert_eq!(parse::<i8>("300"), None);
        assert_eq!(parse::<u8>("255"), Some(255));
        assert_eq!(parse::<u32>("-1"), None);
    }

    #[test]
    fn chars_need_one_character() {
        assert_eq!(parse::<char>("x"), Some('x'));
        assert_eq!(parse::<char>("é"), Some('é'));
        assert_eq!(parse::<char>(""), None);
        assert_eq!(parse::<char>("xy"), None);
    }

    #[test]
    fn strings_and_bools() {
        assert_eq!(parse::<String>("  as is "), Some(String::from("  as is ")));
        assert_eq!(parse::<bool>("True"), Some(true));
        assert_eq!(parse::<bool>("1"), Some(false));
    }

    #[test]
    fn malformed_text_is_reported() {
        let parsers = default_scalar_parsers();
        let err = parsers
            .get_type::<i64>()
            .unwrap()
            .parser()
            .parse("12a")
            .unwrap_err();
        assert!(matches!(err, ParseFailure::Malformed { type_path: "i64", .. }));
    }
}
