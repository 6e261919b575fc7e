// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The universal semantic taxonomy: an 8-bit code space shared by every
//! language adapter.
//!
//! A code is laid out as `[ss kk tt ll]`, two bits each: `ss` selects one of
//! four super-kinds, `kk` one of four kinds within that super-kind, `tt` one
//! of four super-types within that kind, and `ll` is left for adapters to
//! use as a refinement (see [`Refinement`]). The layout is fixed at build
//! time; the name table below is the only part that is "data".

use crate::error::CoreError;

/// Bit 0 of the node flags byte: the node is a semantic construct rather
/// than punctuation, a delimiter, or other pure syntax.
pub const IS_CONSTRUCT: u8 = 0b0000_0001;
/// Bit 1 of the node flags byte: the node carries an implementation body
/// (a function with a block, a class with members, and so on).
pub const IS_EMBODIED: u8 = 0b0000_0010;

/// Is `IS_CONSTRUCT` set on this flags byte?
#[must_use]
pub const fn is_construct(flags: u8) -> bool {
    flags & IS_CONSTRUCT != 0
}

/// Is `IS_EMBODIED` set on this flags byte?
#[must_use]
pub const fn is_embodied(flags: u8) -> bool {
    flags & IS_EMBODIED != 0
}

/// Alias for [`is_embodied`], exposed under the name a SQL host's scalar
/// UDF surface uses.
#[must_use]
pub const fn has_body(flags: u8) -> bool {
    is_embodied(flags)
}

/// The four super-kinds, occupying bits 7-6 of a semantic type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SuperKind {
    DataStructure = 0,
    Computation = 1,
    ControlEffects = 2,
    MetaExternal = 3,
}

impl SuperKind {
    const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::DataStructure,
            1 => Self::Computation,
            2 => Self::ControlEffects,
            _ => Self::MetaExternal,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DataStructure => "DATA_STRUCTURE",
            Self::Computation => "COMPUTATION",
            Self::ControlEffects => "CONTROL_EFFECTS",
            Self::MetaExternal => "META_EXTERNAL",
        }
    }
}

/// The sixteen kinds (four per super-kind), occupying bits 5-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Kind {
    // DATA_STRUCTURE
    Definition = 0b00_00,
    Literal = 0b00_01,
    Type = 0b00_10,
    Collection = 0b00_11,
    // COMPUTATION
    Expression = 0b01_00,
    Call = 0b01_01,
    Operator = 0b01_10,
    Identifier = 0b01_11,
    // CONTROL_EFFECTS
    Flow = 0b10_00,
    Exception = 0b10_01,
    Concurrency = 0b10_10,
    Block = 0b10_11,
    // META_EXTERNAL
    Import = 0b11_00,
    Annotation = 0b11_01,
    Comment = 0b11_10,
    Parser = 0b11_11,
}

impl Kind {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b1111 {
            0b00_00 => Self::Definition,
            0b00_01 => Self::Literal,
            0b00_10 => Self::Type,
            0b00_11 => Self::Collection,
            0b01_00 => Self::Expression,
            0b01_01 => Self::Call,
            0b01_10 => Self::Operator,
            0b01_11 => Self::Identifier,
            0b10_00 => Self::Flow,
            0b10_01 => Self::Exception,
            0b10_10 => Self::Concurrency,
            0b10_11 => Self::Block,
            0b11_00 => Self::Import,
            0b11_01 => Self::Annotation,
            0b11_10 => Self::Comment,
            _ => Self::Parser,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Definition => "DEFINITION",
            Self::Literal => "LITERAL",
            Self::Type => "TYPE",
            Self::Collection => "COLLECTION",
            Self::Expression => "EXPRESSION",
            Self::Call => "CALL",
            Self::Operator => "OPERATOR",
            Self::Identifier => "IDENTIFIER",
            Self::Flow => "FLOW",
            Self::Exception => "EXCEPTION",
            Self::Concurrency => "CONCURRENCY",
            Self::Block => "BLOCK",
            Self::Import => "IMPORT",
            Self::Annotation => "ANNOTATION",
            Self::Comment => "COMMENT",
            Self::Parser => "PARSER",
        }
    }

    const fn super_type_names(self) -> [&'static str; 4] {
        match self {
            Self::Definition => ["FUNCTION", "CLASS", "VARIABLE", "MODULE"],
            Self::Literal => ["NUMBER", "STRING", "BOOLEAN", "OTHER"],
            Self::Type => ["PRIMITIVE", "COMPOSITE", "REFERENCE", "GENERIC"],
            Self::Collection => ["ARRAY", "OBJECT", "TUPLE", "SET"],
            Self::Expression => ["BINARY", "UNARY", "ASSIGNMENT", "OTHER"],
            Self::Call => ["FUNCTION", "METHOD", "CONSTRUCTOR", "MACRO"],
            Self::Operator => ["ARITHMETIC", "LOGICAL", "COMPARISON", "BITWISE"],
            Self::Identifier => ["NAME", "PROPERTY", "QUALIFIED", "LABEL"],
            Self::Flow => ["CONDITIONAL", "LOOP", "JUMP", "SWITCH"],
            Self::Exception => ["TRY", "THROW", "CATCH", "FINALLY"],
            Self::Concurrency => ["ASYNC", "SPAWN", "CHANNEL", "LOCK"],
            Self::Block => ["SCOPE", "STATEMENT", "PROGRAM", "EMPTY"],
            Self::Import => ["MODULE", "NAMED", "EXPORT", "NAMESPACE"],
            Self::Annotation => ["DECORATOR", "ATTRIBUTE", "DIRECTIVE", "PRAGMA"],
            Self::Comment => ["LINE", "BLOCK", "DOC", "SHEBANG"],
            Self::Parser => ["SYNTAX", "ERROR", "MISSING", "EXTRA"],
        }
    }
}

const fn code(ss: u8, kk: u8, tt: u8) -> u8 {
    (ss << 6) | (kk << 4) | (tt << 2)
}

macro_rules! categories {
    ($($name:ident = $ss:expr, $kk:expr, $tt:expr;)*) => {
        $(pub const $name: u8 = code($ss, $kk, $tt);)*
    };
}

#[rustfmt::skip]
categories! {
    DEFINITION_FUNCTION = 0, 0b00, 0b00;
    DEFINITION_CLASS    = 0, 0b00, 0b01;
    DEFINITION_VARIABLE = 0, 0b00, 0b10;
    DEFINITION_MODULE   = 0, 0b00, 0b11;

    LITERAL_NUMBER  = 0, 0b01, 0b00;
    LITERAL_STRING  = 0, 0b01, 0b01;
    LITERAL_BOOLEAN = 0, 0b01, 0b10;
    LITERAL_OTHER   = 0, 0b01, 0b11;

    TYPE_PRIMITIVE = 0, 0b10, 0b00;
    TYPE_COMPOSITE = 0, 0b10, 0b01;
    TYPE_REFERENCE = 0, 0b10, 0b10;
    TYPE_GENERIC   = 0, 0b10, 0b11;

    COLLECTION_ARRAY  = 0, 0b11, 0b00;
    COLLECTION_OBJECT = 0, 0b11, 0b01;
    COLLECTION_TUPLE  = 0, 0b11, 0b10;
    COLLECTION_SET    = 0, 0b11, 0b11;

    EXPRESSION_BINARY     = 1, 0b00, 0b00;
    EXPRESSION_UNARY      = 1, 0b00, 0b01;
    EXPRESSION_ASSIGNMENT = 1, 0b00, 0b10;
    EXPRESSION_OTHER      = 1, 0b00, 0b11;

    CALL_FUNCTION    = 1, 0b01, 0b00;
    CALL_METHOD      = 1, 0b01, 0b01;
    CALL_CONSTRUCTOR = 1, 0b01, 0b10;
    CALL_MACRO       = 1, 0b01, 0b11;

    OPERATOR_ARITHMETIC = 1, 0b10, 0b00;
    OPERATOR_LOGICAL    = 1, 0b10, 0b01;
    OPERATOR_COMPARISON = 1, 0b10, 0b10;
    OPERATOR_BITWISE    = 1, 0b10, 0b11;

    IDENTIFIER_NAME      = 1, 0b11, 0b00;
    IDENTIFIER_PROPERTY  = 1, 0b11, 0b01;
    IDENTIFIER_QUALIFIED = 1, 0b11, 0b10;
    IDENTIFIER_LABEL     = 1, 0b11, 0b11;

    FLOW_CONDITIONAL = 2, 0b00, 0b00;
    FLOW_LOOP        = 2, 0b00, 0b01;
    FLOW_JUMP        = 2, 0b00, 0b10;
    FLOW_SWITCH      = 2, 0b00, 0b11;

    EXCEPTION_TRY     = 2, 0b01, 0b00;
    EXCEPTION_THROW   = 2, 0b01, 0b01;
    EXCEPTION_CATCH   = 2, 0b01, 0b10;
    EXCEPTION_FINALLY = 2, 0b01, 0b11;

    CONCURRENCY_ASYNC   = 2, 0b10, 0b00;
    CONCURRENCY_SPAWN   = 2, 0b10, 0b01;
    CONCURRENCY_CHANNEL = 2, 0b10, 0b10;
    CONCURRENCY_LOCK    = 2, 0b10, 0b11;

    BLOCK_SCOPE     = 2, 0b11, 0b00;
    BLOCK_STATEMENT = 2, 0b11, 0b01;
    BLOCK_PROGRAM   = 2, 0b11, 0b10;
    BLOCK_EMPTY     = 2, 0b11, 0b11;

    IMPORT_MODULE    = 3, 0b00, 0b00;
    IMPORT_NAMED     = 3, 0b00, 0b01;
    IMPORT_EXPORT    = 3, 0b00, 0b10;
    IMPORT_NAMESPACE = 3, 0b00, 0b11;

    ANNOTATION_DECORATOR = 3, 0b01, 0b00;
    ANNOTATION_ATTRIBUTE = 3, 0b01, 0b01;
    ANNOTATION_DIRECTIVE = 3, 0b01, 0b10;
    ANNOTATION_PRAGMA    = 3, 0b01, 0b11;

    COMMENT_LINE    = 3, 0b10, 0b00;
    COMMENT_BLOCK   = 3, 0b10, 0b01;
    COMMENT_DOC     = 3, 0b10, 0b10;
    COMMENT_SHEBANG = 3, 0b10, 0b11;

    PARSER_SYNTAX  = 3, 0b11, 0b00;
    PARSER_ERROR   = 3, 0b11, 0b01;
    PARSER_MISSING = 3, 0b11, 0b10;
    PARSER_EXTRA   = 3, 0b11, 0b11;
}

/// Look up a category's byte code by its canonical name (e.g.
/// `"DEFINITION_FUNCTION"`).
pub fn code_of(name: &str) -> Result<u8, CoreError> {
    for ss in 0..4u8 {
        for kk in 0..4u8 {
            let kind = Kind::from_bits((ss << 2) | kk);
            let kind_name = kind.name();
            for (tt, sup) in kind.super_type_names().iter().enumerate() {
                if name.eq_ignore_ascii_case(&format!("{kind_name}_{sup}")) {
                    return Ok(code(ss, kk, tt as u8));
                }
            }
        }
    }
    Err(CoreError::UnknownCategory(name.to_owned()))
}

/// Human-readable name for a semantic type byte, ignoring refinement bits.
/// Never fails: codes with no defined meaning print as `UNKNOWN_<hex>` so a
/// projection can always surface a string.
#[must_use]
pub fn name_of(byte: u8) -> String {
    let ss = byte >> 6;
    let kk = (byte >> 4) & 0b11;
    let tt = (byte >> 2) & 0b11;
    let kind = Kind::from_bits((ss << 2) | kk);
    let sup = kind.super_type_names()[tt as usize];
    format!("{}_{}", kind.name(), sup)
}

/// The super-kind of a semantic type byte.
#[must_use]
pub const fn super_kind_of(byte: u8) -> SuperKind {
    SuperKind::from_bits(byte >> 6)
}

/// The kind of a semantic type byte.
#[must_use]
pub const fn kind_of(byte: u8) -> Kind {
    Kind::from_bits(byte >> 4)
}

/// Refinement bits (`ll`, the low two bits of the byte) reused per category
/// to distinguish sub-variants that don't warrant their own code, e.g.
/// `Function::REGULAR/LAMBDA/CONSTRUCTOR/ASYNC` under `DEFINITION_FUNCTION`.
pub trait Refinement: Sized {
    fn from_bits(bits: u8) -> Self;
    fn bits(self) -> u8;
}

macro_rules! refinement {
    ($name:ident { $($variant:ident = $bits:expr),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant = $bits,)*
        }

        impl Refinement for $name {
            fn from_bits(bits: u8) -> Self {
                match bits & 0b11 {
                    $($bits => Self::$variant,)*
                    _ => unreachable!("refinement bits are masked to 2 bits"),
                }
            }
            fn bits(self) -> u8 {
                self as u8
            }
        }
    };
}

refinement!(Function { Regular = 0, Lambda = 1, Constructor = 2, Async = 3 });
refinement!(Jump { Return = 0, Break = 1, Continue = 2, Goto = 3 });
refinement!(Import { Plain = 0, Named = 1, Wildcard = 2, Aliased = 3 });

/// Apply a refinement to a bare category code (clearing then setting `ll`).
#[must_use]
pub const fn refine(byte: u8, refinement_bits: u8) -> u8 {
    (byte & 0b1111_1100) | (refinement_bits & 0b11)
}

#[must_use]
pub fn function_refinement(byte: u8) -> Function {
    Function::from_bits(byte)
}

#[must_use]
pub fn jump_refinement(byte: u8) -> Jump {
    Jump::from_bits(byte)
}

const fn base(byte: u8) -> u8 {
    byte & 0b1111_1100
}

#[must_use]
pub const fn is_definition(byte: u8) -> bool {
    byte >> 4 == (DEFINITION_FUNCTION >> 4)
}

#[must_use]
pub const fn is_call(byte: u8) -> bool {
    byte >> 4 == (CALL_FUNCTION >> 4)
}

#[must_use]
pub const fn is_control_flow(byte: u8) -> bool {
    byte >> 4 == (FLOW_CONDITIONAL >> 4)
}

#[must_use]
pub const fn is_identifier(byte: u8) -> bool {
    byte >> 4 == (IDENTIFIER_NAME >> 4)
}

#[must_use]
pub const fn is_literal(byte: u8) -> bool {
    byte >> 4 == (LITERAL_NUMBER >> 4)
}

#[must_use]
pub const fn is_comment(byte: u8) -> bool {
    byte >> 4 == (COMMENT_LINE >> 4)
}

#[must_use]
pub const fn is_import(byte: u8) -> bool {
    byte >> 4 == (IMPORT_MODULE >> 4)
}

#[must_use]
pub const fn is_conditional(byte: u8) -> bool {
    base(byte) == FLOW_CONDITIONAL
}

#[must_use]
pub const fn is_loop(byte: u8) -> bool {
    base(byte) == FLOW_LOOP
}

#[must_use]
pub const fn is_jump(byte: u8) -> bool {
    base(byte) == FLOW_JUMP
}

#[must_use]
pub const fn is_function_definition(byte: u8) -> bool {
    base(byte) == DEFINITION_FUNCTION
}

#[must_use]
pub const fn is_class_definition(byte: u8) -> bool {
    base(byte) == DEFINITION_CLASS
}

#[must_use]
pub const fn is_variable_definition(byte: u8) -> bool {
    base(byte) == DEFINITION_VARIABLE
}

#[must_use]
pub const fn is_string_literal(byte: u8) -> bool {
    base(byte) == LITERAL_STRING
}

#[must_use]
pub const fn is_number_literal(byte: u8) -> bool {
    base(byte) == LITERAL_NUMBER
}

#[must_use]
pub const fn is_boolean_literal(byte: u8) -> bool {
    base(byte) == LITERAL_BOOLEAN
}

#[must_use]
pub const fn is_type_primitive(byte: u8) -> bool {
    base(byte) == TYPE_PRIMITIVE
}

#[must_use]
pub const fn is_type_composite(byte: u8) -> bool {
    base(byte) == TYPE_COMPOSITE
}

#[must_use]
pub const fn is_type_reference(byte: u8) -> bool {
    base(byte) == TYPE_REFERENCE
}

#[must_use]
pub const fn is_type_generic(byte: u8) -> bool {
    base(byte) == TYPE_GENERIC
}

#[must_use]
pub const fn is_annotation(byte: u8) -> bool {
    byte >> 4 == (ANNOTATION_DECORATOR >> 4)
}

#[must_use]
pub const fn is_directive(byte: u8) -> bool {
    base(byte) == ANNOTATION_DIRECTIVE
}

/// Scalar-UDF-facing name for [`name_of`], exposed to the SQL host as
/// `semantic_type_to_string`.
#[must_use]
pub fn semantic_type_to_string(byte: u8) -> String {
    name_of(byte)
}

/// Scalar-UDF-facing name for [`code_of`], exposed to the SQL host as
/// `code_of_semantic_type`.
pub fn code_of_semantic_type(name: &str) -> Result<u8, CoreError> {
    code_of(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_defined_category() {
        for ss in 0..4u8 {
            for kk in 0..4u8 {
                let kind = Kind::from_bits((ss << 2) | kk);
                for tt in 0..4u8 {
                    let byte = code(ss, kk, tt);
                    let name = name_of(byte);
                    assert_eq!(code_of(&name).unwrap(), byte);
                    assert!(!name.starts_with("UNKNOWN_"));
                    let _ = kind;
                }
            }
        }
    }

    #[test]
    fn unknown_codes_never_fail_name_of() {
        // every byte has a defined name since the table is fully dense
        // (4 ss * 4 kk * 4 tt covers all 64 base codes; refinement bits
        // are masked out by name_of via super_type_bits through byte >> 2).
        for byte in 0..=255u8 {
            let name = name_of(byte);
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn unknown_category_name_fails() {
        assert!(code_of("NOT_A_REAL_CATEGORY").is_err());
    }

    #[test]
    fn predicates_match_expected_categories() {
        assert!(is_function_definition(DEFINITION_FUNCTION));
        assert!(is_class_definition(DEFINITION_CLASS));
        assert!(is_jump(FLOW_JUMP));
        assert!(is_jump(refine(FLOW_JUMP, Jump::Break.bits())));
        assert!(!is_jump(FLOW_LOOP));
        assert_eq!(super_kind_of(DEFINITION_FUNCTION), SuperKind::DataStructure);
        assert_eq!(kind_of(FLOW_JUMP), Kind::Flow);
    }

    #[test]
    fn flags_helpers() {
        assert!(is_construct(IS_CONSTRUCT));
        assert!(!is_construct(0));
        assert!(has_body(IS_EMBODIED));
    }
}
