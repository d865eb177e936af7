//! The closed set of token types produced by the scanner, plus the static
//! type-to-tag mapping used by the HTML generator.

/// A classified span over the source buffer, or a synthetic boundary marker.
///
/// Marker types (`Asterisk`, `Hash`, …) may denote either a literal character
/// run or, after resolution, a semantic boundary; `*Bound` types always come
/// in pairs matched by the generator's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Soft-deleted placeholder.  Contributes nothing to length, bytes, or
    /// final HTML, but stays in the raw chain so other tokens' byte offsets
    /// into the shared input buffer remain valid.
    Empty,
    /// `<!DOCTYPE html>`, synthesized when document tags are enabled.
    DocumentDoctype,
    /// One side of the synthesized `<html>` pair.
    DocumentHtmlBound,
    /// One side of the synthesized `<head>` pair.
    DocumentHeadBound,
    /// One side of the synthesized `<body>` pair.
    DocumentBodyBound,
    /// One side of a `<p>` pair; also the generic block boundary other
    /// resolvers promote into headings, blockquotes, and lists.
    ParagraphBound,
    /// One side of a `<blockquote>` pair, promoted from a `> ` line.
    BlockquoteBound,
    /// One side of an `<h1>` pair.
    Heading1Bound,
    /// One side of an `<h2>` pair.
    Heading2Bound,
    /// One side of an `<h3>` pair.
    Heading3Bound,
    /// One side of an `<h4>` pair.
    Heading4Bound,
    /// One side of an `<h5>` pair.
    Heading5Bound,
    /// One side of an `<h6>` pair.
    Heading6Bound,
    /// A lone `\n`; two adjacent ones collapse into a paragraph-bound pair.
    LineBreak,
    /// A run of ordinary bytes.
    Text,
    /// A run of `0x20` bytes.
    Space,
    /// A hair space (U+200A).
    SpaceHair,
    /// A run of `\t` bytes.
    Tab,
    /// A `\r`; usually soft-deleted when the `\n` after it is scanned.
    CarriageReturn,
    /// A `\\`, candidate for the escape resolver.
    Backslash,
    /// `*`.
    Asterisk,
    /// `**`.
    AsteriskDouble,
    /// `***`.
    AsteriskTriple,
    /// `_`.
    Underscore,
    /// `__`.
    UnderscoreDouble,
    /// `___`.
    UnderscoreTriple,
    /// `#`.
    Hash,
    /// `##`.
    HashDouble,
    /// `###`.
    HashTriple,
    /// `####`.
    HashQuadruple,
    /// `#####`.
    HashQuintuple,
    /// `######`.
    HashSextuple,
    /// `-`.
    Hyphen,
    /// `--`.
    HyphenDouble,
    /// `---`.
    HyphenTriple,
    /// An em dash, resolved from `---`.
    DashEm,
    /// An en dash, resolved from `--`.
    DashEn,
    /// `==`, the mark-tag marker.
    EqualsDouble,
    /// `` ` ``.
    Backtick,
    /// ` `` `.
    BacktickDouble,
    /// `!`.
    Exclamation,
    /// `(`.
    ParenthesisOpen,
    /// `)`.
    ParenthesisClose,
    /// `[`.
    SquareBracketOpen,
    /// `]`.
    SquareBracketClose,
    /// `<`.
    AngleBracketOpen,
    /// `>`.
    AngleBracketClose,
    /// One side of an `<a>` pair; the opening side carries the attributes.
    LinkBound,
    /// One side of an `<img>` pair; the opening side carries the attributes
    /// and the closing side renders nothing.
    ImageBound,
    /// One side of a `<ul>` pair, matched by indent.
    UnorderedListBound,
    /// One side of an `<li>` pair.
    ListItemBound,
    /// `<hr>`, resolved from a paragraph holding only `***` or `___`.
    HorizontalRule,
}

/// HTML tag names for a paired token type.  `tags` holds the nesting order
/// for the opening side; the closing side is emitted reversed.
#[derive(Debug, Clone, Copy)]
pub struct TagData {
    /// Tag names in opening nesting order.
    pub tags: &'static [&'static str],
    /// Self-closing tags emit only the opening form and never a `</…>`.
    pub self_closing: bool,
}

impl TokenType {
    /// Short mnemonic used by the token trace and the span-class fallback.
    pub fn short_name(self) -> &'static str {
        use TokenType::*;

        match self {
            Empty => "EMP",
            DocumentDoctype => "DOC_TYP",
            DocumentHtmlBound => "DOC_HTM",
            DocumentHeadBound => "DOC_HED",
            DocumentBodyBound => "DOC_BDY",
            ParagraphBound => "PAR_BND",
            BlockquoteBound => "QUO_BND",
            Heading1Bound => "HD1_BND",
            Heading2Bound => "HD2_BND",
            Heading3Bound => "HD3_BND",
            Heading4Bound => "HD4_BND",
            Heading5Bound => "HD5_BND",
            Heading6Bound => "HD6_BND",
            LineBreak => "LIN_BRK",
            Text => "TXT",
            Space => "SPC",
            SpaceHair => "SPC_HAR",
            Tab => "TAB",
            CarriageReturn => "CAR_RET",
            Backslash => "BKS",
            Asterisk => "AST",
            AsteriskDouble => "AST_DUB",
            AsteriskTriple => "AST_TRI",
            Underscore => "UND",
            UnderscoreDouble => "UND_DUB",
            UnderscoreTriple => "UND_TRI",
            Hash => "HSH",
            HashDouble => "HSH_DUB",
            HashTriple => "HSH_TRI",
            HashQuadruple => "HSH_QUA",
            HashQuintuple => "HSH_QUI",
            HashSextuple => "HSH_SXT",
            Hyphen => "HYP",
            HyphenDouble => "HYP_DUB",
            HyphenTriple => "HYP_TRI",
            DashEm => "DSH_EM",
            DashEn => "DSH_EN",
            EqualsDouble => "EQU_DUB",
            Backtick => "BTK",
            BacktickDouble => "BTK_DUB",
            Exclamation => "EXL",
            ParenthesisOpen => "PRN_OPN",
            ParenthesisClose => "PRN_CLS",
            SquareBracketOpen => "SQU_BRK_OPN",
            SquareBracketClose => "SQU_BRK_CLS",
            AngleBracketOpen => "ANG_BRK_OPN",
            AngleBracketClose => "ANG_BRK_CLS",
            LinkBound => "LNK_BND",
            ImageBound => "IMG_BND",
            UnorderedListBound => "ULS_BND",
            ListItemBound => "LIT_BND",
            HorizontalRule => "HRZ_RUL",
        }
    }

    /// Lowercased, hyphenated form of the short name, used as the class of
    /// the generic `<span>` fallback.
    pub fn class_name(self) -> String {
        self.short_name()
            .chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect()
    }

    /// The static type-to-tag table.  `None` means the generator falls back
    /// to a generic `<span class="…">` keyed by [`TokenType::class_name`].
    pub fn tag_data(self) -> Option<TagData> {
        use TokenType::*;

        let (tags, self_closing): (&'static [&'static str], bool) = match self {
            DocumentDoctype => (&["!DOCTYPE"], true),
            DocumentHtmlBound => (&["html"], false),
            DocumentHeadBound => (&["head"], false),
            DocumentBodyBound => (&["body"], false),
            ParagraphBound => (&["p"], false),
            BlockquoteBound => (&["blockquote"], false),
            Heading1Bound => (&["h1"], false),
            Heading2Bound => (&["h2"], false),
            Heading3Bound => (&["h3"], false),
            Heading4Bound => (&["h4"], false),
            Heading5Bound => (&["h5"], false),
            Heading6Bound => (&["h6"], false),
            LineBreak => (&["br"], true),
            HorizontalRule => (&["hr"], true),
            EqualsDouble => (&["mark"], false),
            Asterisk | Underscore => (&["em"], false),
            AsteriskDouble | UnderscoreDouble => (&["strong"], false),
            AsteriskTriple | UnderscoreTriple => (&["strong", "em"], false),
            Backtick => (&["code"], false),
            LinkBound => (&["a"], false),
            ImageBound => (&["img"], true),
            UnorderedListBound => (&["ul"], false),
            ListItemBound => (&["li"], false),
            _ => return None,
        };

        Some(TagData { tags, self_closing })
    }
}

/// Token types that may appear, unescaped, inside the `[text]` segment of a
/// link or image.  Brackets and angle brackets are deliberately absent.
pub const LINK_SEGMENT_TEXT: &[TokenType] = &[
    TokenType::Text,
    TokenType::Space,
    TokenType::Tab,
    TokenType::Backslash,
    TokenType::Asterisk,
    TokenType::AsteriskDouble,
    TokenType::AsteriskTriple,
    TokenType::Underscore,
    TokenType::UnderscoreDouble,
    TokenType::UnderscoreTriple,
    TokenType::EqualsDouble,
    TokenType::Backtick,
    TokenType::Exclamation,
    TokenType::ParenthesisOpen,
    TokenType::ParenthesisClose,
];

/// Token types that may appear inside the `(link)` target segment.
pub const LINK_SEGMENT_LINK: &[TokenType] = &[
    TokenType::Text,
    TokenType::Asterisk,
    TokenType::AsteriskDouble,
    TokenType::Underscore,
    TokenType::UnderscoreDouble,
];

/// Token types that may appear inside the optional title segment.  The title
/// runs to the closing parenthesis, so parentheses are excluded.
pub const LINK_SEGMENT_TITLE: &[TokenType] = &[
    TokenType::Text,
    TokenType::Space,
    TokenType::Tab,
    TokenType::Backslash,
    TokenType::Asterisk,
    TokenType::AsteriskDouble,
    TokenType::AsteriskTriple,
    TokenType::Underscore,
    TokenType::UnderscoreDouble,
    TokenType::UnderscoreTriple,
    TokenType::EqualsDouble,
    TokenType::Backtick,
    TokenType::Exclamation,
];

/// Image alt-text segment; same shape as the link text segment.
pub const IMAGE_SEGMENT_TEXT: &[TokenType] = LINK_SEGMENT_TEXT;
/// Image target segment; same shape as the link target segment.
pub const IMAGE_SEGMENT_LINK: &[TokenType] = LINK_SEGMENT_LINK;
/// Image title segment; same shape as the link title segment.
pub const IMAGE_SEGMENT_TITLE: &[TokenType] = LINK_SEGMENT_TITLE;

#[cfg(test)]
mod tests {
    use super::TokenType;

    #[test]
    fn class_names_are_lowercased_and_hyphenated() {
        assert_eq!(TokenType::SquareBracketOpen.class_name(), "squ-brk-opn");
        assert_eq!(TokenType::HorizontalRule.class_name(), "hrz-rul");
    }

    #[test]
    fn triple_emphasis_nests_strong_then_em() {
        let datum = TokenType::AsteriskTriple.tag_data().unwrap();
        assert_eq!(datum.tags, &["strong", "em"]);
        assert!(!datum.self_closing);
    }
}
