//! Configuration for the compiler.  All toggles are flat booleans or small
//! numeric knobs; a zero knob means "unset".

#[cfg(feature = "bon")]
use bon::Builder;

/// Feature toggles and whitespace-normalization knobs.
///
/// The default value enables the common inline and block constructs and
/// leaves the riskier transforms (raw HTML, backslash escapes, document
/// wrapping) off:
///
/// ```rust
/// # use slimmark::{compile_str, Options};
/// let options = Options::default();
/// assert_eq!(
///     compile_str("Hello *world*.", &options).unwrap(),
///     "<p>Hello <em>world</em>.</p>",
/// );
/// ```
///
/// With the `bon` feature a builder is derived:
///
/// ```rust
/// # #[cfg(feature = "bon")] {
/// # use slimmark::Options;
/// let options = Options::builder().allow_html(true).build();
/// assert!(options.allow_html && options.enable_em_tags);
/// # }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct Options {
    /// Pass text content through without HTML entity escaping.
    ///
    /// ```rust
    /// # use slimmark::{compile_str, Options};
    /// let mut options = Options::default();
    /// options.allow_html = true;
    /// assert_eq!(
    ///     compile_str("a &amp; b", &options).unwrap(),
    ///     "<p>a &amp; b</p>",
    /// );
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub allow_html: bool,

    /// Retroactively remove tag pairs whose interior holds no non-empty
    /// text.
    ///
    /// ```rust
    /// # use slimmark::{compile_str, Options};
    /// let mut options = Options::default();
    /// options.clean_empty_tags = true;
    /// assert_eq!(
    ///     compile_str("a ** ** b", &options).unwrap(),
    ///     "<p>a  b</p>",
    /// );
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub clean_empty_tags: bool,

    /// Print a one-line-per-token trace of the resolved sequence to stdout.
    #[cfg_attr(feature = "bon", builder(default))]
    pub debug_print_tokens: bool,

    /// Print the final HTML to stdout.
    #[cfg_attr(feature = "bon", builder(default))]
    pub debug_print_output: bool,

    /// Recognize the `\n`, `\r`, `\t` and `\\` escapes.  Any other escape
    /// letter is a compile error.
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_backslash_transforms: bool,

    /// Promote `> ` lines to `<blockquote>` pairs.
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_blockquotes: bool,

    /// Turn single-backtick pairs into `<code>` spans.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_code_tags: bool,

    /// Wrap output in a `<!DOCTYPE html><html><head></head><body>…` envelope.
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_document_tags: bool,

    /// Turn `*x*` and `_x_` into `<em>` pairs.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_em_tags: bool,

    /// Promote `#`…`######` lines to `<h1>`…`<h6>` pairs.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_headings: bool,

    /// Turn a paragraph holding only `***` or `___` into `<hr>`.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_horizontal_rules: bool,

    /// Turn `--`/`---` into en/em dashes with hair spaces.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_hyphen_transforms: bool,

    /// Resolve `![alt](src title?)` image syntax.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_images: bool,

    /// Resolve `[text](link title?)` and bare `<link>` syntax.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_links: bool,

    /// Resolve `* ` line prefixes into `<ul>`/`<li>` structure.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_lists: bool,

    /// Turn `==x==` into `<mark>` pairs.
    #[cfg_attr(feature = "bon", builder(default))]
    pub enable_mark_tags: bool,

    /// Wrap the document in a paragraph pair and turn blank lines into
    /// paragraph breaks.  When off, line breaks pass through as newlines.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_paragraphs: bool,

    /// Turn `**x**`/`__x__` into `<strong>` pairs.
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub enable_strong_tags: bool,

    /// Clamp space runs to this many characters; 0 leaves them alone.
    ///
    /// ```rust
    /// # use slimmark::{compile_str, Options};
    /// let mut options = Options::default();
    /// options.max_consecutive_spaces = 2;
    /// assert_eq!(compile_str("a     b", &options).unwrap(), "<p>a  b</p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub max_consecutive_spaces: usize,

    /// Clamp tab runs to this many characters; 0 leaves them alone.
    #[cfg_attr(feature = "bon", builder(default))]
    pub max_consecutive_tabs: usize,

    /// Convert each run of this many spaces into one tab; 0 disables.
    #[cfg_attr(feature = "bon", builder(default))]
    pub spaces_to_tab: usize,

    /// Convert each tab into this many spaces; 0 disables.
    #[cfg_attr(feature = "bon", builder(default))]
    pub tab_to_spaces: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            allow_html: false,
            clean_empty_tags: false,
            debug_print_tokens: false,
            debug_print_output: false,
            enable_backslash_transforms: false,
            enable_blockquotes: false,
            enable_code_tags: true,
            enable_document_tags: false,
            enable_em_tags: true,
            enable_headings: true,
            enable_horizontal_rules: true,
            enable_hyphen_transforms: true,
            enable_images: true,
            enable_links: true,
            enable_lists: true,
            enable_mark_tags: false,
            enable_paragraphs: true,
            enable_strong_tags: true,
            max_consecutive_spaces: 0,
            max_consecutive_tabs: 0,
            spaces_to_tab: 0,
            tab_to_spaces: 0,
        }
    }
}

impl Options {
    /// True when any whitespace-normalization knob is set, i.e. when the
    /// dedicated normalization pass must run.
    pub(crate) fn normalizes_whitespace(&self) -> bool {
        self.max_consecutive_spaces > 0
            || self.max_consecutive_tabs > 0
            || self.spaces_to_tab > 0
            || self.tab_to_spaces > 0
    }
}
