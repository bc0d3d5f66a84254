//! Parsed documentation comments.
//!
//! A declaration's doc comment, when present, is exposed as a tree rooted at
//! a [`FullComment`]. Every node in the tree classifies into exactly one
//! variant of [`CommentNode`]; the null node libclang uses to signal absence
//! never surfaces here, it becomes `None` at the conversion boundary
//! instead.

use clang_sys::CXComment;

use crate::TranslationUnit;
use crate::string;

/// An untyped handle on one node of a comment tree.
#[derive(Clone, Copy)]
pub struct Comment<'tu> {
    raw: CXComment,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Comment<'tu> {
    /// Wraps a native comment, `None` for the null node.
    pub(crate) fn from_raw(raw: CXComment, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let kind = unsafe { clang_sys::clang_Comment_getKind(raw) };
        if kind == clang_sys::CXComment_Null {
            return None;
        }
        Some(Self { raw, tu })
    }

    /// Classifies this node into its typed form.
    #[must_use]
    pub fn node(self) -> CommentNode<'tu> {
        match unsafe { clang_sys::clang_Comment_getKind(self.raw) } {
            clang_sys::CXComment_Text => CommentNode::Text(TextComment(self)),
            clang_sys::CXComment_InlineCommand => {
                CommentNode::InlineCommand(InlineCommandComment(self))
            }
            clang_sys::CXComment_HTMLStartTag => {
                CommentNode::HtmlStartTag(HtmlStartTagComment(self))
            }
            clang_sys::CXComment_HTMLEndTag => CommentNode::HtmlEndTag(HtmlEndTagComment(self)),
            clang_sys::CXComment_Paragraph => CommentNode::Paragraph(ParagraphComment(self)),
            clang_sys::CXComment_BlockCommand => {
                CommentNode::BlockCommand(BlockCommandComment(self))
            }
            clang_sys::CXComment_ParamCommand => {
                CommentNode::ParamCommand(ParamCommandComment(self))
            }
            clang_sys::CXComment_TParamCommand => {
                CommentNode::TParamCommand(TParamCommandComment(self))
            }
            clang_sys::CXComment_VerbatimBlockCommand => {
                CommentNode::VerbatimBlock(VerbatimBlockComment(self))
            }
            clang_sys::CXComment_VerbatimBlockLine => {
                CommentNode::VerbatimBlockLine(VerbatimBlockLineComment(self))
            }
            clang_sys::CXComment_VerbatimLine => {
                CommentNode::VerbatimLine(VerbatimLineComment(self))
            }
            clang_sys::CXComment_FullComment => CommentNode::Full(FullComment(self)),
            other => panic!("unsupported CXCommentKind: {other}"),
        }
    }

    /// How many child nodes this node has.
    #[must_use]
    pub fn num_children(self) -> u32 {
        unsafe { clang_sys::clang_Comment_getNumChildren(self.raw) }
    }

    /// The child at `index`, `None` past the end or for a null child.
    #[must_use]
    pub fn child(self, index: u32) -> Option<Self> {
        if index >= self.num_children() {
            return None;
        }
        let raw = unsafe { clang_sys::clang_Comment_getChild(self.raw, index) };
        Self::from_raw(raw, self.tu)
    }

    /// The typed children of this node, in document order.
    #[must_use]
    pub fn children(self) -> Vec<CommentNode<'tu>> {
        (0..self.num_children())
            .filter_map(|i| self.child(i).map(Self::node))
            .collect()
    }

    fn string(self, query: unsafe fn(CXComment) -> clang_sys::CXString) -> String {
        string::to_string(unsafe { query(self.raw) })
    }
}

/// One node of a comment tree, classified by shape.
#[derive(Clone, Copy)]
pub enum CommentNode<'tu> {
    /// Plain text.
    Text(TextComment<'tu>),
    /// An inline command such as `\c` or `\em`, with arguments.
    InlineCommand(InlineCommandComment<'tu>),
    /// An opening HTML tag.
    HtmlStartTag(HtmlStartTagComment<'tu>),
    /// A closing HTML tag.
    HtmlEndTag(HtmlEndTagComment<'tu>),
    /// A paragraph of inline content.
    Paragraph(ParagraphComment<'tu>),
    /// A block command such as `\brief` or `\returns`.
    BlockCommand(BlockCommandComment<'tu>),
    /// A `\param` command describing a function parameter.
    ParamCommand(ParamCommandComment<'tu>),
    /// A `\tparam` command describing a template parameter.
    TParamCommand(TParamCommandComment<'tu>),
    /// A verbatim block such as `\verbatim ... \endverbatim`.
    VerbatimBlock(VerbatimBlockComment<'tu>),
    /// One line of a verbatim block.
    VerbatimBlockLine(VerbatimBlockLineComment<'tu>),
    /// A single-line verbatim command.
    VerbatimLine(VerbatimLineComment<'tu>),
    /// The root of a parsed doc comment.
    Full(FullComment<'tu>),
}

/// Plain text content.
#[derive(Clone, Copy)]
pub struct TextComment<'tu>(Comment<'tu>);

impl TextComment<'_> {
    /// The text itself.
    #[must_use]
    pub fn text(self) -> String {
        self.0.string(clang_sys::clang_TextComment_getText)
    }

    /// Whether this node is pure whitespace.
    #[must_use]
    pub fn is_whitespace(self) -> bool {
        unsafe { clang_sys::clang_Comment_isWhitespace(self.0.raw) != 0 }
    }
}

/// How an inline command asks to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineCommandRenderKind {
    /// No special rendering.
    Normal,
    /// Bold.
    Bold,
    /// Monospaced.
    Monospaced,
    /// Emphasised.
    Emphasized,
}

/// An inline command with word-like arguments.
#[derive(Clone, Copy)]
pub struct InlineCommandComment<'tu>(Comment<'tu>);

impl InlineCommandComment<'_> {
    /// The command name, without the leading backslash.
    #[must_use]
    pub fn name(self) -> String {
        self.0.string(clang_sys::clang_InlineCommandComment_getCommandName)
    }

    /// How the command's content should be rendered.
    #[must_use]
    pub fn render_kind(self) -> InlineCommandRenderKind {
        match unsafe { clang_sys::clang_InlineCommandComment_getRenderKind(self.0.raw) } {
            clang_sys::CXCommentInlineCommandRenderKind_Normal => InlineCommandRenderKind::Normal,
            clang_sys::CXCommentInlineCommandRenderKind_Bold => InlineCommandRenderKind::Bold,
            clang_sys::CXCommentInlineCommandRenderKind_Monospaced => {
                InlineCommandRenderKind::Monospaced
            }
            clang_sys::CXCommentInlineCommandRenderKind_Emphasized => {
                InlineCommandRenderKind::Emphasized
            }
            other => panic!("unsupported CXCommentInlineCommandRenderKind: {other}"),
        }
    }

    /// The command's arguments, in order.
    #[must_use]
    pub fn arguments(self) -> Vec<String> {
        let count = unsafe { clang_sys::clang_InlineCommandComment_getNumArgs(self.0.raw) };
        (0..count)
            .map(|i| {
                string::to_string(unsafe {
                    clang_sys::clang_InlineCommandComment_getArgText(self.0.raw, i)
                })
            })
            .collect()
    }
}

/// A `name="value"` pair on an HTML start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: String,
}

/// An opening HTML tag.
#[derive(Clone, Copy)]
pub struct HtmlStartTagComment<'tu>(Comment<'tu>);

impl HtmlStartTagComment<'_> {
    /// The tag name, e.g. `a` for `<a href="...">`.
    #[must_use]
    pub fn tag_name(self) -> String {
        self.0.string(clang_sys::clang_HTMLTagComment_getTagName)
    }

    /// Whether the tag is self-closing, e.g. `<br />`.
    #[must_use]
    pub fn is_self_closing(self) -> bool {
        unsafe { clang_sys::clang_HTMLStartTagComment_isSelfClosing(self.0.raw) != 0 }
    }

    /// The tag's attributes, in source order.
    #[must_use]
    pub fn attributes(self) -> Vec<HtmlAttribute> {
        let count = unsafe { clang_sys::clang_HTMLStartTag_getNumAttrs(self.0.raw) };
        (0..count)
            .map(|i| HtmlAttribute {
                name: string::to_string(unsafe {
                    clang_sys::clang_HTMLStartTag_getAttrName(self.0.raw, i)
                }),
                value: string::to_string(unsafe {
                    clang_sys::clang_HTMLStartTag_getAttrValue(self.0.raw, i)
                }),
            })
            .collect()
    }

    /// The tag rendered back to HTML text.
    #[must_use]
    pub fn as_html(self) -> String {
        self.0.string(clang_sys::clang_HTMLTagComment_getAsString)
    }
}

/// A closing HTML tag.
#[derive(Clone, Copy)]
pub struct HtmlEndTagComment<'tu>(Comment<'tu>);

impl HtmlEndTagComment<'_> {
    /// The tag name, e.g. `a` for `</a>`.
    #[must_use]
    pub fn tag_name(self) -> String {
        self.0.string(clang_sys::clang_HTMLTagComment_getTagName)
    }
}

/// A paragraph of inline content.
#[derive(Clone, Copy)]
pub struct ParagraphComment<'tu>(Comment<'tu>);

impl<'tu> ParagraphComment<'tu> {
    /// The inline content making up the paragraph.
    #[must_use]
    pub fn children(self) -> Vec<CommentNode<'tu>> {
        self.0.children()
    }
}

/// A block command with an attached paragraph, such as `\brief`.
#[derive(Clone, Copy)]
pub struct BlockCommandComment<'tu>(Comment<'tu>);

impl<'tu> BlockCommandComment<'tu> {
    /// The command name, without the leading backslash.
    #[must_use]
    pub fn name(self) -> String {
        self.0.string(clang_sys::clang_BlockCommandComment_getCommandName)
    }

    /// The command's word-like arguments, in order.
    #[must_use]
    pub fn arguments(self) -> Vec<String> {
        let count = unsafe { clang_sys::clang_BlockCommandComment_getNumArgs(self.0.raw) };
        (0..count)
            .map(|i| {
                string::to_string(unsafe {
                    clang_sys::clang_BlockCommandComment_getArgText(self.0.raw, i)
                })
            })
            .collect()
    }

    /// The paragraph argument of the command.
    #[must_use]
    pub fn paragraph(self) -> Option<ParagraphComment<'tu>> {
        let raw = unsafe { clang_sys::clang_BlockCommandComment_getParagraph(self.0.raw) };
        match Comment::from_raw(raw, self.0.tu)?.node() {
            CommentNode::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

/// Which way data flows through a documented parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPassDirection {
    /// Into the function.
    In,
    /// Out of the function.
    Out,
    /// Both directions.
    InOut,
}

/// A `\param` command.
#[derive(Clone, Copy)]
pub struct ParamCommandComment<'tu>(Comment<'tu>);

impl ParamCommandComment<'_> {
    /// The documented parameter's name.
    #[must_use]
    pub fn parameter_name(self) -> String {
        self.0.string(clang_sys::clang_ParamCommandComment_getParamName)
    }

    /// The zero-based index of the parameter in the function's parameter
    /// list, when the name matched a real parameter.
    #[must_use]
    pub fn parameter_index(self) -> Option<u32> {
        let valid =
            unsafe { clang_sys::clang_ParamCommandComment_isParamIndexValid(self.0.raw) } != 0;
        if !valid {
            return None;
        }
        Some(unsafe { clang_sys::clang_ParamCommandComment_getParamIndex(self.0.raw) })
    }

    /// Whether the author wrote an explicit direction, e.g. `\param[out]`.
    #[must_use]
    pub fn is_direction_explicit(self) -> bool {
        unsafe { clang_sys::clang_ParamCommandComment_isDirectionExplicit(self.0.raw) != 0 }
    }

    /// The direction of the parameter, explicit or inferred.
    #[must_use]
    pub fn direction(self) -> ParamPassDirection {
        match unsafe { clang_sys::clang_ParamCommandComment_getDirection(self.0.raw) } {
            clang_sys::CXCommentParamPassDirection_In => ParamPassDirection::In,
            clang_sys::CXCommentParamPassDirection_Out => ParamPassDirection::Out,
            clang_sys::CXCommentParamPassDirection_InOut => ParamPassDirection::InOut,
            other => panic!("unsupported CXCommentParamPassDirection: {other}"),
        }
    }
}

/// A `\tparam` command.
#[derive(Clone, Copy)]
pub struct TParamCommandComment<'tu>(Comment<'tu>);

impl TParamCommandComment<'_> {
    /// The documented template parameter's name.
    #[must_use]
    pub fn parameter_name(self) -> String {
        self.0.string(clang_sys::clang_TParamCommandComment_getParamName)
    }
}

/// A verbatim block, rendered line by line.
#[derive(Clone, Copy)]
pub struct VerbatimBlockComment<'tu>(Comment<'tu>);

impl<'tu> VerbatimBlockComment<'tu> {
    /// The block's lines, each a [`CommentNode::VerbatimBlockLine`].
    #[must_use]
    pub fn children(self) -> Vec<CommentNode<'tu>> {
        self.0.children()
    }
}

/// One line of a verbatim block.
#[derive(Clone, Copy)]
pub struct VerbatimBlockLineComment<'tu>(Comment<'tu>);

impl VerbatimBlockLineComment<'_> {
    /// The line's text.
    #[must_use]
    pub fn text(self) -> String {
        self.0.string(clang_sys::clang_VerbatimBlockLineComment_getText)
    }
}

/// A single-line verbatim command.
#[derive(Clone, Copy)]
pub struct VerbatimLineComment<'tu>(Comment<'tu>);

impl VerbatimLineComment<'_> {
    /// Everything after the command, verbatim.
    #[must_use]
    pub fn text(self) -> String {
        self.0.string(clang_sys::clang_VerbatimLineComment_getText)
    }
}

/// The root of a parsed documentation comment.
#[derive(Clone, Copy)]
pub struct FullComment<'tu>(Comment<'tu>);

impl<'tu> FullComment<'tu> {
    pub(crate) fn from_raw(raw: CXComment, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let comment = Comment::from_raw(raw, tu)?;
        match comment.node() {
            CommentNode::Full(full) => Some(full),
            _ => None,
        }
    }

    /// The untyped node, for indexed child access.
    #[must_use]
    pub fn as_comment(self) -> Comment<'tu> {
        self.0
    }

    /// The comment's top-level blocks, in document order.
    #[must_use]
    pub fn children(self) -> Vec<CommentNode<'tu>> {
        self.0.children()
    }

    /// The whole comment rendered to HTML.
    #[must_use]
    pub fn as_html(self) -> String {
        self.0.string(clang_sys::clang_FullComment_getAsHTML)
    }

    /// The whole comment rendered to XML.
    #[must_use]
    pub fn as_xml(self) -> String {
        self.0.string(clang_sys::clang_FullComment_getAsXML)
    }
}
