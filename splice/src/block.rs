use std::ops::Range;

/// A substitutable region located in source text.
///
/// The grammar here is deliberately tiny: every match decomposes into three
/// tokens — leading text, interior body, trailing text. For single-block
/// substitution the prefix and suffix partition the rest of the buffer; for
/// help-text fences they are the fence lines themselves, which are discarded
/// when the block is reformatted.
#[derive(Debug)]
pub struct NamedBlock<'a> {
    /// Text before the body: the leading buffer text, or an opening fence line.
    pub prefix: &'a str,
    /// The interior lines that get re-expressed by a replacement rule.
    pub body: &'a str,
    /// Text after the body: the trailing buffer text, or a closing fence line.
    pub suffix: &'a str,
    /// Byte span of the region a pass replaces, within the source buffer.
    pub span: Range<usize>,
}
