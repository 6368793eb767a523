use lazy_static::lazy_static;
use tiktoken_rs::CoreBPE;

lazy_static! {
    static ref CL100K: Option<CoreBPE> = tiktoken_rs::cl100k_base().ok();
}

/// Token count of `text` under the cl100k encoding.
///
/// Falls back to the usual `len / 4` estimate (rounded up) when the
/// encoding cannot be loaded.
pub fn count_tokens(text: &str) -> usize {
    match CL100K.as_ref() {
        Some(bpe) => bpe.encode_ordinary(text).len(),
        None => fallback_tokens(text),
    }
}

#[inline]
fn fallback_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}
