use bytes::Bytes;

const CURRENT_MARKER: &[u8] = b"<<<<<<< HEAD\n";
const SEPARATOR: &[u8] = b"=======\n";
const END_MARKER: &[u8] = b">>>>>>>\n";

/// Content written for a conflicted path
///
/// An absent side contributes nothing between its markers. Both sides are
/// inserted verbatim, so a side without a trailing newline runs straight into
/// the next marker.
pub fn conflict_content(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let target = target.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CURRENT_MARKER.len() + current.len() + SEPARATOR.len() + target.len() + END_MARKER.len(),
    );
    content.extend_from_slice(CURRENT_MARKER);
    content.extend_from_slice(current);
    content.extend_from_slice(SEPARATOR);
    content.extend_from_slice(target);
    content.extend_from_slice(END_MARKER);

    content.into()
}
