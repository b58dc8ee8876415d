use std::io::Cursor;

use binrw::BinRead;

/// Reads `count` consecutive repeating-group entries of type `T`.
pub(crate) fn read_group<T>(cursor: &mut Cursor<&[u8]>, count: usize) -> binrw::BinResult<Vec<T>>
where
    T: for<'a> BinRead<Args<'a> = ()>,
{
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(T::read_le(cursor)?);
    }
    Ok(out)
}
