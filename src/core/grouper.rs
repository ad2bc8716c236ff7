/// Splits `n` into right-aligned groups of up to three decimal digits and
/// renders each group with `render`, returning the renderings most
/// significant group first.
///
/// Digits are peeled off the low end one at a time. A group is handed to
/// `render` as soon as it holds three digits; a shorter leading group is
/// rendered once `n` is exhausted. The first failing render aborts the
/// whole call with that error.
///
/// `n == 0` has no digits to peel and yields an empty vector, so callers
/// spell out zero themselves.
pub fn group_digits<F, E>(mut n: u64, mut render: F) -> Result<Vec<String>, E>
where
    F: FnMut(&[u8]) -> Result<String, E>,
{
    let mut chunks = Vec::new();
    // filled right to left so the live slice is always most significant first
    let mut group = [0u8; 3];
    let mut len = 0;

    while n != 0 {
        len += 1;
        group[3 - len] = (n % 10) as u8;
        n /= 10;

        if len == 3 {
            chunks.push(render(&group)?);
            len = 0;
        }
    }

    if len > 0 {
        chunks.push(render(&group[3 - len..])?);
    }

    chunks.reverse();
    Ok(chunks)
}
