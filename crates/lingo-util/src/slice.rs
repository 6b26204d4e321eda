/// Normalize an optionally-negative `(start, stop)` pair against a sequence
/// length, returning bounds with `0 <= start <= stop <= length`.
///
/// Follows the usual slice conventions: `None` means "from the beginning" or
/// "to the end", negative indices count back from the end, and out-of-range
/// values clamp to the valid range instead of failing.
pub fn normalize_bounds(length: usize, start: Option<i64>, stop: Option<i64>) -> (usize, usize) {
    let len = length as i64;

    let mut start = start.unwrap_or(0);
    if start < 0 {
        start += len;
    }
    let start = start.clamp(0, len);

    let mut stop = stop.unwrap_or(len);
    if stop < 0 {
        stop += len;
    }
    let stop = stop.clamp(start, len);

    (start as usize, stop as usize)
}
