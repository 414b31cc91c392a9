use crate::error::InvalidInput;

/// Find the minimum and maximum of `values` by divide and conquer.
///
/// Splits the index range at its midpoint, solves each half and merges the
/// two pairs. Ranges of one or two elements are solved directly, which keeps
/// the total close to 3n/2 comparisons with O(log n) recursion depth.
pub fn get_min_max<T: PartialOrd + Copy>(values: &[T]) -> Result<(T, T), InvalidInput> {
    if values.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }

    let extrema = find_min_max(values, 0, values.len() - 1);
    tracing::trace!(len = values.len(), "Computed min/max");
    Ok(extrema)
}

/// Min/max over the inclusive range `[left, right]`
fn find_min_max<T: PartialOrd + Copy>(values: &[T], left: usize, right: usize) -> (T, T) {
    if left == right {
        return (values[left], values[left]);
    }

    if right == left + 1 {
        let (a, b) = (values[left], values[right]);
        return if a < b { (a, b) } else { (b, a) };
    }

    let mid = left + (right - left) / 2;
    let (min1, max1) = find_min_max(values, left, mid);
    let (min2, max2) = find_min_max(values, mid + 1, right);

    (lesser(min1, min2), greater(max1, max2))
}

// Both keep the left operand on ties
fn lesser<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

fn greater<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
