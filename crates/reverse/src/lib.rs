mod bounds;
mod kernels;

pub use bounds::{Bound, OutOfRange, check_range};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ReverseAlgorithm {
    TwoCursor,
    ZipHalves,
    Unchecked,
    Std,
}

pub const ALL_ALGORITHMS: [ReverseAlgorithm; 4] = [
    ReverseAlgorithm::TwoCursor,
    ReverseAlgorithm::ZipHalves,
    ReverseAlgorithm::Unchecked,
    ReverseAlgorithm::Std,
];

pub fn all_algorithms() -> &'static [ReverseAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: ReverseAlgorithm) -> &'static str {
    match algo {
        ReverseAlgorithm::TwoCursor => "two_cursor",
        ReverseAlgorithm::ZipHalves => "zip_halves",
        ReverseAlgorithm::Unchecked => "unchecked",
        ReverseAlgorithm::Std => "std",
    }
}

/// Reverses the inclusive segment `data[left..=right]` in place.
///
/// Elements outside the segment keep their positions. `left >= right` is a
/// valid empty (or single-element) range and performs no swaps. Indices that
/// do not address the slice fail with [`OutOfRange`] before anything moves.
///
/// Returns the same slice so calls can be chained.
///
/// ```
/// let mut data = [1, 2, 3, 4, 5, 6];
/// reverse::reverse_range(&mut data, 2, 4).unwrap();
/// assert_eq!(data, [1, 2, 5, 4, 3, 6]);
/// ```
pub fn reverse_range<T>(
    data: &mut [T],
    left: isize,
    right: isize,
) -> Result<&mut [T], OutOfRange> {
    reverse_range_with(ReverseAlgorithm::TwoCursor, data, left, right)
}

/// [`reverse_range`] with an explicit swap kernel; every kernel gives the same result.
pub fn reverse_range_with<T>(
    algo: ReverseAlgorithm,
    data: &mut [T],
    left: isize,
    right: isize,
) -> Result<&mut [T], OutOfRange> {
    if let Some((l, r)) = check_range(data.len(), left, right)? {
        match algo {
            ReverseAlgorithm::TwoCursor => kernels::two_cursor(data, l, r),
            ReverseAlgorithm::ZipHalves => kernels::zip_halves(data, l, r),
            ReverseAlgorithm::Unchecked => kernels::unchecked(data, l, r),
            ReverseAlgorithm::Std => kernels::std_reverse(data, l, r),
        }
    }
    Ok(data)
}

/// Reverses the whole slice. Empty slices are left as they are.
pub fn reverse_all<T>(data: &mut [T]) -> &mut [T] {
    if let Some(last) = data.len().checked_sub(1) {
        kernels::two_cursor(data, 0, last);
    }
    data
}
