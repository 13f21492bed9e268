use std::{mem, ptr};

#[inline]
pub(crate) fn two_cursor<T>(data: &mut [T], mut left: usize, mut right: usize) {
    debug_assert!(right < data.len());
    while left < right {
        data.swap(left, right);
        left += 1;
        right -= 1;
    }
}

#[inline]
pub(crate) fn zip_halves<T>(data: &mut [T], left: usize, right: usize) {
    debug_assert!(left <= right && right < data.len());
    let seg = &mut data[left..=right];
    let half = seg.len() / 2;
    let mid = seg.len() - half;
    let (front, back) = seg.split_at_mut(mid);
    for (a, b) in front[..half].iter_mut().zip(back.iter_mut().rev()) {
        mem::swap(a, b);
    }
}

#[inline]
pub(crate) fn unchecked<T>(data: &mut [T], mut left: usize, mut right: usize) {
    debug_assert!(right < data.len());
    let ptr = data.as_mut_ptr();
    // Callers validated `right < len`; both cursors stay inside `left..=right`.
    unsafe {
        while left < right {
            ptr::swap(ptr.add(left), ptr.add(right));
            left += 1;
            right -= 1;
        }
    }
}

#[inline]
pub(crate) fn std_reverse<T>(data: &mut [T], left: usize, right: usize) {
    data[left..=right].reverse();
}
