use thiserror::Error;

/// Largest `n` with `F(n)` representable as `u64`.
pub const MAX_N: u32 = 93;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("F({n}) does not fit in u64 (largest index is {max})", max = MAX_N)]
pub struct Overflow {
    pub n: u32,
}

pub fn fib_iterative(n: u32) -> Result<u64, Overflow> {
    if n == 0 {
        return Ok(0);
    }

    let mut prev = 0_u64;
    let mut cur = 1_u64;
    for _ in 1..n {
        let next = prev.checked_add(cur).ok_or(Overflow { n })?;
        prev = cur;
        cur = next;
    }
    Ok(cur)
}

/// `F(2k) = F(k) * (2F(k+1) - F(k))`, `F(2k+1) = F(k)^2 + F(k+1)^2`.
///
/// The pair carries `F(k+1)`, which can exceed `u64` one step before `F(k)`
/// does, so the walk runs in `u128`.
pub fn fib_fast_doubling(n: u32) -> Result<u64, Overflow> {
    if n > MAX_N {
        return Err(Overflow { n });
    }

    let mut a = 0_u128;
    let mut b = 1_u128;
    for shift in (0..u32::BITS - n.leading_zeros()).rev() {
        let c = a * (2 * b - a);
        let d = a * a + b * b;
        if (n >> shift) & 1 == 0 {
            a = c;
            b = d;
        } else {
            a = d;
            b = c + d;
        }
    }
    u64::try_from(a).map_err(|_| Overflow { n })
}

/// The textbook definition. Exponential time: accepts any `n <= MAX_N` but is
/// only practical up to roughly `n = 30`.
pub fn fib_recursive(n: u32) -> Result<u64, Overflow> {
    fn go(n: u32) -> u64 {
        if n < 2 { n as u64 } else { go(n - 1) + go(n - 2) }
    }

    if n > MAX_N {
        return Err(Overflow { n });
    }
    Ok(go(n))
}

/// `F(0), F(1), ...`, stopping early at `F(MAX_N)`.
pub fn fib_sequence(count: usize) -> Vec<u64> {
    let count = count.min(MAX_N as usize + 1);
    let mut out = Vec::with_capacity(count);
    out.extend([0_u64, 1].into_iter().take(count));
    while out.len() < count {
        let n = out.len();
        out.push(out[n - 1] + out[n - 2]);
    }
    out
}
