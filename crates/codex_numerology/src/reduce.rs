//! Digit-sum primitives shared by the Life Path and Destiny rules.

/// Numbers exempt from further reduction in a Destiny sum.
pub const MASTER_NUMBERS: [u32; 4] = [11, 22, 33, 44];

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly take the digit sum until the value is a single digit.
///
/// `1982 -> 20 -> 2`. Values already `<= 9` are returned unchanged.
pub const fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Whether `n` is one of 11, 22, 33, 44.
pub const fn is_master_number(n: u32) -> bool {
    matches!(n, 11 | 22 | 33 | 44)
}

/// Reduce by digit sum, stopping early on a master number.
///
/// Loop condition: `n > 9 && !is_master_number(n)`. The result is therefore
/// always in `0..=9` or one of [`MASTER_NUMBERS`].
pub const fn reduce_keeping_masters(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_basic() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1982), 20);
        assert_eq!(digit_sum(u32::MAX), 57);
    }

    #[test]
    fn reduce_to_digit_chain() {
        assert_eq!(reduce_to_digit(1982), 2);
        assert_eq!(reduce_to_digit(1990), 1);
        assert_eq!(reduce_to_digit(9), 9);
        assert_eq!(reduce_to_digit(99_999), 9);
    }

    #[test]
    fn reduce_to_digit_ignores_masters() {
        assert_eq!(reduce_to_digit(11), 2);
        assert_eq!(reduce_to_digit(29), 2);
    }

    #[test]
    fn master_numbers_recognized() {
        for m in MASTER_NUMBERS {
            assert!(is_master_number(m));
        }
        assert!(!is_master_number(55));
        assert!(!is_master_number(9));
    }

    #[test]
    fn keeping_masters_stops_on_master() {
        assert_eq!(reduce_keeping_masters(22), 22);
        assert_eq!(reduce_keeping_masters(44), 44);
        // 29 -> 11, stops
        assert_eq!(reduce_keeping_masters(29), 11);
        // 24 -> 6
        assert_eq!(reduce_keeping_masters(24), 6);
        // 55 -> 10 -> 1
        assert_eq!(reduce_keeping_masters(55), 1);
    }

    #[test]
    fn keeping_masters_range() {
        for n in 0..5_000 {
            let r = reduce_keeping_masters(n);
            assert!(r <= 9 || is_master_number(r), "{n} reduced to {r}");
        }
    }
}
