//! Product of All Other Elements
//!
//! For every index of an integer slice, computes the product of all the other
//! elements without using division. Two linear passes share the output buffer:
//! the forward pass stores the product of everything before each index, the
//! backward pass multiplies in the product of everything after it.
//!
//! Complexity: O(n) time, one output allocation plus two scalar accumulators.

use thiserror::Error;

/// Smallest input length for which "all other elements" is non-empty.
pub const MIN_LEN: usize = 2;

/// Errors returned by the product-except-self functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// The input has fewer than [`MIN_LEN`] elements.
    #[error("Getting the product of numbers at other indices requires at least 2 numbers")]
    InvalidArgument { len: usize },
    /// The product at `index` does not fit in an `i64`.
    #[error("product of all numbers except index {index} overflows i64")]
    Overflow { index: usize },
}

/// Compute, for each index, the product of every other element.
///
/// Multiplication wraps on overflow. When the true product at an index fits
/// in `i64` the wrapped value is exact, so only results that cannot be
/// represented anyway are affected. Use [`checked_product_except_self`] to
/// detect those.
///
/// # Arguments
/// * `values` - The input integers, at least two of them
///
/// # Example
///
/// ```
/// use array_transforms::product_except_self;
///
/// let products = product_except_self(&[1, 7, 3, 4]).unwrap();
/// assert_eq!(products, vec![84, 12, 28, 21]);
/// ```
pub fn product_except_self(values: &[i64]) -> Result<Vec<i64>, ProductError> {
    ensure_min_len(values)?;

    let mut products = Vec::with_capacity(values.len());

    // Product of everything strictly before each index
    let mut product_so_far = 1i64;
    for &value in values {
        products.push(product_so_far);
        product_so_far = product_so_far.wrapping_mul(value);
    }

    // Fold in the product of everything strictly after each index
    product_so_far = 1;
    for (slot, &value) in products.iter_mut().zip(values).rev() {
        *slot = slot.wrapping_mul(product_so_far);
        product_so_far = product_so_far.wrapping_mul(value);
    }

    log::trace!("product_except_self: {} values", values.len());
    Ok(products)
}

/// Like [`product_except_self`], but fails with [`ProductError::Overflow`]
/// instead of wrapping.
///
/// Zeros are handled up front: with two or more of them every product is
/// zero, and with exactly one only the zero's own slot can be non-zero. The
/// remaining zero-free case runs the two-pass algorithm in `i128` and narrows
/// each product to `i64` at the end. Without zeros every running product is
/// a factor of some output, so its magnitude never exceeds that output's; an
/// `i128` overflow therefore means the output is far outside `i64`, and an
/// in-range result such as `i64::MIN` is never rejected because a partial
/// product briefly reached `2^63`.
pub fn checked_product_except_self(values: &[i64]) -> Result<Vec<i64>, ProductError> {
    ensure_min_len(values)?;

    let mut zeros = values.iter().enumerate().filter(|&(_, &v)| v == 0);
    match (zeros.next(), zeros.next()) {
        (Some(_), Some(_)) => return Ok(vec![0; values.len()]),
        (Some((zero_index, _)), None) => {
            let mut products = vec![0; values.len()];
            products[zero_index] = values
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != zero_index)
                .try_fold(1i128, |acc, (_, &v)| acc.checked_mul(i128::from(v)))
                .and_then(|p| i64::try_from(p).ok())
                .ok_or(ProductError::Overflow { index: zero_index })?;
            return Ok(products);
        }
        _ => {}
    }

    let n = values.len();
    let mut wide = Vec::with_capacity(n);

    let mut product_so_far = 1i128;
    for (i, &value) in values.iter().enumerate() {
        wide.push(product_so_far);
        if i + 1 < n {
            // Factor of the product at i + 1
            product_so_far = product_so_far
                .checked_mul(i128::from(value))
                .ok_or(ProductError::Overflow { index: i + 1 })?;
        }
    }

    product_so_far = 1;
    for index in (0..n).rev() {
        wide[index] = wide[index]
            .checked_mul(product_so_far)
            .ok_or(ProductError::Overflow { index })?;
        if index > 0 {
            product_so_far = product_so_far
                .checked_mul(i128::from(values[index]))
                .ok_or(ProductError::Overflow { index: index - 1 })?;
        }
    }

    wide
        .into_iter()
        .enumerate()
        .map(|(index, p)| i64::try_from(p).map_err(|_| ProductError::Overflow { index }))
        .collect()
}

/// Check `products` against `values` without division.
///
/// For every `i` with `values[i] != 0`, `products[i] * values[i]` must equal
/// the product of all values. Both sides are computed with wrapping
/// arithmetic, which keeps the identity exact even when results overflow.
pub fn verify_products(values: &[i64], products: &[i64]) -> bool {
    if values.len() != products.len() {
        return false;
    }
    let total = values.iter().fold(1i64, |acc, &v| acc.wrapping_mul(v));
    values
        .iter()
        .zip(products)
        .filter(|&(&v, _)| v != 0)
        .all(|(&v, &p)| p.wrapping_mul(v) == total)
}

fn ensure_min_len(values: &[i64]) -> Result<(), ProductError> {
    if values.len() < MIN_LEN {
        log::debug!("rejecting input of length {}", values.len());
        return Err(ProductError::InvalidArgument { len: values.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Quadratic reference without division.
    fn brute_force(values: &[i64]) -> Vec<i64> {
        (0..values.len())
            .map(|i| {
                values
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &v)| v)
                    .product()
            })
            .collect()
    }

    #[test]
    fn test_short_array() {
        assert_eq!(product_except_self(&[1, 2, 3]).unwrap(), vec![6, 3, 2]);
    }

    #[test]
    fn test_longer_array() {
        assert_eq!(
            product_except_self(&[8, 2, 4, 3, 1, 5]).unwrap(),
            vec![120, 480, 240, 320, 960, 192]
        );
    }

    #[test]
    fn test_one_zero() {
        assert_eq!(
            product_except_self(&[6, 2, 0, 3]).unwrap(),
            vec![0, 0, 36, 0]
        );
    }

    #[test]
    fn test_two_zeros() {
        assert_eq!(
            product_except_self(&[4, 0, 9, 1, 0]).unwrap(),
            vec![0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(
            product_except_self(&[-3, 8, 4]).unwrap(),
            vec![32, -12, -24]
        );
        assert_eq!(
            product_except_self(&[-7, -1, -4, -2]).unwrap(),
            vec![-8, -56, -14, -28]
        );
    }

    #[test]
    fn test_two_elements_swap() {
        assert_eq!(product_except_self(&[5, -9]).unwrap(), vec![-9, 5]);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            product_except_self(&[]),
            Err(ProductError::InvalidArgument { len: 0 })
        );
        assert_eq!(
            product_except_self(&[1]),
            Err(ProductError::InvalidArgument { len: 1 })
        );
        assert_eq!(
            checked_product_except_self(&[7]),
            Err(ProductError::InvalidArgument { len: 1 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = product_except_self(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Getting the product of numbers at other indices requires at least 2 numbers"
        );
    }

    #[test]
    fn test_random_matches_brute_force() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(2..12);
            let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-9..=9)).collect();
            assert_eq!(product_except_self(&values).unwrap(), brute_force(&values));
            assert_eq!(
                checked_product_except_self(&values).unwrap(),
                brute_force(&values)
            );
        }
    }

    #[test]
    fn test_wrapping_intermediate_is_exact() {
        // The prefix 2^62 * 4 wraps, but every reported product fits.
        let big = 1i64 << 62;
        let values = [big, 4, 0, 0];
        assert_eq!(product_except_self(&values).unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(checked_product_except_self(&values).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_verify_products() {
        let values = [8, 2, 4, 3, 1, 5];
        assert!(verify_products(&values, &[120, 480, 240, 320, 960, 192]));
        assert!(!verify_products(&values, &[120, 480, 240, 320, 960, 191]));
        assert!(!verify_products(&values, &[120, 480]));

        let mut rng = rand::thread_rng();
        let wide: Vec<i64> = (0..64).map(|_| rng.gen()).collect();
        assert!(verify_products(&wide, &product_except_self(&wide).unwrap()));
    }

    #[test]
    fn test_checked_single_zero() {
        assert_eq!(
            checked_product_except_self(&[6, 2, 0, 3]).unwrap(),
            vec![0, 0, 36, 0]
        );
        let big = i64::MAX;
        assert_eq!(
            checked_product_except_self(&[big, 2, 0]),
            Err(ProductError::Overflow { index: 2 })
        );
    }

    #[test]
    fn test_checked_overflow() {
        let big = 1i64 << 40;
        assert_eq!(
            checked_product_except_self(&[big, big, 1]),
            Err(ProductError::Overflow { index: 2 })
        );
        assert!(matches!(
            checked_product_except_self(&[1, big, big]),
            Err(ProductError::Overflow { .. })
        ));
    }

    #[test]
    fn test_checked_reaches_min_through_negative_prefix() {
        // The prefix MIN * -1 is 2^63, yet every product fits in i64.
        let min = i64::MIN;
        assert_eq!(
            checked_product_except_self(&[min, -1, -1, -1]).unwrap(),
            vec![-1, min, min, min]
        );
        assert_eq!(
            product_except_self(&[min, -1, -1, -1]).unwrap(),
            vec![-1, min, min, min]
        );
        assert_eq!(
            checked_product_except_self(&[-1, min, -1, -1]).unwrap(),
            vec![min, -1, min, min]
        );
    }

    #[test]
    fn test_checked_single_zero_reaches_min() {
        let min = i64::MIN;
        assert_eq!(
            checked_product_except_self(&[min, -1, -1, 0]).unwrap(),
            vec![0, 0, 0, min]
        );
        assert_eq!(
            checked_product_except_self(&[min, -1, 0]),
            Err(ProductError::Overflow { index: 2 })
        );
    }

    #[test]
    fn test_checked_min_overflow_is_reported() {
        let min = i64::MIN;
        assert_eq!(
            checked_product_except_self(&[min, -1, 1]),
            Err(ProductError::Overflow { index: 2 })
        );
        assert!(matches!(
            checked_product_except_self(&[min, min, min]),
            Err(ProductError::Overflow { .. })
        ));
    }

    #[test]
    fn test_checked_total_may_overflow() {
        // Product of all three overflows, but each pair fits.
        let v = 1i64 << 31;
        let expected = vec![1i64 << 62, 1 << 62, 1 << 62];
        assert_eq!(checked_product_except_self(&[v, v, v]).unwrap(), expected);
        assert_eq!(product_except_self(&[v, v, v]).unwrap(), expected);
    }
}
