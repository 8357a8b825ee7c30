//! Constants used by the hash tree and its digest scheme

/// Hash size in bytes (sha256)
pub const HASH_SIZE: usize = 32;

/// Length of a digest in its canonical lowercase hex form
pub const HEX_DIGEST_LENGTH: usize = 2 * HASH_SIZE;

/// Number of hex characters kept when a digest is shortened for reports
pub const SHORT_DIGEST_LENGTH: usize = 16;

/// Identifier of the digest and combine scheme.
///
/// Leaves are `sha256(data)`. Parents are `sha256(hex(left) || hex(right))`
/// where `hex` is the 64 character lowercase encoding of a child digest.
/// Changing any part of this alters every derived root.
pub const DIGEST_SCHEME: &str = "sha256/hex-concat/v1";

/// Number of levels needed to reach a single root from `leaf_count` leaves,
/// i.e. `ceil(log2(leaf_count))`.
#[inline]
pub const fn expected_proof_length(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        return 0;
    }
    leaf_count.next_power_of_two().trailing_zeros() as usize
}
