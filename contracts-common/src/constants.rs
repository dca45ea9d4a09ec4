//! Constants that parameterize the staking ledger and the reward protocol

/// The number of bytes in a hash digest
pub const HASH_OUTPUT_SIZE: usize = 32;

/// The number of bytes it takes to represent an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of bytes it takes to represent an unsigned 256-bit integer
pub const NUM_BYTES_U256: usize = 32;

/// The number of bytes it takes to represent a secp256k1 ECDSA signature
/// as expected by the Ethereum `ecRecover` precompile.
///
/// Concretely, this is the concatenation of the `r` and `s` values of the
/// signature, and `v`, a 1-byte recovery identifier
pub const NUM_BYTES_SIGNATURE: usize = 65;

/// The number of bytes in a commitment pre-image: a tightly-packed
/// `(uint256 amount, bytes32 salt, address owner)` triple
pub const NUM_BYTES_COMMITMENT_PREIMAGE: usize =
    NUM_BYTES_U256 + HASH_OUTPUT_SIZE + NUM_BYTES_ADDRESS;

/// The denominator used to interpret APY values expressed in basis points
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The number of seconds in a (non-leap) year, the time base of the APY
/// reward formula
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
