//! # Tipset-Key Hashing
//!
//! Deterministic mapping from a tipset key to a single stable string hash,
//! used as the canonical block-identifier hash on the wire. Callers compare
//! these hashes across requests and peers, so byte-identical keys must
//! produce byte-identical output.

use sha2::{Digest, Sha256};

use crate::domain::{NetworkApiError, TipSetKey};

/// Hash a tipset key into its canonical hex string.
///
/// # Algorithm
///
/// 1. Feed each block CID into SHA-256 in key order, each as its encoding
///    length (u64, big-endian) followed by the encoding bytes. The length
///    prefix keeps CID boundaries unambiguous, so two keys only hash equal
///    when their CID sequences are equal.
/// 2. Hex-encode the digest.
///
/// Fails with [`NetworkApiError::TipSetHashFailure`] when the key is empty
/// or any CID has an empty byte encoding, since such a key has no canonical
/// encoding to hash.
pub fn hash_tip_set_key(key: &TipSetKey) -> Result<String, NetworkApiError> {
    if key.is_empty() {
        return Err(NetworkApiError::TipSetHashFailure(
            "tipset key has no block cids".to_string(),
        ));
    }

    let mut hasher = Sha256::new();
    for cid in key.cids() {
        if cid.bytes().is_empty() {
            return Err(NetworkApiError::TipSetHashFailure(format!(
                "block cid `{}` has no byte encoding",
                cid.display()
            )));
        }
        hasher.update((cid.bytes().len() as u64).to_be_bytes());
        hasher.update(cid.bytes());
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlockCid;
    use proptest::prelude::*;

    fn key_of(byte_sets: &[&[u8]]) -> TipSetKey {
        TipSetKey::new(
            byte_sets
                .iter()
                .enumerate()
                .map(|(i, b)| BlockCid::new(b.to_vec(), format!("cid-{i}")))
                .collect(),
        )
    }

    #[test]
    fn equal_keys_hash_equal() {
        let a = key_of(&[&[1, 2, 3], &[4, 5]]);
        let b = key_of(&[&[1, 2, 3], &[4, 5]]);
        assert_eq!(hash_tip_set_key(&a).unwrap(), hash_tip_set_key(&b).unwrap());
    }

    #[test]
    fn cid_order_changes_the_hash() {
        let a = key_of(&[&[1], &[2]]);
        let b = key_of(&[&[2], &[1]]);
        assert_ne!(hash_tip_set_key(&a).unwrap(), hash_tip_set_key(&b).unwrap());
    }

    #[test]
    fn shifting_cid_boundaries_changes_the_hash() {
        // Same bytes overall, split at a different CID boundary.
        let a = key_of(&[&[1, 2], &[3]]);
        let b = key_of(&[&[1], &[2, 3]]);
        assert_ne!(hash_tip_set_key(&a).unwrap(), hash_tip_set_key(&b).unwrap());
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = hash_tip_set_key(&TipSetKey::new(vec![])).unwrap_err();
        assert!(matches!(err, NetworkApiError::TipSetHashFailure(_)));
    }

    #[test]
    fn cid_without_encoding_is_rejected() {
        let key = TipSetKey::new(vec![BlockCid::new(vec![], "bafy-malformed")]);
        let err = hash_tip_set_key(&key).unwrap_err();
        assert!(err.to_string().contains("bafy-malformed"));
    }

    #[test]
    fn output_is_hex_of_sha256_width() {
        let hash = hash_tip_set_key(&key_of(&[&[7; 38]])).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    proptest! {
        #[test]
        fn hashing_is_deterministic(cids in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..64), 1..8)) {
            let byte_sets: Vec<&[u8]> = cids.iter().map(Vec::as_slice).collect();
            let first = hash_tip_set_key(&key_of(&byte_sets)).unwrap();
            let second = hash_tip_set_key(&key_of(&byte_sets)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn distinct_keys_hash_distinct(a in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..16), 1..5),
                                       b in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..16), 1..5)) {
            prop_assume!(a != b);
            let a_sets: Vec<&[u8]> = a.iter().map(Vec::as_slice).collect();
            let b_sets: Vec<&[u8]> = b.iter().map(Vec::as_slice).collect();
            let ha = hash_tip_set_key(&key_of(&a_sets)).unwrap();
            let hb = hash_tip_set_key(&key_of(&b_sets)).unwrap();
            prop_assert_ne!(ha, hb);
        }
    }
}
