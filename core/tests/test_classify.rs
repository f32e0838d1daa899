#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use aovzstd_core::{
        classify::{classify, is_already_transformed, plan, Action, ItemState, SkipReason},
        config::Operation,
        constants::{AES_MAGIC, ENVELOPE_MAGIC},
    };

    #[test]
    fn aes_marker_is_foreign() {
        let mut buf = AES_MAGIC.to_vec();
        buf.extend_from_slice(&[0; 32]);
        assert_eq!(classify(&buf), ItemState::Foreign);
        assert!(is_already_transformed(&AES_MAGIC, &AES_MAGIC));
    }

    #[test]
    fn envelope_marker_is_wrapped() {
        assert_eq!(classify(&ENVELOPE_MAGIC), ItemState::Wrapped);
    }

    #[test]
    fn short_or_plain_is_unprocessed() {
        assert_eq!(classify(&[]), ItemState::Unprocessed);
        assert_eq!(classify(&AES_MAGIC[..3]), ItemState::Unprocessed);
        assert_eq!(classify(b"DDS |...."), ItemState::Unprocessed);
    }

    #[test]
    fn markers_sharing_a_prefix_are_distinct() {
        // Both markers start with 22 4A.
        assert!(!is_already_transformed(&ENVELOPE_MAGIC, &AES_MAGIC));
        let mut near = AES_MAGIC;
        near[3] = 0x01;
        assert_eq!(classify(&near), ItemState::Unprocessed);
    }

    #[test]
    fn compress_gate() {
        assert_eq!(plan(Operation::Compress, ItemState::Unprocessed), Action::Apply(Operation::Compress));
        assert_eq!(plan(Operation::Compress, ItemState::Foreign), Action::Skip(SkipReason::AlreadyTransformed));
        assert_eq!(plan(Operation::Compress, ItemState::Wrapped), Action::Skip(SkipReason::AlreadyWrapped));
    }

    #[test]
    fn decompress_gate() {
        assert_eq!(plan(Operation::Decompress, ItemState::Wrapped), Action::Apply(Operation::Decompress));
        assert_eq!(plan(Operation::Decompress, ItemState::Unprocessed), Action::Skip(SkipReason::NotWrapped));
        assert_eq!(plan(Operation::Decompress, ItemState::Foreign), Action::Skip(SkipReason::NotWrapped));
    }

    proptest! {
        #[test]
        fn prop_aes_prefix_always_skips_compress(tail in proptest::collection::vec(any::<u8>(), 0..128)) {
            let mut buf = AES_MAGIC.to_vec();
            buf.extend_from_slice(&tail);
            prop_assert_eq!(
                plan(Operation::Compress, classify(&buf)),
                Action::Skip(SkipReason::AlreadyTransformed)
            );
        }
    }
}
