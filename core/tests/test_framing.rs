#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use aovzstd_core::{
        constants::{AES_MAGIC, ZSTD_FRAME_MAGIC},
        framing::{find_marker, find_native_frame},
    };

    #[test]
    fn finds_magic_at_start() {
        let mut buf = ZSTD_FRAME_MAGIC.to_vec();
        buf.extend_from_slice(&[0; 8]);
        assert_eq!(find_native_frame(&buf), Some(0));
    }

    #[test]
    fn finds_magic_after_prefix() {
        let mut buf = vec![0x22, 0x4A, 0x00, 0xEF, 0x00, 0x01, 0x00, 0x00];
        buf.extend_from_slice(&ZSTD_FRAME_MAGIC);
        assert_eq!(find_native_frame(&buf), Some(8));
    }

    #[test]
    fn leftmost_match_wins() {
        let mut buf = vec![0xFF; 3];
        buf.extend_from_slice(&ZSTD_FRAME_MAGIC);
        buf.push(0);
        buf.extend_from_slice(&ZSTD_FRAME_MAGIC);
        assert_eq!(find_native_frame(&buf), Some(3));
    }

    #[test]
    fn magic_in_last_four_bytes_is_found() {
        let mut buf = vec![0u8; 9];
        buf.extend_from_slice(&ZSTD_FRAME_MAGIC);
        assert_eq!(find_native_frame(&buf), Some(9));
    }

    #[test]
    fn short_and_empty_buffers_have_no_frame() {
        assert_eq!(find_native_frame(&[]), None);
        assert_eq!(find_native_frame(&ZSTD_FRAME_MAGIC[..3]), None);
    }

    #[test]
    fn partial_magic_does_not_match() {
        let buf = [0x28, 0xB5, 0x2F, 0x00, 0x28, 0xB5];
        assert_eq!(find_native_frame(&buf), None);
    }

    #[test]
    fn find_marker_takes_any_marker() {
        let mut buf = vec![1, 2];
        buf.extend_from_slice(&AES_MAGIC);
        assert_eq!(find_marker(&buf, &AES_MAGIC), Some(2));
        assert_eq!(find_marker(&buf, &ZSTD_FRAME_MAGIC), None);
    }

    proptest! {
        #[test]
        fn prop_result_is_lowest_matching_index(buf in proptest::collection::vec(prop_oneof![Just(0x28u8), Just(0xB5), Just(0x2F), Just(0xFD), any::<u8>()], 0..256)) {
            let expected = (0..buf.len().saturating_sub(3)).find(|&i| buf[i..i + 4] == ZSTD_FRAME_MAGIC);
            prop_assert_eq!(find_native_frame(&buf), expected);
        }
    }
}
