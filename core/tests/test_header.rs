// Size header suite: byte layout, truncation, and the declared-length sanity bound.

#[cfg(test)]
mod tests {
    use lzframe_core::constants::{MAX_DECLARED_LEN, SIZE_HEADER_LEN};
    use lzframe_core::headers::{
        decode_size_header_le, encode_size_header_le, split_frame, HeaderError, SizeHeader,
    };

// ## 1. Layout

    #[test]
    fn header_is_eight_bytes_little_endian() {
        let bytes = encode_size_header_le(&SizeHeader { original_len: 0x0102_0304_0506_0708 });
        assert_eq!(bytes.len(), SIZE_HEADER_LEN);
        assert_eq!(bytes, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn zero_length_is_written_verbatim() {
        assert_eq!(encode_size_header_le(&SizeHeader::new(0)), [0u8; 8]);
    }

    #[test]
    fn header_length_fidelity_up_to_u32_max() {
        for len in [1usize, 255, 256, 65_535, 1 << 24, u32::MAX as usize] {
            let bytes = encode_size_header_le(&SizeHeader::new(len));
            let back = decode_size_header_le(&bytes).unwrap();
            assert_eq!(back.original_len, len as u64);
        }
    }

// ## 2. Truncation

    #[test]
    fn short_buffers_are_rejected() {
        for have in 0..SIZE_HEADER_LEN {
            let buf = vec![0xFFu8; have];
            assert_eq!(
                decode_size_header_le(&buf),
                Err(HeaderError::BufferTooShort { have, need: SIZE_HEADER_LEN })
            );
        }
    }

    #[test]
    fn split_frame_borrows_payload() {
        let mut frame = encode_size_header_le(&SizeHeader::new(42)).to_vec();
        frame.extend_from_slice(b"payload");

        let (header, payload) = split_frame(&frame).unwrap();
        assert_eq!(header.original_len, 42);
        assert_eq!(payload, b"payload");
    }

    #[test]
    fn split_frame_header_only_has_empty_payload() {
        let frame = encode_size_header_le(&SizeHeader::new(7));
        let (_, payload) = split_frame(&frame).unwrap();
        assert!(payload.is_empty());
    }

// ## 3. Sanity bound

    #[test]
    fn validate_accepts_bound_itself() {
        let h = SizeHeader { original_len: MAX_DECLARED_LEN };
        assert_eq!(h.validate(MAX_DECLARED_LEN).unwrap() as u64, MAX_DECLARED_LEN);
    }

    #[test]
    fn validate_rejects_above_half_range() {
        let h = SizeHeader { original_len: MAX_DECLARED_LEN + 1 };
        assert_eq!(
            h.validate(MAX_DECLARED_LEN),
            Err(HeaderError::DeclaredLenTooLarge {
                declared: MAX_DECLARED_LEN + 1,
                max: MAX_DECLARED_LEN,
            })
        );
        assert!(SizeHeader { original_len: u64::MAX }.validate(MAX_DECLARED_LEN).is_err());
    }

    #[test]
    fn validate_honours_tighter_bound() {
        let h = SizeHeader { original_len: 1025 };
        assert!(h.validate(1024).is_err());
        assert_eq!(h.validate(4096).unwrap(), 1025);
    }

    #[test]
    fn validate_never_loosens_past_platform_bound() {
        let h = SizeHeader { original_len: MAX_DECLARED_LEN + 1 };
        assert!(matches!(
            h.validate(u64::MAX),
            Err(HeaderError::DeclaredLenTooLarge { max: MAX_DECLARED_LEN, .. })
        ));
    }

// ## 4. Formatting

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            HeaderError::BufferTooShort { have: 3, need: 8 }.to_string(),
            "frame too short for size header: 3 < 8"
        );
        assert_eq!(
            HeaderError::DeclaredLenTooLarge { declared: 10, max: 5 }.to_string(),
            "declared length 10 exceeds bound 5"
        );
    }
}
