use bolero::check;

/// P2: any tag corruption must fail verification and zeroize the returned
/// plaintext, for arbitrary AD/message/corruption-site combinations.
#[test]
fn fuzz_tag_corruption_fails_verification() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, u8, u8)>()
        .for_each(|(ad, msg, byte_idx, flip_mask)| {
            let key = [0x5Fu8; 16];
            let nonce = [0xD2u8; 12];
            let (ct, tag) = grain128_aead::encrypt(key, nonce, ad, msg);

            if *flip_mask == 0 {
                return;
            }
            let mut bad_tag = tag;
            let idx = usize::from(*byte_idx) % bad_tag.len();
            bad_tag[idx] ^= *flip_mask;

            let (pt, verified) = grain128_aead::decrypt(key, nonce, ad, &ct, bad_tag);
            assert!(!verified, "corrupted tag must not verify");
            assert!(pt.iter().all(|&b| b == 0), "plaintext must be zeroized on verification failure");
            assert_eq!(pt.len(), ct.len());
        });
}
