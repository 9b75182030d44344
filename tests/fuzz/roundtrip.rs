use bolero::check;

/// P1 (roundtrip) and P5 (length fidelity) over arbitrary AD/message pairs.
#[test]
fn fuzz_roundtrip_and_length_fidelity() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(ad, msg)| {
            let key = [0x2Au8; 16];
            let nonce = [0x3Bu8; 12];
            let (ct, tag) = grain128_aead::encrypt(key, nonce, ad, msg);

            assert_eq!(ct.len(), msg.len());
            assert_eq!(tag.len(), 8);

            let (pt, verified) = grain128_aead::decrypt(key, nonce, ad, &ct, tag);
            assert!(verified);
            assert_eq!(&pt, msg);
        });
}
