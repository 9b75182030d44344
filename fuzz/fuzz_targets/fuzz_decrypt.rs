#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    key: [u8; 16],
    nonce: [u8; 12],
    ad: Vec<u8>,
    msg: Vec<u8>,
    tag_byte_to_flip: u8,
}

fuzz_target!(|input: Input| {
    let (ct, tag) = grain128_aead::encrypt(input.key, input.nonce, &input.ad, &input.msg);

    // P2: any single-bit tag corruption must fail verification and
    // zeroize the returned plaintext.
    let mut bad_tag = tag;
    let idx = usize::from(input.tag_byte_to_flip) % bad_tag.len();
    bad_tag[idx] ^= 0x01;
    let (pt, verified) = grain128_aead::decrypt(input.key, input.nonce, &input.ad, &ct, bad_tag);
    assert!(!verified, "corrupted tag must not verify");
    assert!(pt.iter().all(|&b| b == 0), "plaintext must be zeroized on verification failure");
    assert_eq!(pt.len(), ct.len());

    // Untouched inputs must still roundtrip.
    let (recovered, verified) = grain128_aead::decrypt(input.key, input.nonce, &input.ad, &ct, tag);
    assert!(verified);
    assert_eq!(recovered, input.msg);
});
