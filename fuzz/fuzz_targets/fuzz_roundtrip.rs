#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    key: [u8; 16],
    nonce: [u8; 12],
    ad: Vec<u8>,
    msg: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let (ct, tag) = grain128_aead::encrypt(input.key, input.nonce, &input.ad, &input.msg);
    assert_eq!(ct.len(), input.msg.len(), "P5: ciphertext length must equal plaintext length");
    assert_eq!(tag.len(), 8, "P5: tag is always 8 bytes");

    let (pt, verified) = grain128_aead::decrypt(input.key, input.nonce, &input.ad, &ct, tag);
    assert!(verified, "P1: roundtrip must verify");
    assert_eq!(pt, input.msg, "P1: roundtrip must recover the original plaintext");
});
