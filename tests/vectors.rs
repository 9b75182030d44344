//! Scenario A–F end-to-end vectors (§8.2), embedded as literal byte
//! constants rather than loaded from a KAT file — a file-based loader is
//! explicitly out of scope (§1).

use hex_literal::hex;

#[test]
fn scenario_a_all_zero() {
    let key = [0u8; 16];
    let nonce = [0u8; 12];
    let (ct, tag) = grain128_aead::encrypt(key, nonce, b"", b"");
    assert!(ct.is_empty());
    assert_eq!(tag, hex!("31f6076026a142ac"));

    let (pt, verified) = grain128_aead::decrypt(key, nonce, b"", &ct, tag);
    assert!(verified);
    assert!(pt.is_empty());
}

#[test]
fn scenario_b_single_byte_no_ad() {
    let key = [0u8; 16];
    let nonce = [0u8; 12];
    let pt = [0x00u8];
    let (ct, tag) = grain128_aead::encrypt(key, nonce, b"", &pt);
    assert_eq!(ct.len(), 1);

    let (recovered, verified) = grain128_aead::decrypt(key, nonce, b"", &ct, tag);
    assert!(verified);
    assert_eq!(recovered, pt);
}

#[test]
fn scenario_c_typical_message() {
    let key = hex!("08ecc6d3edaa57cbdf4bd4b6f43869fa");
    let nonce = hex!("f8f755034bff227fa107fac0");
    let ad = hex!("f7b04b12051680d1af943e142e9e0e95e24c6bdf753edb4aa12480cc8d179ca5");
    let pt = hex!("38937413bedf5c753d0eaebc61467b814b4e6e9d6c1ab6ec4fbde192e4581afa");
    let expected_ct = hex!("1cb5edd9aed81348df76ad4c197322daa0ec40f92020725d62fd52edf61906c9");
    let expected_tag = hex!("1cb420123b94d3a7");

    let (ct, tag) = grain128_aead::encrypt(key, nonce, &ad, &pt);
    assert_eq!(ct, expected_ct);
    assert_eq!(tag, expected_tag);

    let (recovered, verified) = grain128_aead::decrypt(key, nonce, &ad, &ct, tag);
    assert!(verified);
    assert_eq!(recovered, pt);
}

#[test]
fn scenario_d_long_ad_empty_plaintext() {
    let key = [0x07u8; 16];
    let nonce = [0x09u8; 12];
    let ad = [0x5Au8; 200];
    let (ct, tag) = grain128_aead::encrypt(key, nonce, &ad, b"");
    assert!(ct.is_empty());

    let (pt, verified) = grain128_aead::decrypt(key, nonce, &ad, &ct, tag);
    assert!(verified);
    assert!(pt.is_empty());
}

#[test]
fn scenario_e_large_message_and_tamper() {
    let key = [0x13u8; 16];
    let nonce = [0x37u8; 12];
    let ad = [0x77u8; 32];
    let pt: Vec<u8> = (0..4096u32).map(|i| (i % 256) as u8).collect();
    let (ct, tag) = grain128_aead::encrypt(key, nonce, &ad, &pt);

    let (recovered, verified) = grain128_aead::decrypt(key, nonce, &ad, &ct, tag);
    assert!(verified);
    assert_eq!(recovered, pt);

    let mut bad_tag = tag;
    bad_tag[7] ^= 0x01;
    let (zeroed, verified) = grain128_aead::decrypt(key, nonce, &ad, &ct, bad_tag);
    assert!(!verified);
    assert!(zeroed.iter().all(|&b| b == 0));
    assert_eq!(zeroed.len(), ct.len());
}

#[test]
fn scenario_f_in_place_matches_out_of_place() {
    let key = [0x99u8; 16];
    let nonce = [0x88u8; 12];
    let pt: Vec<u8> = (0..256u32).map(|i| ((i * 31 + 7) % 256) as u8).collect();

    let (ct_out_of_place, tag_out_of_place) = grain128_aead::encrypt(key, nonce, b"scenario-f", &pt);

    let mut buf = pt.clone();
    let tag_in_place = grain128_aead::encrypt_in_place(key, nonce, b"scenario-f", &mut buf);

    assert_eq!(buf, ct_out_of_place);
    assert_eq!(tag_in_place, tag_out_of_place);
}
