use super::*;
use crate::block::aes::Aes128;
use crate::error::Error;
use crate::types::SecretBytes;

// RFC 7253 Appendix A, AES-128-OCB-TAGLEN128

fn rfc7253_cipher() -> Aes128 {
    let key = SecretBytes::<16>::from_slice(
        &hex::decode("000102030405060708090a0b0c0d0e0f").unwrap(),
    )
    .unwrap();
    Aes128::new(&key)
}

fn rfc7253_nonce(last_byte: u8) -> Nonce<12> {
    let mut bytes = hex::decode("bbaa99887766554433221100").unwrap();
    bytes[11] = last_byte;
    Nonce::<12>::from_slice(&bytes).unwrap()
}

#[test]
fn empty_message_empty_aad() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x00));
    let output = ocb.internal_encrypt(&[], None).unwrap();
    assert_eq!(hex::encode(&output), "785407bfffc8ad9edcc5520ac9111ee6");

    assert!(ocb.internal_decrypt(&output, None).unwrap().is_empty());
}

#[test]
fn short_message_with_aad() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x01));
    let aad = hex::decode("0001020304050607").unwrap();
    let plaintext = hex::decode("0001020304050607").unwrap();

    let output = ocb.internal_encrypt(&plaintext, Some(&aad)).unwrap();
    assert_eq!(
        hex::encode(&output),
        "6820b3657b6f615a5725bda0d3b4eb3a257c9af1f8f03009"
    );

    let recovered = ocb.internal_decrypt(&output, Some(&aad)).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn aad_only() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x02));
    let aad = hex::decode("0001020304050607").unwrap();

    let output = ocb.internal_encrypt(&[], Some(&aad)).unwrap();
    assert_eq!(hex::encode(&output), "81017f8203f081277152fade694a0a00");
}

#[test]
fn short_message_no_aad() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x03));
    let plaintext = hex::decode("0001020304050607").unwrap();

    let output = ocb.internal_encrypt(&plaintext, None).unwrap();
    assert_eq!(
        hex::encode(&output),
        "45dd69f8f5aae72414054cd1f35d82760b2cd00d2f99bfa9"
    );
}

#[test]
fn full_block_with_aad() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x04));
    let aad = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();

    let output = ocb.internal_encrypt(&plaintext, Some(&aad)).unwrap();
    assert_eq!(
        hex::encode(&output),
        "571d535b60b277188be5147170a9a22c3ad7a4ff3835b8c5701c1ccec8fc3358"
    );

    let recovered = ocb.internal_decrypt(&output, Some(&aad)).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn round_trip_across_block_boundaries() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x09));
    for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 100] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let output = ocb.internal_encrypt(&plaintext, Some(b"header")).unwrap();
        assert_eq!(output.len(), len + OCB_TAG_SIZE);
        let recovered = ocb.internal_decrypt(&output, Some(b"header")).unwrap();
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn tampered_tag_is_rejected() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x05));
    let mut output = ocb.internal_encrypt(b"tamper me", None).unwrap();
    let last = output.len() - 1;
    output[last] ^= 0x80;

    let err = ocb.internal_decrypt(&output, None).unwrap_err();
    assert!(matches!(err, Error::Authentication { algorithm: "OCB" }));
}

#[test]
fn input_shorter_than_tag_is_a_length_error() {
    let ocb = Ocb::new(rfc7253_cipher(), &rfc7253_nonce(0x06));
    let err = ocb.internal_decrypt(&[0u8; 10], None).unwrap_err();
    assert!(matches!(err, Error::Length { needed: 16, got: 10, .. }));
}
