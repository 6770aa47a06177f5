//! End-to-end tests through the public facade

use std::io::Cursor;

use veilcrypt_symmetric::error::Error;
use veilcrypt_symmetric::{Encryptor, NonceSequence, Preset};

const GCM128: &str = "AES128-GCM-DEFAULT";
const GCM256: &str = "AES256-GCM-DEFAULT";
const OCB128: &str = "AES128-OCB-DEFAULT";
const OCB256: &str = "AES256-OCB-DEFAULT";

#[test]
fn five_byte_message_grows_by_exactly_one_tag() {
    let enc = Encryptor::new(GCM128).unwrap();
    let key = enc.key_gen();
    let sealed = enc.encrypt(None, b"hello", key.as_ref()).unwrap();
    assert_eq!(sealed.len(), 5 + enc.info().tag_size);
    assert_eq!(enc.decrypt(None, &sealed, key.as_ref()).unwrap(), b"hello");
}

#[test]
fn every_preset_round_trips() {
    for token in [GCM128, GCM256, OCB128, OCB256] {
        let enc = Encryptor::new(token).unwrap();
        let key = enc.key_gen();
        let sealed = enc
            .encrypt(Some(b"aad"), b"one message per instance", key.as_ref())
            .unwrap();
        let opened = enc.decrypt(Some(b"aad"), &sealed, key.as_ref()).unwrap();
        assert_eq!(opened, b"one message per instance");
    }
}

#[test]
fn unknown_preset_is_rejected() {
    let err = Encryptor::new("AES128-CTR-DEFAULT").unwrap_err();
    assert!(matches!(err, Error::UnknownPreset { .. }));
}

#[test]
fn key_gen_matches_the_preset() {
    let enc = Encryptor::new(GCM256).unwrap();
    assert_eq!(enc.key_gen().len(), 32);
    let enc = Encryptor::new(OCB128).unwrap();
    assert_eq!(enc.key_gen().len(), 16);
}

#[test]
fn wrong_key_fails_authentication() {
    let enc = Encryptor::new(OCB256).unwrap();
    let key = enc.key_gen();
    let other_key = enc.key_gen();
    let sealed = enc.encrypt(None, b"bound to its key", key.as_ref()).unwrap();

    let err = enc.decrypt(None, &sealed, other_key.as_ref()).unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
}

#[test]
fn wrong_key_length_is_a_length_error() {
    let enc = Encryptor::new(GCM128).unwrap();
    let err = enc.encrypt(None, b"x", &[0u8; 32]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 16,
            actual: 32,
            ..
        }
    ));
}

#[test]
fn supplied_nonce_is_honored() {
    let nonce = [0x42u8; 12];
    let enc = Encryptor::with_nonce(GCM128, &nonce).unwrap();
    assert_eq!(enc.nonce(), &nonce);

    let key = enc.key_gen();
    let sealed = enc.encrypt(None, b"pinned nonce", key.as_ref()).unwrap();

    // A second instance bound to the same nonce and key can open it.
    let dec = Encryptor::with_nonce(GCM128, &nonce).unwrap();
    assert_eq!(dec.decrypt(None, &sealed, key.as_ref()).unwrap(), b"pinned nonce");
}

#[test]
fn with_nonce_rejects_wrong_length() {
    assert!(Encryptor::with_nonce(GCM128, &[0u8; 16]).is_err());
}

#[test]
fn nonce_sequence_drives_many_messages() {
    let enc = Encryptor::new(GCM256).unwrap();
    let key = enc.key_gen();
    let mut seq = NonceSequence::new(enc.nonce()).unwrap();

    let mut sealed_messages = Vec::new();
    for i in 0..5u8 {
        let nonce = seq.next_nonce().unwrap();
        let enc = Encryptor::with_nonce(GCM256, &nonce).unwrap();
        sealed_messages.push((nonce, enc.encrypt(None, &[i; 10], key.as_ref()).unwrap()));
    }

    for (i, (nonce, sealed)) in sealed_messages.iter().enumerate() {
        let dec = Encryptor::with_nonce(GCM256, nonce).unwrap();
        assert_eq!(
            dec.decrypt(None, sealed, key.as_ref()).unwrap(),
            vec![i as u8; 10]
        );
    }
}

#[test]
fn preset_accessor_round_trips_the_token() {
    let enc = Encryptor::new(OCB128).unwrap();
    assert_eq!(enc.preset(), Preset::Aes128OcbDefault);
    assert_eq!(enc.preset().token(), OCB128);
}

#[test]
fn buffer_streaming_round_trips() {
    let enc = Encryptor::new(GCM128).unwrap();
    let key = enc.key_gen();
    let payload: Vec<u8> = (0..100_000).map(|i| (i % 241) as u8).collect();

    let wire = enc
        .encrypt_buffer(None, Cursor::new(&payload), Vec::new(), key.as_ref())
        .unwrap();
    assert!(wire.len() > payload.len());

    let recovered = enc
        .decrypt_buffer(None, Cursor::new(&wire), Vec::new(), key.as_ref())
        .unwrap();
    assert_eq!(recovered, payload);
}

#[test]
fn buffer_streaming_rejects_tampering() {
    let enc = Encryptor::new(OCB256).unwrap();
    let key = enc.key_gen();

    let mut wire = enc
        .encrypt_buffer(None, Cursor::new(b"tamper target".as_ref()), Vec::new(), key.as_ref())
        .unwrap();
    let mid = wire.len() / 2;
    wire[mid] ^= 0x01;

    assert!(enc
        .decrypt_buffer(None, Cursor::new(&wire), Vec::new(), key.as_ref())
        .is_err());
}
