use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn block_from_hex(s: &str) -> [u8; 16] {
    let bytes = hex::decode(s).unwrap();
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    block
}

// FIPS 197 Appendix C.1
#[test]
fn aes128_known_answer() {
    let key = SecretBytes::<16>::from_slice(&hex::decode("000102030405060708090a0b0c0d0e0f").unwrap()).unwrap();
    let cipher = Aes128::new(&key);

    let mut block = block_from_hex("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&mut block);
    assert_eq!(block, block_from_hex("69c4e0d86a7b0430d8cdb78070b4c55a"));

    cipher.decrypt_block(&mut block);
    assert_eq!(block, block_from_hex("00112233445566778899aabbccddeeff"));
}

// FIPS 197 Appendix C.3
#[test]
fn aes256_known_answer() {
    let key = SecretBytes::<32>::from_slice(
        &hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap(),
    )
    .unwrap();
    let cipher = Aes256::new(&key);

    let mut block = block_from_hex("00112233445566778899aabbccddeeff");
    cipher.encrypt_block(&mut block);
    assert_eq!(block, block_from_hex("8ea2b7ca516745bfeafc49904b496089"));

    cipher.decrypt_block(&mut block);
    assert_eq!(block, block_from_hex("00112233445566778899aabbccddeeff"));
}

#[test]
fn round_trip_random_blocks() {
    let mut rng = StdRng::seed_from_u64(1);
    let cipher = Aes128::new(&Aes128::generate_key(&mut rng));
    for _ in 0..32 {
        let original = {
            let mut b = [0u8; 16];
            rand::RngCore::fill_bytes(&mut rng, &mut b);
            b
        };
        let mut block = original;
        cipher.encrypt_block(&mut block);
        assert_ne!(block, original);
        cipher.decrypt_block(&mut block);
        assert_eq!(block, original);
    }
}

#[test]
fn batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(2);
    let cipher = Aes256::new(&Aes256::generate_key(&mut rng));

    let mut batch = [[0u8; 16]; AES_PARALLEL_BLOCKS];
    for block in batch.iter_mut() {
        rand::RngCore::fill_bytes(&mut rng, block);
    }
    let mut sequential = batch;

    cipher.encrypt_blocks(&mut batch);
    for block in sequential.iter_mut() {
        cipher.encrypt_block(block);
    }
    assert_eq!(batch, sequential);

    cipher.decrypt_blocks(&mut batch);
    for block in sequential.iter_mut() {
        cipher.decrypt_block(block);
    }
    assert_eq!(batch, sequential);
}

#[test]
fn sbox_pair_inverts() {
    for x in 0u8..=255 {
        assert_eq!(inv_sbox(sbox(x)), x);
    }
    // FIPS 197 spot values
    assert_eq!(sbox(0x00), 0x63);
    assert_eq!(sbox(0x53), 0xed);
}

#[test]
fn key_schedule_first_and_last_words() {
    // FIPS 197 Appendix A.1 expansion of the AES-128 example key
    let key = SecretBytes::<16>::from_slice(&hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap()).unwrap();
    let cipher = Aes128::new(&key);
    let schedule = cipher.round_keys.as_ref();
    assert_eq!(&schedule[..4], &[0x2b, 0x7e, 0x15, 0x16]);
    assert_eq!(&schedule[172..176], &[0xb6, 0x63, 0x0c, 0xa6]);
}
