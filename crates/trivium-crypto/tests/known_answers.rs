//! Known-answer tests against the ECRYPT Trivium test vectors
//!
//! Each vector is checked at the three published sample windows: bytes
//! 0..64, 448..512 and 131008..131072 of the keystream.

#![allow(clippy::unwrap_used)]

use trivium_crypto::{KeystreamSource, Trivium};

struct KnownAnswer {
    name: &'static str,
    key: &'static str,
    iv: &'static str,
    stream_0: [&'static str; 2],
    stream_448: [&'static str; 2],
    stream_131008: [&'static str; 2],
}

const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "key_msb_set",
        key: "80000000000000000000",
        iv: "00000000000000000000",
        stream_0: [
            "38eb86ff730d7a9caf8df13a4420540dbb7b651464c87501552041c249f29a64",
            "d2fbf515610921ebe06c8f92cecf7f8098ff20cccc6a62b97be8ef7454fc80f9",
        ],
        stream_448: [
            "ebf14772061c210843c18cea2d2a275ae02fcb18e5d7942455ff77524e8a4ca5",
            "1e369a847d1aeefb9002fcd02342983ceafa9d487cc2032b10192cd416310fa4",
        ],
        stream_131008: [
            "ba366e4a0f9dd0383e8e8b268ffa73aa161bd800bddf3aa669a5632ab6cee842",
            "0d46963507fd17465a6616c713aafc93583fa642f03e4ad70f49375673e4b781",
        ],
    },
    KnownAnswer {
        name: "all_zero",
        key: "00000000000000000000",
        iv: "00000000000000000000",
        stream_0: [
            "fbe0bf265859051b517a2e4e239fc97f563203161907cf2de7a8790fa1b2e9cd",
            "f75292030268b7382b4c1a759aa2599a285549986e74805903801a4cb5a5d4f2",
        ],
        stream_448: [
            "68450eb0910a98ef1853e0fc1bed8ab6bb08df5f167d34008c2a85284d4b886d",
            "d56883ee92bf18e69121670b4c81a5689c9b0538373d22eb923a28a2db44c0eb",
        ],
        stream_131008: [
            "0fdbd5274e3f69dcaf59f657eb16eea4ae6d223fb34223de220f3fa0ff7a76be",
            "c5f3a1b9106dba8b73c908e936182efdd406ab5d98ec54ac0e02cbbd423bd2b9",
        ],
    },
    KnownAnswer {
        name: "iv_msb_set",
        key: "00000000000000000000",
        iv: "80000000000000000000",
        stream_0: [
            "f8901736640549e3ba7d42ea2d07b9f49233c18d773008bd755585b1a8cbab86",
            "c1e9a9b91f1ad33483fd6ee3696d659c9374260456a36aae11f033a519cbd5d7",
        ],
        stream_448: [
            "4844151714e56a3a2bbfba426a1d60f9a4f265210a91ec29259ae2035234091c",
            "49ffb1893fa102d425c57c39eb4916f6d148dc83ebf7de51eeb9abfe045fb282",
        ],
        stream_131008: [
            "0c5f967451e5ee9c963e2f694f26670829cd18edf2b039d13803b58b7e3ef5e2",
            "40c1f1c21c44ef5ad0be1fe72923d8e9e9c433e87d45265c0465f7ee041be0a2",
        ],
    },
    KnownAnswer {
        name: "mixed_key_iv",
        key: "0053a6f94c9ff24598eb",
        iv: "0d74db42a91077de45ac",
        stream_0: [
            "f4cd954a717f26a7d6930830c4e7cf0819f80e03f25f342c64adc66aba7f8a8e",
            "6eaa49f23632ae3cd41a7bd290a0132f81c6d4043b6e397d7388f3a03b5fe358",
        ],
        stream_448: [
            "60133066d62a1e2677bdf9e273de0d6c47dd919197e3d5acbb69aca64207b1d7",
            "89cb1338c82128c7ebc0f7e0fd9a3666e886dfbc9a1306a7afed7415aa3607e9",
        ],
        stream_131008: [
            "48107374a9ce3aaf78221ae77789247cf6896a249ed75dce0cf2d30eb9d889a0",
            "c61c9f480e5c07381ded9fab2ad54333e82c89ba92e6e47fd828f1a66a8656e0",
        ],
    },
    KnownAnswer {
        name: "mixed_key_iv_alt",
        key: "0558abfe51a4f74a9df0",
        iv: "167de44bb21980e74eb5",
        stream_0: [
            "a850a970abcf5f73bcc5db76f6b5e856362f1b36ac498d05c20fbe7763598de1",
            "fd98b03cc54060e8c9c19b16490c665c3636a03bab46656a695ed75f0e659f04",
        ],
        stream_448: [
            "2b87ea0cf0600d8af6059088a5e8696fa4ce7fce252151c81f835c89d0ec90aa",
            "4deb4b8cccbfcf5539d82b52db907d591e4fac0cc2e0f52c2b70e6ade752f689",
        ],
        stream_131008: [
            "85e6891e2a605cf81224112e596b40a68c9d971afc4376220b8160dcb36d55c0",
            "4b0c21af68a2ec38b4145f32bedce26012cf2151d6768e4cd025114c5e3149a5",
        ],
    },
];

fn decode(halves: &[&str]) -> Vec<u8> {
    hex::decode(halves.concat()).unwrap()
}

fn engine_for(answer: &KnownAnswer) -> Trivium {
    let key = hex::decode(answer.key).unwrap();
    let iv = hex::decode(answer.iv).unwrap();
    Trivium::initialize(&key, &iv).unwrap()
}

/// Skip `count` keystream bytes.
fn skip(engine: &mut Trivium, count: usize) {
    for _ in engine.keystream(count) {}
}

fn find(name: &str) -> &'static KnownAnswer {
    KNOWN_ANSWERS.iter().find(|answer| answer.name == name).unwrap()
}

fn check_first_block(name: &str) {
    let answer = find(name);
    let mut engine = engine_for(answer);
    let actual: Vec<u8> = engine.keystream(64).collect();
    assert_eq!(actual, decode(&answer.stream_0), "{name}: bytes 0..64");
}

#[test]
fn key_msb_set_first_block() {
    check_first_block("key_msb_set");
}

#[test]
fn iv_msb_set_first_block() {
    check_first_block("iv_msb_set");
}

#[test]
fn mixed_key_iv_first_block() {
    check_first_block("mixed_key_iv");
}

#[test]
fn all_zero_first_block() {
    check_first_block("all_zero");
}

#[test]
fn all_sample_windows_match() {
    for answer in KNOWN_ANSWERS {
        let mut engine = engine_for(answer);

        let block_0: Vec<u8> = engine.keystream(64).collect();
        assert_eq!(block_0, decode(&answer.stream_0), "{}: bytes 0..64", answer.name);

        skip(&mut engine, 448 - 64);
        let block_448: Vec<u8> = engine.keystream(64).collect();
        assert_eq!(block_448, decode(&answer.stream_448), "{}: bytes 448..512", answer.name);

        skip(&mut engine, 131_008 - 512);
        let mut block_131008 = [0u8; 64];
        engine.fill_keystream(&mut block_131008);
        assert_eq!(
            block_131008.to_vec(),
            decode(&answer.stream_131008),
            "{}: bytes 131008..131072",
            answer.name
        );
    }
}

#[test]
fn apply_keystream_encrypts_with_published_stream() {
    let answer = find("mixed_key_iv");
    let expected = decode(&answer.stream_0);

    // XOR into zeros yields the keystream itself
    let mut data = vec![0u8; 64];
    engine_for(answer).apply_keystream(&mut data);
    assert_eq!(data, expected);

    let plaintext: Vec<u8> = (0..64u8).collect();
    let mut ciphertext = plaintext.clone();
    engine_for(answer).apply_keystream(&mut ciphertext);
    for ((c, p), k) in ciphertext.iter().zip(&plaintext).zip(&expected) {
        assert_eq!(*c, p ^ k);
    }
}
