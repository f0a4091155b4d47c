#![allow(dead_code)]

use std::io::Write;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use hmac::{Hmac, Mac};
use json_urlsafe::{Signer, UrlSafeSerializer};
use serde_json::Value;
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '.';

/// HMAC-SHA256 signer producing `payload.signature` tokens.
///
/// The key is derived from secret and salt; verification uses the constant-time
/// comparison provided by `Mac::verify_slice`.
pub struct HmacSigner {
    key: [u8; 32],
}

#[derive(Debug, thiserror::Error)]
pub enum BadSignature {
    #[error("no separator in token")]
    MissingSeparator,
    #[error("signature is not base64url")]
    Malformed,
    #[error("signature does not match")]
    Mismatch,
}

impl HmacSigner {
    pub fn new(secret: &str, salt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b"signer");
        hasher.update(secret.as_bytes());
        Self { key: hasher.finalize().into() }
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(&self.key).expect("hmac accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }
}

impl Signer for HmacSigner {
    type Error = BadSignature;

    fn sign(&self, payload: &str) -> String {
        let tag = self.mac(payload).finalize().into_bytes();
        format!("{payload}{SEPARATOR}{}", URL_SAFE_NO_PAD.encode(tag))
    }

    fn unsign(&self, signed: &str) -> Result<String, BadSignature> {
        let (payload, signature) = signed
            .rsplit_once(SEPARATOR)
            .ok_or(BadSignature::MissingSeparator)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| BadSignature::Malformed)?;
        self.mac(payload)
            .verify_slice(&signature)
            .map_err(|_| BadSignature::Mismatch)?;
        Ok(payload.to_owned())
    }
}

/// Compresses `data` into a complete zlib stream.
pub fn zlib(data: &[u8], level: Compression) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), level);
    encoder.write_all(data).expect("in-memory zlib write");
    encoder.finish().expect("in-memory zlib finish")
}

/// Builds a framed string by hand: optional `.` marker plus unpadded base64url.
pub fn frame_payload(payload: &[u8], marked: bool) -> String {
    let body = URL_SAFE_NO_PAD.encode(payload);
    if marked {
        format!(".{body}")
    } else {
        body
    }
}

pub fn serializer() -> UrlSafeSerializer<HmacSigner> {
    UrlSafeSerializer::new(HmacSigner::new("secret-key", "cookie-session"))
}

/// Replaces the character at `index` with a different base64url character.
pub fn flip_char(token: &str, index: usize) -> String {
    token
        .char_indices()
        .map(|(i, c)| match (i == index, c) {
            (true, 'A') => 'B',
            (true, _) => 'A',
            (false, c) => c,
        })
        .collect()
}

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    pub fn range(&mut self, n: u64) -> u64 {
        if n == 0 {
            0
        } else {
            self.next_u64() % n
        }
    }
}

fn random_scalar(rng: &mut Lcg) -> Value {
    match rng.range(6) {
        0 => Value::Null,
        1 => Value::Bool(rng.range(2) == 1),
        2 => Value::Number(serde_json::Number::from((rng.range(2000) as i64) - 1000)),
        3 => Value::from(rng.range(400) as f64 / 8.0),
        4 => Value::String("ab".repeat(rng.range(40) as usize)),
        _ => Value::String(format!("s{}é", rng.range(100))),
    }
}

fn random_value(rng: &mut Lcg, depth: usize) -> Value {
    if depth == 0 {
        return random_scalar(rng);
    }
    match rng.range(4) {
        0 => random_scalar(rng),
        1 => {
            let len = rng.range(6) as usize;
            Value::Array((0..len).map(|_| random_value(rng, depth - 1)).collect())
        }
        _ => random_object(rng, depth - 1),
    }
}

fn random_object(rng: &mut Lcg, depth: usize) -> Value {
    let len = (1 + rng.range(5)) as usize;
    let mut map = serde_json::Map::new();
    for i in 0..len {
        map.insert(format!("k{i}"), random_value(rng, depth));
    }
    Value::Object(map)
}

pub fn random_json(seed: u64, depth: usize) -> Value {
    let mut rng = Lcg::new(seed);
    random_object(&mut rng, depth)
}

pub fn seeds() -> [u64; 12] {
    [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_0000_00ff_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
        0x1111_2222_3333_4444_u64,
        0x2222_3333_4444_5555_u64,
        0x89ab_cdef_0123_4567_u64,
        0xfedc_ba98_7654_3210_u64,
        0x1357_9bdf_2468_ace0_u64,
        0x0f0f_f0f0_55aa_aa55_u64,
        0xa5a5_5a5a_dead_beef_u64,
    ]
}
