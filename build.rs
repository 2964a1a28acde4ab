// Build script that generates parameter constants from `metadata.json`.
// Build scripts are not part of the hashing path, so we allow expect() and panic().
#![allow(clippy::expect_used, clippy::panic)]
//
// Consumes `metadata.json` at the crate root and generates:
// - `modulus_generated.rs` - field modulus as decimal, hex and u32 limbs
// - `params_generated.rs` - permutation shape, round offsets and mixing matrix

use num_bigint::BigUint;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const METADATA_PATH: &str = "metadata.json";

#[derive(Debug, Deserialize)]
struct Metadata {
    version: String,
    field: FieldMetadata,
    poseidon2: PermutationMetadata,
}

#[derive(Debug, Deserialize)]
struct FieldMetadata {
    name: String,
    modulus: String,
    modulus_hex: String,
}

#[derive(Debug, Deserialize)]
struct PermutationMetadata {
    width: usize,
    rate: usize,
    capacity: usize,
    full_rounds: usize,
    partial_rounds: usize,
    sbox_alpha: u64,
    full_round_offsets: Vec<u64>,
    partial_round_offsets: Vec<u64>,
    mix_matrix: Vec<Vec<u64>>,
}

impl Metadata {
    /// Parameters used when `metadata.json` cannot be read.
    fn fallback() -> Self {
        Self {
            version: "1".to_string(),
            field: FieldMetadata {
                name: "bn254_fr".to_string(),
                modulus:
                    "21888242871839275222246405745257275088548364400416034343698204186575808495617"
                        .to_string(),
                modulus_hex: "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
                    .to_string(),
            },
            poseidon2: PermutationMetadata {
                width: 3,
                rate: 2,
                capacity: 1,
                full_rounds: 4,
                partial_rounds: 4,
                sbox_alpha: 5,
                full_round_offsets: vec![1, 2, 3],
                partial_round_offsets: vec![10, 20, 30],
                mix_matrix: vec![vec![2, 1, 1], vec![1, 2, 1], vec![1, 1, 2]],
            },
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed={}", METADATA_PATH);
    println!("cargo:rerun-if-changed=build.rs");

    let metadata = match fs::read_to_string(METADATA_PATH) {
        Ok(content) => match serde_json::from_str::<Metadata>(&content) {
            Ok(m) => m,
            Err(e) => {
                println!(
                    "cargo:warning=Could not parse {}: {}. Using built-in parameters.",
                    METADATA_PATH, e
                );
                Metadata::fallback()
            }
        },
        Err(e) => {
            println!(
                "cargo:warning=Could not read {}: {}. Using built-in parameters.",
                METADATA_PATH, e
            );
            Metadata::fallback()
        }
    };

    if metadata.version != "1" {
        println!(
            "cargo:warning=Unexpected metadata version '{}', expected '1'",
            metadata.version
        );
    }

    validate_permutation(&metadata.poseidon2);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = Path::new(&out_dir);

    generate_modulus_rs(out_path, &metadata.field);
    generate_params_rs(out_path, &metadata.version, &metadata.poseidon2);
}

fn validate_permutation(p: &PermutationMetadata) {
    if p.rate + p.capacity != p.width {
        panic!(
            "rate ({}) + capacity ({}) must equal width ({})",
            p.rate, p.capacity, p.width
        );
    }
    if p.full_rounds % 2 != 0 {
        panic!("full_rounds must be even, got {}", p.full_rounds);
    }
    if p.full_round_offsets.len() != p.width || p.partial_round_offsets.len() != p.width {
        panic!("round offsets must have exactly {} entries", p.width);
    }
    if p.mix_matrix.len() != p.width || p.mix_matrix.iter().any(|row| row.len() != p.width) {
        panic!("mix_matrix must be {}x{}", p.width, p.width);
    }
}

fn parse_modulus(digits: &str, radix: u32, key: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), radix).unwrap_or_else(|| {
        panic!(
            "{} in {} is not a base-{} integer",
            key, METADATA_PATH, radix
        )
    })
}

fn generate_modulus_rs(out_path: &Path, field: &FieldMetadata) {
    let modulus = parse_modulus(&field.modulus, 10, "modulus");
    if modulus != parse_modulus(&field.modulus_hex, 16, "modulus_hex") {
        panic!("modulus and modulus_hex in {} disagree", METADATA_PATH);
    }
    let bits = modulus.bits();
    if bits > 256 {
        panic!("modulus does not fit in 256 bits");
    }

    let mut limbs = modulus.to_u32_digits();
    limbs.resize(8, 0);
    let limbs_src: Vec<String> = limbs.iter().map(|l| format!("0x{:08x}", l)).collect();

    let code = format!(
        r#"// Field modulus generated from metadata.json.
//
// DO NOT EDIT - This file is generated by build.rs

/// Name of the scalar field.
pub const FIELD_NAME: &str = "{name}";

/// Field modulus as a decimal string.
pub const MODULUS_DECIMAL: &str = "{decimal}";

/// Field modulus as big-endian hex.
pub const MODULUS_HEX: &str = "{hex}";

/// Field modulus as little-endian u32 limbs.
pub const MODULUS_LIMBS: [u32; 8] = [{limbs}];

/// Bit length of the modulus.
pub const MODULUS_BITS: u32 = {bits};
"#,
        name = field.name,
        decimal = field.modulus,
        hex = field.modulus_hex.to_lowercase(),
        limbs = limbs_src.join(", "),
        bits = bits,
    );

    fs::write(out_path.join("modulus_generated.rs"), code)
        .expect("Failed to write modulus_generated.rs");
}

fn format_row(row: &[u64]) -> String {
    let items: Vec<String> = row.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn generate_params_rs(out_path: &Path, version: &str, p: &PermutationMetadata) {
    let matrix_rows: Vec<String> = p.mix_matrix.iter().map(|r| format_row(r)).collect();

    let code = format!(
        r#"// Permutation parameters generated from metadata.json.
//
// DO NOT EDIT - This file is generated by build.rs

/// Version of the parameter metadata.
pub const PARAMS_VERSION: &str = "{version}";

/// Permutation state width (t).
pub const WIDTH: usize = {width};

/// Sponge rate (number of preimage elements).
pub const RATE: usize = {rate};

/// Sponge capacity.
pub const CAPACITY: usize = {capacity};

/// Number of full rounds, split evenly before and after the partial rounds.
pub const FULL_ROUNDS: usize = {full};

/// Number of partial rounds.
pub const PARTIAL_ROUNDS: usize = {partial};

/// Total rounds (full + partial).
pub const TOTAL_ROUNDS: usize = {total};

/// S-box exponent.
pub const SBOX_ALPHA: u64 = {alpha};

/// Per-lane offsets added to the round index in full rounds.
pub const FULL_ROUND_OFFSETS: [u64; {width}] = {full_offsets};

/// Per-lane offsets added to the round index in partial rounds.
pub const PARTIAL_ROUND_OFFSETS: [u64; {width}] = {partial_offsets};

/// Linear mixing matrix applied after every S-box layer.
pub const MIX_MATRIX: [[u64; {width}]; {width}] = [{matrix}];
"#,
        version = version,
        width = p.width,
        rate = p.rate,
        capacity = p.capacity,
        full = p.full_rounds,
        partial = p.partial_rounds,
        total = p.full_rounds + p.partial_rounds,
        alpha = p.sbox_alpha,
        full_offsets = format_row(&p.full_round_offsets),
        partial_offsets = format_row(&p.partial_round_offsets),
        matrix = matrix_rows.join(", "),
    );

    fs::write(out_path.join("params_generated.rs"), code)
        .expect("Failed to write params_generated.rs");
}
