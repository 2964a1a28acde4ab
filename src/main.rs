//! Poseidon2 Oracle CLI.
//!
//! Every command prints one JSON document on stdout: `{"ok": ...}` with exit
//! code 0, or `{"err": {"code", "name", "message"}}` with exit code 1.
//! Logs go to stderr.

use clap::{Parser, Subcommand};
use poseidon2_oracle::conformance::{CorpusRunner, TestResult};
use poseidon2_oracle::error::{ErrorCode, OracleResult};
use poseidon2_oracle::field::{FIELD_NAME, MODULUS_BITS, MODULUS_DECIMAL, MODULUS_HEX};
use poseidon2_oracle::logging::init_tracing;
use poseidon2_oracle::poseidon::{
    self, avalanche, permute_with_trace, PermutationParams, Preimage, CAPACITY, PARAMS_VERSION,
    RATE, TOTAL_ROUNDS, WIDTH,
};
use poseidon2_oracle::witness::CircuitInput;
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "oracle")]
#[command(about = "Poseidon2 Oracle - simplified Poseidon2 hash over BN254", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter, overrides RUST_LOG (e.g. "debug", "poseidon2_oracle=trace")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a two-element preimage
    Hash {
        /// First preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Second preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// Print only the digest
        #[arg(long)]
        plain: bool,
    },

    /// Hash a preimage and print the state after every round
    Trace {
        /// First preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Second preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        second: String,
    },

    /// Produce the circuit input document for a preimage
    Input {
        /// First preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Second preimage element (decimal)
        #[arg(allow_hyphen_values = true)]
        second: String,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recompute the digest of a circuit input document (file or stdin)
    Verify {
        /// Path to the document; reads stdin when omitted
        path: Option<PathBuf>,
    },

    /// Compare digests of two preimages bit by bit
    Avalanche {
        /// Original preimage
        #[arg(long, num_args = 2, value_names = ["A", "B"], default_values = ["123456", "789012"])]
        original: Vec<String>,
        /// Modified preimage
        #[arg(long, num_args = 2, value_names = ["A", "B"], default_values = ["123457", "789012"])]
        modified: Vec<String>,
    },

    /// Run a test-vector corpus
    Corpus {
        /// Path to the corpus JSON file
        path: PathBuf,
    },

    /// Print the parameter set as JSON
    ExportMetadata,

    /// Show version information
    Version,
}

fn emit(value: Value) {
    println!("{}", json!({ "ok": value }));
}

fn ok(value: Value) -> ExitCode {
    emit(value);
    ExitCode::SUCCESS
}

fn err(e: &ErrorCode) -> ExitCode {
    warn!(code = e.code(), "{}", e);
    println!(
        "{}",
        json!({ "err": { "code": e.code(), "name": e.name(), "message": e.to_string() } })
    );
    ExitCode::FAILURE
}

fn finish(result: OracleResult<ExitCode>) -> ExitCode {
    result.unwrap_or_else(|e| err(&e))
}

fn cmd_hash(first: &str, second: &str, plain: bool) -> OracleResult<ExitCode> {
    let digest = poseidon::hash_pair(first, second)?;
    if plain {
        println!("{}", digest);
        return Ok(ExitCode::SUCCESS);
    }
    Ok(ok(json!({ "digest": digest })))
}

fn cmd_trace(first: &str, second: &str) -> OracleResult<ExitCode> {
    let preimage = Preimage::parse(&[first, second])?;
    let (final_state, traces) = permute_with_trace(&preimage.initial_state());
    let params = PermutationParams::DEFAULT;
    let [digest, _, _] = final_state;

    let rounds: Vec<Value> = traces
        .iter()
        .enumerate()
        .map(|(round, state)| {
            json!({
                "round": round,
                "kind": params.round_kind(round),
                "constants": params.round_constants(round),
                "state": state,
            })
        })
        .collect();

    Ok(ok(json!({
        "preimage": preimage.elements(),
        "initial_state": preimage.initial_state(),
        "rounds": rounds,
        "digest": digest,
    })))
}

fn cmd_input(first: &str, second: &str, output: Option<PathBuf>) -> OracleResult<ExitCode> {
    let input = CircuitInput::from_preimage(&[first, second])?;
    match output {
        Some(path) => {
            input.write_to(&path)?;
            Ok(ok(json!({
                "path": path.display().to_string(),
                "hashValue": input.hash_value,
            })))
        }
        None => {
            println!("{}", input.to_json_pretty()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_stdin() -> OracleResult<String> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    String::from_utf8(buf).map_err(|_| ErrorCode::E105_InvalidUTF8)
}

fn cmd_verify(path: Option<PathBuf>) -> OracleResult<ExitCode> {
    let input = match path {
        Some(p) => CircuitInput::read_from(p)?,
        None => CircuitInput::from_json(&read_stdin()?)?,
    };
    let verification = input.check()?;
    let valid = verification.valid;
    emit(serde_json::to_value(&verification)?);
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_avalanche(original: &[String], modified: &[String]) -> OracleResult<ExitCode> {
    let report = avalanche(original, modified)?;
    Ok(ok(serde_json::to_value(&report)?))
}

fn cmd_corpus(path: PathBuf) -> ExitCode {
    let runner = match CorpusRunner::load(&path) {
        Ok(r) => r,
        Err(e) => {
            warn!("{}", e);
            println!("{}", json!({ "err": { "message": e.to_string() } }));
            return ExitCode::FAILURE;
        }
    };

    let results = runner.run_all();
    let failures: Vec<Value> = results
        .details
        .iter()
        .filter_map(|(id, r)| match r {
            TestResult::Fail { expected, actual } => {
                Some(json!({ "id": id, "expected": expected, "actual": actual }))
            }
            TestResult::Error { message } => Some(json!({ "id": id, "error": message })),
            _ => None,
        })
        .collect();

    let all_passed = results.all_passed();
    emit(json!({
        "passed": results.passed,
        "failed": results.failed,
        "skipped": results.skipped,
        "errors": results.errors,
        "total": results.total(),
        "all_passed": all_passed,
        "failures": failures,
    }));

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn metadata() -> Value {
    let params = PermutationParams::DEFAULT;
    json!({
        "version": PARAMS_VERSION,
        "field": {
            "name": FIELD_NAME,
            "modulus": MODULUS_DECIMAL,
            "modulus_hex": MODULUS_HEX,
            "bits": MODULUS_BITS,
        },
        "poseidon2": {
            "width": WIDTH,
            "rate": RATE,
            "capacity": CAPACITY,
            "full_rounds": params.full_rounds,
            "partial_rounds": params.partial_rounds,
            "total_rounds": TOTAL_ROUNDS,
            "sbox_alpha": params.sbox_alpha,
            "full_round_offsets": params.full_round_offsets,
            "partial_round_offsets": params.partial_round_offsets,
            "mix_matrix": params.mix_matrix,
        },
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Some(Commands::Hash {
            first,
            second,
            plain,
        }) => {
            debug!("hash");
            finish(cmd_hash(&first, &second, plain))
        }
        Some(Commands::Trace { first, second }) => {
            debug!("trace");
            finish(cmd_trace(&first, &second))
        }
        Some(Commands::Input {
            first,
            second,
            output,
        }) => {
            debug!("input");
            finish(cmd_input(&first, &second, output))
        }
        Some(Commands::Verify { path }) => {
            debug!("verify");
            finish(cmd_verify(path))
        }
        Some(Commands::Avalanche { original, modified }) => {
            debug!("avalanche");
            finish(cmd_avalanche(&original, &modified))
        }
        Some(Commands::Corpus { path }) => {
            debug!("corpus");
            cmd_corpus(path)
        }
        Some(Commands::ExportMetadata) => ok(metadata()),
        Some(Commands::Version) => {
            println!("Poseidon2 Oracle v{}", env!("CARGO_PKG_VERSION"));
            println!("Field: {} ({} bits)", FIELD_NAME, MODULUS_BITS);
            ExitCode::SUCCESS
        }
        None => {
            println!("Poseidon2 Oracle v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
