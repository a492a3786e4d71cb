//! Configuration and constants for the pipeline and CLI.

/// Current cost document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output path for the cost document
pub const DEFAULT_OUTPUT_PATH: &str = "models.json";

/// Size assigned to operations without an inherent size parameter
pub const UNIT_SIZE: u64 = 1;

/// Extrapolation rule identifier written for piecewise models
pub const CLAMP_NEAREST_SEGMENT: &str = "clamp-nearest-segment";

// Operation ids emitted by harnesses following the zkalc naming convention
pub const ZKALC_OPERATIONS: &[&str] = &[
    // scalar field
    "mul_ff", "add_ff", "msm_ff", "fft", "invert",
    // G1
    "mul_G1", "add_G1",
    // G2
    "mul_G2", "add_G2",
    // Gt
    "add_Gt", "mul_Gt", "pairing",
];

/// Full vocabulary of canonical operation ids any probe may produce
pub const OPERATION_IDS: &[&str] = &[
    "add_ff", "sub_ff", "mul_ff", "square_ff", "neg_ff", "inv_ff", "double_ff",
    "invert", "ip_ff", "msm_ff", "fft",
    "add_G1", "sub_G1", "double_G1", "neg_G1", "mul_G1", "msm_G1",
    "add_G2", "sub_G2", "double_G2", "neg_G2", "mul_G2", "msm_G2",
    "add_Gt", "mul_Gt", "msm_Gt", "pairing",
];

// ark-bench ("Arithmetic for <curve>::<group>/<Name>") operation names.
// Order matters: "Scalar Multiplication" must be tried before "Multiplication".
pub const ARK_OPERATION_NAMES: &[(&str, &str)] = &[
    ("Double", "double"),
    ("Addition", "add"),
    ("Subtraction", "sub"),
    ("Scalar Multiplication", "mul"),
    ("Negation", "neg"),
    ("Inverse", "inv"),
    ("Multiplication", "mul"),
    ("Square", "square"),
];

/// Prefix of result lines printed by `go test -bench`
pub const GO_BENCH_PREFIX: &str = "Benchmark";
