//! Built-in probe tables for the benchmark naming conventions we ingest.
//!
//! Each harness family gets its own ordered registry. Within a registry,
//! probes that capture a size come before the generic "name contains an
//! operation token" probes that would otherwise swallow them with size 1.

use super::probe::{capture_size, capture_str, Anchoring, Classification, ProbeRegistry};
use crate::parser::Harness;
use crate::utils::config::{ARK_OPERATION_NAMES, ZKALC_OPERATIONS};
use crate::utils::error::ProbeError;

/// Probes for the zkalc naming convention and the Rust/JS libraries
/// following it (arkworks, blstrs, halo2, curve25519-dalek, ark-bench)
///
/// **Public** - used for criterion and tinybench output
pub fn zkalc_probes() -> Result<ProbeRegistry, ProbeError> {
    let ops = ZKALC_OPERATIONS.join("|");
    let ark_ops = ARK_OPERATION_NAMES
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|");

    let mut registry = ProbeRegistry::new();
    registry
        // <curve>/msm_G1/1024
        .register(r".*/msm_(G[12t]|ff)/(\d+)", Anchoring::Start, |c| {
            let group = capture_str(c, 1)?;
            Some(Classification::sized(format!("msm_{}", group), capture_size(c, 2)?))
        })?
        .register(r".*/fft/(\d+)", Anchoring::Start, |c| {
            Some(Classification::sized("fft", capture_size(c, 1)?))
        })?
        .register(&format!(".*/({})", ops), Anchoring::Start, |c| {
            Some(Classification::sizeless(capture_str(c, 1)?))
        })?
        .register(r".*/msm/(\d+)", Anchoring::Start, |c| {
            Some(Classification::sized("msm_G1", capture_size(c, 1)?))
        })?
        // curve25519-dalek
        .register(&format!("({})", ops), Anchoring::Start, |c| {
            Some(Classification::sizeless(capture_str(c, 1)?))
        })?
        .register("mul_ec", Anchoring::Start, |_| Some(Classification::sizeless("mul_G1")))?
        .register(r"msm/(G[12t]|ff)/(\d+)", Anchoring::Start, |c| {
            let group = capture_str(c, 1)?;
            Some(Classification::sized(format!("msm_{}", group), capture_size(c, 2)?))
        })?
        // ark-bench: "Arithmetic for <curve>::G1/Addition"
        .register(&format!("Arithmetic for .*::(G[12])/({})", ark_ops), Anchoring::Start, |c| {
            let group = capture_str(c, 1)?;
            let op = ark_operation(capture_str(c, 2)?)?;
            Some(Classification::sizeless(format!("{}_{}", op, group)))
        })?
        // "::G" is how ark-bench names G1 on single-group curves
        .register(&format!("Arithmetic for .*::G/({})", ark_ops), Anchoring::Start, |c| {
            let op = ark_operation(capture_str(c, 1)?)?;
            Some(Classification::sizeless(format!("{}_G1", op)))
        })?
        .register(r"Arithmetic for .*::Fr/Sum of products of size (\d+)", Anchoring::Start, |c| {
            Some(Classification::sized("ip_ff", capture_size(c, 1)?))
        })?
        .register(&format!("Arithmetic for .*::Fr/({})", ark_ops), Anchoring::Start, |c| {
            let op = ark_operation(capture_str(c, 1)?)?;
            Some(Classification::sizeless(format!("{}_ff", op)))
        })?;

    Ok(registry)
}

/// Probes for gnark-crypto Go benchmarks (names without the `Benchmark` prefix)
///
/// **Public** - used for Go benchmark output
pub fn gnark_probes() -> Result<ProbeRegistry, ProbeError> {
    let mut registry = ProbeRegistry::new();
    registry
        .register("ElementAdd", Anchoring::Start, |_| Some(Classification::sizeless("add_ff")))?
        .register("ElementMul", Anchoring::Start, |_| Some(Classification::sizeless("mul_ff")))?
        .register("ElementInverse", Anchoring::Start, |_| Some(Classification::sizeless("invert")))?
        // FFT sizes are given as a power of two
        .register(r"FFT/fft_2\*\*(\d+)bits-", Anchoring::Start, |c| {
            let bits = u32::try_from(capture_size(c, 1)?).ok()?;
            Some(Classification::sized("fft", 2u64.checked_pow(bits)?))
        })?
        .register("G1JacAdd", Anchoring::Start, |_| Some(Classification::sizeless("add_G1")))?
        .register("G1JacScalarMultiplication", Anchoring::Start, |_| {
            Some(Classification::sizeless("mul_G1"))
        })?
        .register(r"MultiExpG1/(\d+)_points", Anchoring::Start, |c| {
            Some(Classification::sized("msm_G1", capture_size(c, 1)?))
        })?
        .register("G2JacAdd", Anchoring::Start, |_| Some(Classification::sizeless("add_G2")))?
        .register("G2JacScalarMultiplication", Anchoring::Start, |_| {
            Some(Classification::sizeless("mul_G2"))
        })?
        .register(r"MultiExpG2/(\d+)_points", Anchoring::Start, |c| {
            Some(Classification::sized("msm_G2", capture_size(c, 1)?))
        })?
        .register("E12Mul", Anchoring::Start, |_| Some(Classification::sizeless("add_Gt")))?
        .register("E12Expt", Anchoring::Start, |_| Some(Classification::sizeless("mul_Gt")))?
        .register("Pairing", Anchoring::Start, |_| Some(Classification::sizeless("pairing")))?
        .register(r"MultiPair/(\d+)_pairs", Anchoring::Start, |c| {
            Some(Classification::sized("msm_Gt", capture_size(c, 1)?))
        })?;

    Ok(registry)
}

/// Registry matching the naming conventions of `harness`
///
/// Raw sample files may come from any harness, so they get the zkalc
/// probes followed by the gnark probes.
pub fn registry_for(harness: Harness) -> Result<ProbeRegistry, ProbeError> {
    match harness {
        Harness::Criterion | Harness::Tinybench => zkalc_probes(),
        Harness::Golang => gnark_probes(),
        Harness::Raw => {
            let mut registry = zkalc_probes()?;
            registry.extend(gnark_probes()?);
            Ok(registry)
        }
    }
}

fn ark_operation(name: &str) -> Option<&'static str> {
    ARK_OPERATION_NAMES
        .iter()
        .find(|(ark, _)| *ark == name)
        .map(|(_, op)| *op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ark_operation_lookup() {
        assert_eq!(ark_operation("Scalar Multiplication"), Some("mul"));
        assert_eq!(ark_operation("Multiplication"), Some("mul"));
        assert_eq!(ark_operation("Sqrt"), None);
    }

    #[test]
    fn test_registries_compile() {
        assert_eq!(zkalc_probes().unwrap().len(), 11);
        assert_eq!(gnark_probes().unwrap().len(), 14);
        assert_eq!(registry_for(Harness::Raw).unwrap().len(), 25);
    }
}
