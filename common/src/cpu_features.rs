//! CPU feature detection for runtime SIMD dispatch.
//!
//! Detection runs once, on first use, and the result is cached for the life of
//! the process. Converters call these helpers instead of the
//! `is_*_feature_detected!` macros so that capability checks never repeat
//! CPUID work inside a hot loop.

use std::sync::OnceLock;

/// Vector instruction sets the converters know how to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuFeatures {
    /// x86_64 byte shuffle and rounding multiply-high (`pshufb`, `pmulhrsw`).
    pub ssse3: bool,
    /// x86_64 packed single-precision dot product (`dpps`).
    pub sse4_1: bool,
    /// aarch64 Advanced SIMD.
    pub neon: bool,
}

static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Get cached CPU features (detected once on first call).
#[inline]
pub fn get() -> CpuFeatures {
    *FEATURES.get_or_init(detect)
}

#[cfg(target_arch = "x86_64")]
fn detect() -> CpuFeatures {
    CpuFeatures {
        ssse3: is_x86_feature_detected!("ssse3"),
        sse4_1: is_x86_feature_detected!("sse4.1"),
        neon: false,
    }
}

#[cfg(target_arch = "aarch64")]
fn detect() -> CpuFeatures {
    CpuFeatures {
        ssse3: false,
        sse4_1: false,
        neon: std::arch::is_aarch64_feature_detected!("neon"),
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn detect() -> CpuFeatures {
    CpuFeatures::default()
}

/// Check if SSSE3 is available.
#[inline]
pub fn has_ssse3() -> bool {
    get().ssse3
}

/// Check if SSE4.1 is available.
#[inline]
pub fn has_sse4_1() -> bool {
    get().sse4_1
}

/// Check if NEON is available.
#[inline]
pub fn has_neon() -> bool {
    get().neon
}
