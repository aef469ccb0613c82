use std::cmp::Ordering;
use std::env;

/// Environment variable that narrows the kernel set chosen for this build.
const BACKEND_OVERRIDE: &str = "LOCOMATH_BACKEND";

// Instruction sets the kernels know how to use
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_feature: &'static str,
    target_arch: &'static [&'static str],
    cfg_flags: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx" => 0,
            "sse" => 1,
            "neon" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // An AVX build also emits `sse`: Vector2 kernels stay on 128-bit lanes.
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse",
                target_feature: "sse2",
                target_arch: &["x86", "x86_64"],
                cfg_flags: &["sse"],
                detected: false,
            },
            CpuFeature {
                name: "avx",
                target_feature: "avx",
                target_arch: &["x86", "x86_64"],
                cfg_flags: &["avx", "sse"],
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_feature: "neon",
                target_arch: &["aarch64"],
                cfg_flags: &["neon"],
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Reads the features rustc will enable for the target being compiled.
// `-C target-cpu=native` or `-C target-feature=+avx` show up here.
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.detected = feature.target_arch.contains(&arch.as_str())
                && enabled.contains(&feature.target_feature);
        }
    }

    fn is_applicable(&self) -> bool {
        env::var("CARGO_CFG_TARGET_FEATURE").is_ok()
    }
}

// Caps the selection at the kernel set named in LOCOMATH_BACKEND.
// It can only narrow what the target supports, never widen it.
struct OverrideDetector {
    requested: String,
}
impl CpuFeatureDetector for OverrideDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if self.requested == "scalar" {
            features.iter_mut().for_each(|feature| feature.detected = false);
            return;
        }

        let cap = features
            .iter()
            .find(|feature| feature.name == self.requested)
            .map(CpuFeature::priority);

        match cap {
            Some(cap) => features
                .iter_mut()
                .filter(|feature| feature.priority() < cap)
                .for_each(|feature| feature.detected = false),
            None => println!(
                "cargo:warning=unknown {BACKEND_OVERRIDE}={}, expected scalar, sse, neon or avx",
                self.requested
            ),
        }
    }

    fn is_applicable(&self) -> bool {
        !self.requested.is_empty()
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        let requested = env::var(BACKEND_OVERRIDE)
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        vec![
            Box::new(TargetFeatureDetector),
            Box::new(OverrideDetector { requested }),
        ]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        // Detectors run in order, later ones refine earlier results
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
            }
        }
    }

    fn apply(features: &mut [CpuFeature]) {
        // Sort features by priority (highest first)
        features.sort();

        // Find and use the highest detected feature (if any)
        // if no feature is detected, use fallback implementation
        let cfg_flags: &[&str] = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected)
            .map(|cpu_feature| cpu_feature.cfg_flags)
            .unwrap_or(&["fallback"]);

        for cfg_flag in cfg_flags {
            println!("cargo:rustc-cfg={cfg_flag}");
        }

        println!("cargo::rustc-check-cfg=cfg(avx)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={BACKEND_OVERRIDE}");

    let mut features = CpuFeature::features();

    PlatformDetector::detect_cpu_features(&mut features);

    PlatformDetector::apply(&mut features);
}
