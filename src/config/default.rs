// 計測設定の具象実装

use crate::core::{BenchConfig, BenchError, BenchResult};
use crate::engine::measure::MeasurePlan;
use crate::engine::verify::DEFAULT_TOLERANCE;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultBenchConfig {
    warmup_iterations: usize,
    measured_iterations: usize,
    colorize: bool,
    verify: bool,
    verify_tolerance: f64,
    max_shapes_per_case: Option<usize>,
}

impl DefaultBenchConfig {
    pub fn new() -> Self {
        Self {
            warmup_iterations: MeasurePlan::DEFAULT_ITERATIONS,
            measured_iterations: MeasurePlan::DEFAULT_ITERATIONS,
            colorize: true,
            verify: false,
            verify_tolerance: DEFAULT_TOLERANCE,
            max_shapes_per_case: None,
        }
    }

    pub fn with_warmup_iterations(mut self, iterations: usize) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    pub fn with_measured_iterations(mut self, iterations: usize) -> Self {
        self.measured_iterations = iterations;
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_verify_tolerance(mut self, tolerance: f64) -> Self {
        self.verify_tolerance = tolerance;
        self
    }

    pub fn with_max_shapes_per_case(mut self, limit: Option<usize>) -> Self {
        self.max_shapes_per_case = limit;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> BenchResult<()> {
        if self.measured_iterations == 0 {
            return Err(BenchError::validation(
                "measured_iterations",
                "1 以上である必要があります",
            ));
        }

        if !self.verify_tolerance.is_finite() || self.verify_tolerance < 0.0 {
            return Err(BenchError::validation(
                "verify_tolerance",
                format!("有限の非負数である必要があります ({})", self.verify_tolerance),
            ));
        }

        if self.max_shapes_per_case == Some(0) {
            return Err(BenchError::validation(
                "max_shapes_per_case",
                "0 は指定できません",
            ));
        }

        Ok(())
    }
}

impl Default for DefaultBenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchConfig for DefaultBenchConfig {
    fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    fn measured_iterations(&self) -> usize {
        self.measured_iterations
    }

    fn colorize(&self) -> bool {
        self.colorize
    }

    fn verify_outputs(&self) -> bool {
        self.verify
    }

    fn verify_tolerance(&self) -> f64 {
        self.verify_tolerance
    }

    fn max_shapes_per_case(&self) -> Option<usize> {
        self.max_shapes_per_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bench_config() {
        let config = DefaultBenchConfig::default();

        assert_eq!(config.warmup_iterations(), 100);
        assert_eq!(config.measured_iterations(), 100);
        assert!(config.colorize());
        assert!(!config.verify_outputs());
        assert_eq!(config.verify_tolerance(), 1e-9);
        assert_eq!(config.max_shapes_per_case(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bench_config_builder() {
        let config = DefaultBenchConfig::new()
            .with_warmup_iterations(0)
            .with_measured_iterations(7)
            .with_colorize(false)
            .with_verify(true)
            .with_verify_tolerance(1e-6)
            .with_max_shapes_per_case(Some(3));

        assert_eq!(config.warmup_iterations(), 0);
        assert_eq!(config.measured_iterations(), 7);
        assert!(!config.colorize());
        assert!(config.verify_outputs());
        assert_eq!(config.verify_tolerance(), 1e-6);
        assert_eq!(config.max_shapes_per_case(), Some(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_measured_iterations() {
        let err = DefaultBenchConfig::new()
            .with_measured_iterations(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, BenchError::Validation { ref field, .. } if field == "measured_iterations"));
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            let result = DefaultBenchConfig::new()
                .with_verify_tolerance(tolerance)
                .validate();
            assert!(result.is_err(), "{tolerance} は不正");
        }
    }

    #[test]
    fn test_validate_rejects_zero_shape_limit() {
        let result = DefaultBenchConfig::new()
            .with_max_shapes_per_case(Some(0))
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_boxed_config_forwards() {
        let boxed: Box<dyn BenchConfig> =
            Box::new(DefaultBenchConfig::new().with_measured_iterations(3));
        assert_eq!(boxed.measured_iterations(), 3);
    }
}
