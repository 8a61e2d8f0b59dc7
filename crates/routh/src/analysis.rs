//! The analysis pipeline: normalise, build, classify, find roots, report.

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::report::StabilityReport;
use routh_core::array::RouthArray;
use routh_core::roots::{classify_roots_with_tolerance, Root};
use routh_core::types::Tolerance;
use routh_poly::{find_roots, parse_polynomial_in, Polynomial};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs Routh-Hurwitz analyses with a fixed configuration.
///
/// An `Analyzer` holds no mutable state, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
    tolerance: Tolerance<f64>,
}

impl Analyzer {
    /// Creates an analyzer with the given configuration.
    ///
    /// A tolerance that is not finite and positive is replaced by the
    /// default, with a warning.
    pub fn new(config: AnalysisConfig) -> Self {
        let tolerance = config.effective_tolerance();
        if !config.tolerance_is_valid() {
            warn!(
                configured = config.tolerance,
                applied = tolerance.value(),
                "invalid tolerance, falling back to the default"
            );
        }
        Self { config, tolerance }
    }

    /// Tolerance applied to every analysis.
    pub fn tolerance(&self) -> Tolerance<f64> {
        self.tolerance
    }

    /// Configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyses a characteristic equation given as text.
    #[tracing::instrument(skip(self), fields(variable = %self.config.variable))]
    pub fn analyze(&self, equation: &str) -> Result<StabilityReport> {
        self.check_variable()?;
        let polynomial = parse_polynomial_in(equation, &self.config.variable)?;
        debug!(degree = ?polynomial.degree(), "parsed characteristic polynomial");
        self.analyze_polynomial(&polynomial)
    }

    /// Analyses an already expanded polynomial.
    pub fn analyze_polynomial(&self, polynomial: &Polynomial<f64>) -> Result<StabilityReport> {
        self.run(polynomial, &polynomial.coefficients())
    }

    /// Analyses a coefficient sequence, highest degree first.
    ///
    /// The sequence is used as given for the Routh array; leading zeros only
    /// drop out of the root computation.
    #[tracing::instrument(skip(self))]
    pub fn analyze_coefficients(&self, coefficients: &[f64]) -> Result<StabilityReport> {
        self.run(&Polynomial::from_descending(coefficients), coefficients)
    }

    /// Analyses independent equations, in parallel when the `parallel`
    /// feature is enabled. Results are in input order.
    pub fn analyze_batch<S>(&self, equations: &[S]) -> Vec<Result<StabilityReport>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            equations
                .par_iter()
                .map(|equation| self.analyze(equation.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            equations
                .iter()
                .map(|equation| self.analyze(equation.as_ref()))
                .collect()
        }
    }

    fn check_variable(&self) -> Result<()> {
        let name = &self.config.variable;
        let valid = !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(AnalysisError::InvalidVariable(name.clone()))
        }
    }

    fn run(&self, polynomial: &Polynomial<f64>, coefficients: &[f64]) -> Result<StabilityReport> {
        let array = RouthArray::build_with_tolerance(coefficients, self.tolerance)?;
        for substitution in array.pivot_substitutions() {
            warn!(
                row = substitution.row,
                derived_row = substitution.derived_row,
                substitute = substitution.substitute,
                "zero in first column of Routh array, substituting epsilon"
            );
        }

        let verdict = array.stability();
        debug!(
            sign_changes = verdict.sign_changes,
            is_stable = verdict.is_stable,
            "classified Routh array"
        );

        let mut report = StabilityReport {
            equation: polynomial.to_string_in(&self.config.variable),
            coefficients: coefficients.to_vec(),
            routh_array: array.to_rows(),
            is_stable: verdict.is_stable,
            sign_changes: verdict.sign_changes,
            roots: None,
            rhs_poles: Vec::new(),
            imaginary_poles: Vec::new(),
            unclassified_roots: 0,
            pivot_substitutions: array.pivot_substitutions().to_vec(),
        };

        if self.config.compute_roots {
            let roots = find_roots(polynomial)?;
            let groups = classify_roots_with_tolerance(&roots, self.tolerance);
            debug!(
                rhp = groups.right_half_plane.len(),
                imaginary = groups.imaginary_axis.len(),
                lhp = groups.left_half_plane,
                "classified roots"
            );
            if groups.unclassified > 0 {
                warn!(count = groups.unclassified, "roots skipped as not numerically comparable");
            }

            report.roots = Some(format_all(&roots));
            report.rhs_poles = format_all(&groups.right_half_plane);
            report.imaginary_poles = format_all(&groups.imaginary_axis);
            report.unclassified_roots = groups.unclassified;

            if report.methods_agree() == Some(false) {
                warn!(
                    sign_changes = report.sign_changes,
                    rhs_poles = report.rhs_poles.len(),
                    "Routh sign changes disagree with root locations"
                );
            }
        }

        Ok(report)
    }
}

fn format_all(roots: &[Root<f64>]) -> Vec<String> {
    roots.iter().map(ToString::to_string).collect()
}
