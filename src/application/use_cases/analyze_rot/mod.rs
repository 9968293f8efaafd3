use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::ports::outbound::{
    CommandInvocation, CommandOutput, CommandRunner, ManifestReader, ProgressReporter,
};
use crate::rot_analysis::domain::{PackageInfo, PackageManagerQuery, RotResult, MANIFEST_FILE_NAME};
use crate::rot_analysis::services::{parse_lenient, Aggregator, SkippedEntry};
use crate::shared::error::RodepsError;
use crate::shared::Result;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of npm queries per analysis, for progress reporting
const QUERY_COUNT: usize = 2;

/// AnalyzeRotUseCase - Core use case for the rotten dependencies analysis
///
/// This use case orchestrates the analysis workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `CR` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeRotUseCase<MR, CR, PR> {
    manifest_reader: MR,
    command_runner: CR,
    progress_reporter: PR,
    completed_queries: AtomicUsize,
}

impl<MR, CR, PR> AnalyzeRotUseCase<MR, CR, PR>
where
    MR: ManifestReader,
    CR: CommandRunner,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeRotUseCase with injected dependencies
    pub fn new(manifest_reader: MR, command_runner: CR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            command_runner,
            progress_reporter,
            completed_queries: AtomicUsize::new(0),
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - Project directory, npm binary and query timeout
    ///
    /// # Returns
    /// AnalysisResponse containing the package info and the filled counters
    ///
    /// # Errors
    /// Fails when package.json is missing, when either npm query fails hard,
    /// or when a query times out. Nothing is aggregated in that case.
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Every query needs a project directory
        self.ensure_manifest(&request)?;

        // Step 2: Best-effort package identity for the report header
        let package_info = self.read_package_info(&request);

        // Step 3: Both queries are read-only and independent
        self.completed_queries.store(0, Ordering::SeqCst);
        let (installed_tree, outdated_listing) =
            tokio::try_join!(self.list_installed(&request), self.list_outdated(&request))?;

        // Step 4: Fold both reports into fresh counters
        let outcome = Aggregator::aggregate(RotResult::new(), &installed_tree, &outdated_listing);
        self.report_skipped(&outcome.skipped);

        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} installed package(s), {} outdated",
            outcome.result.all().installed,
            outcome.result.all().outdated
        ));

        Ok(AnalysisResponse::new(
            package_info,
            outcome.result,
            outcome.skipped.len(),
        ))
    }

    fn ensure_manifest(&self, request: &AnalysisRequest) -> Result<()> {
        if !self.manifest_reader.manifest_exists(&request.project_path) {
            return Err(RodepsError::ManifestNotFound {
                path: request.project_path.join(MANIFEST_FILE_NAME),
                suggestion: format!(
                    "package.json does not exist in project directory \"{}\".\n   \
                     Please run rodeps in the root directory of an npm project.",
                    request.project_path.display()
                ),
            }
            .into());
        }

        self.progress_reporter.report("📖 Found package.json");
        Ok(())
    }

    fn read_package_info(&self, request: &AnalysisRequest) -> PackageInfo {
        match self.manifest_reader.read_package_info(&request.project_path) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(error = %e, "package.json could not be read");
                self.progress_reporter.report_warning(
                    "⚠️  Warning: Could not retrieve analyzed package name and version",
                );
                PackageInfo::unknown()
            }
        }
    }

    /// Installed tree. Stderr output, a timeout or a non-zero exit without
    /// any output are failures.
    async fn list_installed(&self, request: &AnalysisRequest) -> Result<Value> {
        let query = PackageManagerQuery::InstalledTree;
        let output = self.run_query(query, request).await?;

        if output.timed_out {
            return Err(Self::timeout_error(query, request));
        }

        if output.has_stderr() {
            return Err(RodepsError::QueryFailed {
                query: query.command_line(&request.npm_command),
                details: output.stderr.trim().to_string(),
            }
            .into());
        }

        if !output.success() && !output.has_stdout() {
            return Err(RodepsError::QueryFailed {
                query: query.command_line(&request.npm_command),
                details: Self::describe_failure(&output),
            }
            .into());
        }

        self.mark_query_done(query);
        Ok(parse_lenient(&output.stdout))
    }

    /// Outdated listing. npm exits non-zero whenever something is outdated,
    /// so only a non-zero exit without any output is a failure. Output
    /// captured before a timeout is still used.
    async fn list_outdated(&self, request: &AnalysisRequest) -> Result<Value> {
        let query = PackageManagerQuery::OutdatedListing;
        let output = self.run_query(query, request).await?;

        if output.timed_out {
            if !output.has_stdout() {
                return Err(Self::timeout_error(query, request));
            }
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: `{}` timed out; using the output it produced so far",
                query.command_line(&request.npm_command)
            ));
        } else if !output.success() && !output.has_stdout() {
            return Err(RodepsError::QueryFailed {
                query: query.command_line(&request.npm_command),
                details: Self::describe_failure(&output),
            }
            .into());
        }

        self.mark_query_done(query);
        Ok(parse_lenient(&output.stdout))
    }

    async fn run_query(
        &self,
        query: PackageManagerQuery,
        request: &AnalysisRequest,
    ) -> Result<CommandOutput> {
        let invocation = CommandInvocation::new(
            request.npm_command.as_str(),
            query.args(),
            request.project_path.clone(),
        );

        self.progress_reporter
            .report(&format!("🔍 Running `{}`...", invocation.display()));

        let output = self
            .command_runner
            .run(&invocation, request.query_timeout)
            .await?;

        tracing::debug!(
            query = query.label(),
            exit_code = ?output.exit_code,
            timed_out = output.timed_out,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "query finished"
        );

        Ok(output)
    }

    fn mark_query_done(&self, query: PackageManagerQuery) {
        let done = self.completed_queries.fetch_add(1, Ordering::SeqCst) + 1;
        self.progress_reporter
            .report_progress(done, QUERY_COUNT, Some(query.label()));
        self.progress_reporter
            .report(&format!("   - {}: OK", query.label()));
    }

    fn timeout_error(query: PackageManagerQuery, request: &AnalysisRequest) -> anyhow::Error {
        RodepsError::QueryTimeout {
            query: query.command_line(&request.npm_command),
            timeout: request.query_timeout,
        }
        .into()
    }

    fn describe_failure(output: &CommandOutput) -> String {
        let status = match output.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "was terminated by a signal".to_string(),
        };

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            format!("Command {} without output: {}", status, stderr)
        } else {
            format!("Command {} without output", status)
        }
    }

    fn report_skipped(&self, skipped: &[SkippedEntry]) {
        for entry in skipped {
            let message = match &entry.declared_type {
                Some(declared) => format!(
                    "⚠️  Warning: Unknown dependency type '{}' for package '{}'. Skipping.",
                    declared, entry.package
                ),
                None => format!(
                    "⚠️  Warning: Missing dependency type for package '{}'. Skipping.",
                    entry.package
                ),
            };
            self.progress_reporter.report_warning(&message);
        }
    }
}
